// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commands that build a local image file from a registry identifier.

use std::io;
use std::path::Path;

use crate::engine::Engine;

/// Pull a mulled image into `cache_dir`.
///
/// With a `namespace`, identifiers under `docker://quay.io/<namespace>/` are
/// saved by their bare `name:tag`; any other identifier is used verbatim as
/// the save path.
pub fn pull_mulled_command(
    engine: &Engine,
    identifier: &str,
    cache_dir: &Path,
    namespace: Option<&str>,
) -> Vec<String> {
    let save_path = namespace
        .and_then(|ns| identifier.strip_prefix(&format!("docker://quay.io/{}/", ns)))
        .unwrap_or(identifier);

    let mut parts = engine.prefix();
    parts.push("build".to_string());
    parts.push(cache_dir.join(save_path).to_string_lossy().into_owned());
    parts.push(identifier.to_string());
    parts
}

/// Pull any image into a registry-shaped tree under `cache_dir`.
///
/// The scheme is dropped and the remaining path segments become
/// sub-directories, so `docker://quay.io/org/tool:1` is saved as
/// `<cache_dir>/quay.io/org/tool:1`. The sub-directory is created here.
/// Identifiers with `.` or `..` segments are rejected as `InvalidInput` so
/// the save path stays inside `cache_dir`.
pub fn pull_command(engine: &Engine, identifier: &str, cache_dir: &Path) -> io::Result<Vec<String>> {
    let without_scheme = match identifier.find("://") {
        Some(pos) if pos > 0 => &identifier[pos + 3..],
        _ => identifier,
    };
    if without_scheme.split('/').any(|segment| segment == "." || segment == "..") {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("image identifier '{}' has relative path segments", identifier),
        ));
    }
    let (dirs, name) = match without_scheme.rsplit_once('/') {
        Some((dirs, name)) => (Some(dirs), name),
        None => (None, without_scheme),
    };

    let mut save_dir = cache_dir.to_path_buf();
    if let Some(dirs) = dirs {
        save_dir.extend(dirs.split('/').filter(|segment| !segment.is_empty()));
    }
    // create_dir_all succeeds when another caller created the directory first
    std::fs::create_dir_all(&save_dir)?;
    tracing::debug!(dir = %save_dir.display(), identifier, "image cache directory ready");

    let mut parts = engine.prefix();
    parts.push("build".to_string());
    parts.push(save_dir.join(name).to_string_lossy().into_owned());
    parts.push(identifier.to_string());
    Ok(parts)
}

#[cfg(test)]
#[path = "pull_tests.rs"]
mod tests;
