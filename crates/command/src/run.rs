// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The command line that runs a tool inside a container.

use crate::engine::Engine;
use crate::error::CommandError;
use crate::quote::quote;

/// Parameters for one containerized tool run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSpec {
    /// Pre-assembled shell fragment run inside the container. Emitted as-is;
    /// it may contain pipes and redirects.
    pub container_command: String,
    pub image: String,
    /// Bind specs (`src[:dest[:opts]]`), in mount order.
    pub volumes: Vec<String>,
    /// Variables exported into the container, in order.
    pub env: Vec<(String, String)>,
    /// Job working directory. Only emitted (as `--pwd`) with `emit_pwd`.
    pub working_dir: Option<String>,
    pub emit_pwd: bool,
    /// Extra engine arguments, emitted verbatim before the image.
    pub extra_args: Option<String>,
}

impl RunSpec {
    pub fn new(container_command: impl Into<String>, image: impl Into<String>) -> Self {
        Self { container_command: container_command.into(), image: image.into(), ..Self::default() }
    }

    cres_core::setters! {
        set {
            volumes: Vec<String>,
            env: Vec<(String, String)>,
            emit_pwd: bool,
        }
        option {
            working_dir: String,
            extra_args: String,
        }
    }

    pub fn volume(mut self, volume: impl Into<String>) -> Self {
        self.volumes.push(volume.into());
        self
    }

    pub fn env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

/// Build the full `exec` command line for `spec`.
///
/// Layout: `<PREFIX>KEY=value... [sudo] engine -s exec [-B vol]... [--home h:h]
/// [extra args] <quoted image> <container command>`.
/// A `HOME` entry in the environment also binds the container home to it.
/// `--pwd <dir>` follows `--home` only when the spec opts in with `emit_pwd`.
pub fn run_command(engine: &Engine, spec: &RunSpec) -> Result<String, CommandError> {
    let mut parts: Vec<String> = Vec::new();

    let mut home = None;
    for (key, value) in &spec.env {
        if key == "HOME" {
            home = Some(value.as_str());
        }
        parts.push(format!("{}{}={}", engine.env_prefix, key, value));
    }

    parts.extend(engine.prefix());
    parts.push("-s".to_string());
    parts.push("exec".to_string());

    for volume in &spec.volumes {
        parts.push("-B".to_string());
        parts.push(volume.clone());
    }
    if let Some(home) = home {
        parts.push("--home".to_string());
        parts.push(format!("{}:{}", home, home));
    }
    if let Some(dir) = spec.working_dir.as_deref().filter(|_| spec.emit_pwd) {
        parts.push("--pwd".to_string());
        parts.push(quote(dir)?);
    }
    if let Some(extra) = spec.extra_args.as_deref().filter(|extra| !extra.is_empty()) {
        parts.push(extra.to_string());
    }

    parts.push(quote(&spec.image)?);
    parts.push(spec.container_command.clone());
    Ok(parts.join(" "))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
