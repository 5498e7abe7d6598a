// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for specs.

use std::path::{Path, PathBuf};

pub use cres_core::test_support::{docker, singularity, tool_with_containers, tool_with_package};
pub use cres_core::{ContainerType, EnabledTypes, Requirement, ToolInfo};
pub use cres_resolvers::{ResolveOptions, ResolverChain, ResolverKind};

/// Both docker and singularity enabled, as on a typical destination.
pub fn both() -> EnabledTypes {
    "docker,singularity".parse().unwrap()
}

/// A scratch directory holding resolver configuration files.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `name` inside the project and return its path.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn chain(&self, name: &str, content: &str) -> ResolverChain {
        let path = self.file(name, content);
        ResolverChain::load(&path).unwrap_or_else(|e| panic!("{} should load: {}", name, e))
    }
}

/// Resolve with default options and return `(resolver, identifier)`.
pub fn resolve_with(
    chain: &ResolverChain,
    enabled: &EnabledTypes,
    tool: &ToolInfo,
) -> Option<(ResolverKind, String)> {
    chain
        .find(enabled, tool, &ResolveOptions::default())
        .map(|r| (r.kind, r.description.identifier().to_string()))
}
