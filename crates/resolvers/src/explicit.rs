// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolvers that trust containers declared by the tool author.

use cres_core::{ContainerDescription, EnabledTypes, ToolInfo};

use crate::resolver::{ContainerResolver, ResolveOptions, ResolverKind};

/// Author-declared descriptions, skipping those with a blank identifier.
fn declared(tool_info: &ToolInfo) -> impl Iterator<Item = &ContainerDescription> {
    tool_info
        .container_descriptions
        .iter()
        .filter(|desc| !desc.identifier().trim().is_empty())
}

/// First author-declared container whose engine is enabled.
///
/// Ignores the tool's requirements entirely; the author is assumed to have
/// picked a container that satisfies them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitResolver;

impl ContainerResolver for ExplicitResolver {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Explicit
    }

    fn resolve(
        &self,
        enabled: &EnabledTypes,
        tool_info: &ToolInfo,
        _options: &ResolveOptions,
    ) -> Option<ContainerDescription> {
        let found = declared(tool_info).find(|desc| desc.is_enabled(enabled))?;
        tracing::debug!(tool_id = %tool_info.tool_id, container = %found, "explicit container");
        Some(found.as_explicit())
    }
}

/// Like [`ExplicitResolver`], but runs declared docker images through
/// singularity by rewriting them to `docker://` identifiers first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitSingularityResolver;

impl ContainerResolver for ExplicitSingularityResolver {
    fn kind(&self) -> ResolverKind {
        ResolverKind::ExplicitSingularity
    }

    fn resolve(
        &self,
        enabled: &EnabledTypes,
        tool_info: &ToolInfo,
        options: &ResolveOptions,
    ) -> Option<ContainerDescription> {
        let found = declared(tool_info)
            .map(ContainerDescription::docker_to_singularity)
            .find(|desc| desc.is_enabled(enabled))?;
        if options.install {
            tracing::debug!(container = %found, "install requested, deferring to executor");
        }
        tracing::debug!(tool_id = %tool_info.tool_id, container = %found, "explicit singularity container");
        Some(found.as_explicit())
    }
}

#[cfg(test)]
#[path = "explicit_tests.rs"]
mod tests;
