// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered, first-match resolver chain.

use std::path::Path;

use cres_core::{ContainerDescription, EnabledTypes, ToolInfo};

use crate::config::{ChainConfig, Format};
use crate::error::ConfigError;
use crate::explicit::{ExplicitResolver, ExplicitSingularityResolver};
use crate::resolver::{ContainerResolver, ResolveOptions, ResolverKind};

/// A description together with the resolver that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub kind: ResolverKind,
    pub description: ContainerDescription,
}

/// Resolvers tried in configured order; the first match wins.
///
/// Order is significant: placing a fallback ahead of the explicit resolver
/// hides every author-declared container.
#[derive(Debug, Default)]
pub struct ResolverChain {
    resolvers: Vec<Box<dyn ContainerResolver>>,
}

impl ResolverChain {
    pub fn new(resolvers: Vec<Box<dyn ContainerResolver>>) -> Self {
        Self { resolvers }
    }

    /// Chain used when no configuration is supplied: trust author-declared
    /// containers, directly or through singularity.
    pub fn default_chain() -> Self {
        Self::new(vec![Box::new(ExplicitResolver), Box::new(ExplicitSingularityResolver)])
    }

    /// Build every configured resolver, failing on the first invalid entry.
    pub fn from_config(config: ChainConfig) -> Result<Self, ConfigError> {
        let default_shell = config.default_shell().to_string();
        let resolvers = config
            .resolvers
            .into_iter()
            .map(|entry| entry.build(&default_shell))
            .collect::<Result<Vec<_>, _>>()?;
        let chain = Self::new(resolvers);
        tracing::info!(resolvers = chain.len(), kinds = ?chain.kinds(), "resolver chain configured");
        Ok(chain)
    }

    pub fn from_str_with_format(content: &str, format: Format) -> Result<Self, ConfigError> {
        Self::from_config(ChainConfig::parse(content, format)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_config(ChainConfig::load(path)?)
    }

    pub fn push(&mut self, resolver: impl ContainerResolver + 'static) {
        self.resolvers.push(Box::new(resolver));
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    pub fn kinds(&self) -> Vec<ResolverKind> {
        self.resolvers.iter().map(|r| r.kind()).collect()
    }

    /// First match along the chain, with the resolver that produced it.
    pub fn find(
        &self,
        enabled: &EnabledTypes,
        tool_info: &ToolInfo,
        options: &ResolveOptions,
    ) -> Option<Resolved> {
        let resolved = self.resolvers.iter().find_map(|resolver| {
            resolver
                .resolve(enabled, tool_info, options)
                .map(|description| Resolved { kind: resolver.kind(), description })
        });
        if resolved.is_none() {
            tracing::debug!(tool_id = %tool_info.tool_id, enabled = %enabled, "no container resolved");
        }
        resolved
    }

    /// The container to run `tool_info` in, or `None` to run unconfined.
    pub fn resolve(
        &self,
        enabled: &EnabledTypes,
        tool_info: &ToolInfo,
        options: &ResolveOptions,
    ) -> Option<ContainerDescription> {
        self.find(enabled, tool_info, options).map(|resolved| resolved.description)
    }
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
