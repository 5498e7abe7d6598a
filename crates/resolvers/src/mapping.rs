// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-tool container table maintained by the administrator.

use cres_core::{ContainerDescription, EnabledTypes, ToolInfo, DEFAULT_SHELL};

use crate::config::MappingEntry;
use crate::error::ConfigError;
use crate::resolver::{ContainerResolver, ResolveOptions, ResolverKind};

/// Looks a tool up by id (and optionally version) in an ordered table.
///
/// Rows without a `tool_version` match every version of the tool. The first
/// row that matches and whose engine is enabled wins, so specific versions
/// should be listed before catch-all rows.
#[derive(Debug, Clone)]
pub struct MappingResolver {
    mappings: Vec<MappingEntry>,
    shell: String,
}

impl MappingResolver {
    pub fn new(mappings: Vec<MappingEntry>) -> Result<Self, ConfigError> {
        for (index, entry) in mappings.iter().enumerate() {
            if entry.tool_id.is_empty() {
                return Err(ConfigError::EmptyMappingToolId { index });
            }
            if entry.identifier.trim().is_empty() {
                return Err(ConfigError::EmptyMappingIdentifier { index });
            }
        }
        Ok(Self { mappings, shell: DEFAULT_SHELL.to_string() })
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    pub fn mappings(&self) -> &[MappingEntry] {
        &self.mappings
    }

    fn row_matches(entry: &MappingEntry, tool_info: &ToolInfo) -> bool {
        if entry.tool_id != tool_info.tool_id {
            return false;
        }
        match &entry.tool_version {
            Some(version) => tool_info.tool_version.as_deref() == Some(version.as_str()),
            None => true,
        }
    }
}

impl ContainerResolver for MappingResolver {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Mapping
    }

    fn resolve(
        &self,
        enabled: &EnabledTypes,
        tool_info: &ToolInfo,
        _options: &ResolveOptions,
    ) -> Option<ContainerDescription> {
        // Resolving bare requirements rather than a tool: nothing to look up.
        if tool_info.tool_id.is_empty() {
            return None;
        }

        let found = self
            .mappings
            .iter()
            .filter(|entry| Self::row_matches(entry, tool_info))
            .map(|entry| {
                ContainerDescription::new(entry.identifier.as_str(), entry.container_type)
                    .with_shell(self.shell.as_str())
            })
            .find(|desc| desc.is_enabled(enabled))?;
        tracing::debug!(tool_id = %tool_info.tool_id, container = %found, "mapped container");
        Some(found)
    }
}

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;
