// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Administrator resolver configuration.
//!
//! A chain is an ordered list of entries tagged by resolver type:
//!
//! ```yaml
//! - type: explicit
//! - type: mapping
//!   mappings:
//!     - tool_id: bwa_mem
//!       tool_version: "0.7.15"
//!       identifier: quay.io/biocontainers/bwa:0.7.15--0
//! - type: fallback_no_requirements
//!   identifier: ubuntu:20.04
//! ```
//!
//! YAML and JSON accept either the bare list or a `resolvers` table; TOML and
//! HCL need the table form (`[[resolvers]]` / `resolvers = [...]`). The table
//! may also carry a chain-wide `shell`.

use std::path::Path;

use cres_core::{ContainerType, DEFAULT_SHELL};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::explicit::{ExplicitResolver, ExplicitSingularityResolver};
use crate::fallback::{FallbackCondition, FallbackResolver};
use crate::mapping::MappingResolver;
use crate::resolver::{ContainerResolver, ResolverKind};

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Toml,
    Json,
    Hcl,
}

cres_core::simple_display! {
    Format {
        Yaml => "YAML",
        Toml => "TOML",
        Json => "JSON",
        Hcl => "HCL",
    }
}

impl Format {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yml" | "yaml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            "json" => Some(Format::Json),
            "hcl" => Some(Format::Hcl),
            _ => None,
        }
    }
}

/// One row of a mapping resolver's table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingEntry {
    pub tool_id: String,
    /// `None` matches every version of the tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_version: Option<String>,
    pub identifier: String,
    #[serde(default = "default_container_type")]
    pub container_type: ContainerType,
}

impl MappingEntry {
    pub fn new(tool_id: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            tool_id: tool_id.into(),
            tool_version: None,
            identifier: identifier.into(),
            container_type: default_container_type(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.tool_version = Some(version.into());
        self
    }

    pub fn with_type(mut self, container_type: ContainerType) -> Self {
        self.container_type = container_type;
        self
    }
}

fn default_container_type() -> ContainerType {
    ContainerType::Docker
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExplicitConfig {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FallbackConfig {
    // Missing and empty identifiers are rejected when the resolver is built.
    #[serde(default)]
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingConfig {
    pub mappings: Vec<MappingEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
}

/// One configured resolver, tagged by its `type` name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolverConfig {
    Explicit(ExplicitConfig),
    ExplicitSingularity(ExplicitConfig),
    Fallback(FallbackConfig),
    FallbackSingularity(FallbackConfig),
    FallbackNoRequirements(FallbackConfig),
    FallbackNoRequirementsSingularity(FallbackConfig),
    RequiresGalaxyEnvironment(FallbackConfig),
    RequiresGalaxyEnvironmentSingularity(FallbackConfig),
    Mapping(MappingConfig),
}

impl ResolverConfig {
    pub fn kind(&self) -> ResolverKind {
        match self {
            ResolverConfig::Explicit(_) => ResolverKind::Explicit,
            ResolverConfig::ExplicitSingularity(_) => ResolverKind::ExplicitSingularity,
            ResolverConfig::Fallback(_) => ResolverKind::Fallback,
            ResolverConfig::FallbackSingularity(_) => ResolverKind::FallbackSingularity,
            ResolverConfig::FallbackNoRequirements(_) => ResolverKind::FallbackNoRequirements,
            ResolverConfig::FallbackNoRequirementsSingularity(_) => {
                ResolverKind::FallbackNoRequirementsSingularity
            }
            ResolverConfig::RequiresGalaxyEnvironment(_) => ResolverKind::RequiresGalaxyEnvironment,
            ResolverConfig::RequiresGalaxyEnvironmentSingularity(_) => {
                ResolverKind::RequiresGalaxyEnvironmentSingularity
            }
            ResolverConfig::Mapping(_) => ResolverKind::Mapping,
        }
    }

    /// Build the resolver, using `default_shell` where the entry names none.
    pub fn build(self, default_shell: &str) -> Result<Box<dyn ContainerResolver>, ConfigError> {
        use FallbackCondition::{Always, NoRequirements, RequiresGalaxyEnvironment};

        let resolver: Box<dyn ContainerResolver> = match self {
            ResolverConfig::Explicit(_) => Box::new(ExplicitResolver),
            ResolverConfig::ExplicitSingularity(_) => Box::new(ExplicitSingularityResolver),
            ResolverConfig::Fallback(c) => fallback(c, default_shell, Always, false)?,
            ResolverConfig::FallbackSingularity(c) => fallback(c, default_shell, Always, true)?,
            ResolverConfig::FallbackNoRequirements(c) => {
                fallback(c, default_shell, NoRequirements, false)?
            }
            ResolverConfig::FallbackNoRequirementsSingularity(c) => {
                fallback(c, default_shell, NoRequirements, true)?
            }
            ResolverConfig::RequiresGalaxyEnvironment(c) => {
                fallback(c, default_shell, RequiresGalaxyEnvironment, false)?
            }
            ResolverConfig::RequiresGalaxyEnvironmentSingularity(c) => {
                fallback(c, default_shell, RequiresGalaxyEnvironment, true)?
            }
            ResolverConfig::Mapping(c) => {
                let shell = c.shell.unwrap_or_else(|| default_shell.to_string());
                Box::new(MappingResolver::new(c.mappings)?.with_shell(shell))
            }
        };
        Ok(resolver)
    }
}

fn fallback(
    config: FallbackConfig,
    default_shell: &str,
    condition: FallbackCondition,
    singularity: bool,
) -> Result<Box<dyn ContainerResolver>, ConfigError> {
    let resolver = if singularity {
        FallbackResolver::singularity(config.identifier, condition)?
    } else {
        FallbackResolver::docker(config.identifier, condition)?
    };
    let shell = config.shell.unwrap_or_else(|| default_shell.to_string());
    Ok(Box::new(resolver.with_shell(shell)))
}

/// A whole configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    /// Shell for admin-configured resolvers that do not name their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
    #[serde(default)]
    pub resolvers: Vec<ResolverConfig>,
}

impl ChainConfig {
    pub fn new(resolvers: Vec<ResolverConfig>) -> Self {
        Self { shell: None, resolvers }
    }

    pub fn default_shell(&self) -> &str {
        self.shell.as_deref().unwrap_or(DEFAULT_SHELL)
    }

    /// Parse a configuration document in the given format.
    pub fn parse(content: &str, format: Format) -> Result<Self, ConfigError> {
        let err = |e: &dyn std::fmt::Display| ConfigError::parse(format, e);
        match format {
            Format::Yaml => {
                let value: serde_yaml::Value =
                    serde_yaml::from_str(content).map_err(|e| err(&e))?;
                let parsed = if value.is_sequence() {
                    serde_yaml::from_value(value).map(Self::new)
                } else {
                    serde_yaml::from_value(value)
                };
                parsed.map_err(|e| err(&e))
            }
            Format::Json => {
                let value: serde_json::Value =
                    serde_json::from_str(content).map_err(|e| err(&e))?;
                let parsed = if value.is_array() {
                    serde_json::from_value(value).map(Self::new)
                } else {
                    serde_json::from_value(value)
                };
                parsed.map_err(|e| err(&e))
            }
            Format::Toml => toml::from_str(content).map_err(|e| err(&e)),
            Format::Hcl => hcl::from_str(content).map_err(|e| err(&e)),
        }
    }

    /// Read and parse a configuration file, picking the format by extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = Format::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::parse(&content, format)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
