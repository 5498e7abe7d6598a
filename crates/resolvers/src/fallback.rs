// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Administrator-configured fallback containers.
//!
//! Six configured resolver types share this implementation: the engine
//! (docker or singularity) times the extra [`FallbackCondition`].

use cres_core::{ContainerDescription, ContainerType, EnabledTypes, ToolInfo};

use crate::error::ConfigError;
use crate::resolver::{ContainerResolver, ResolveOptions, ResolverKind};

/// Tool-level condition a fallback adds on top of the enabled-type check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackCondition {
    /// Match any tool.
    Always,
    /// Match only tools declaring zero requirements, so the fallback never
    /// masks real dependency resolution.
    NoRequirements,
    /// Match only tools that need the host's python environment.
    RequiresGalaxyEnvironment,
}

impl FallbackCondition {
    fn holds(self, tool_info: &ToolInfo) -> bool {
        match self {
            FallbackCondition::Always => true,
            FallbackCondition::NoRequirements => tool_info.has_no_requirements(),
            FallbackCondition::RequiresGalaxyEnvironment => {
                tool_info.requires_galaxy_python_environment
            }
        }
    }
}

/// A single administrator-supplied container with no tool-specific lookup.
#[derive(Debug, Clone)]
pub struct FallbackResolver {
    description: ContainerDescription,
    condition: FallbackCondition,
}

impl FallbackResolver {
    /// Fallback resolved as a docker container.
    pub fn docker(
        identifier: impl Into<String>,
        condition: FallbackCondition,
    ) -> Result<Self, ConfigError> {
        Self::build(identifier.into(), ContainerType::Docker, condition)
    }

    /// Fallback resolved as a singularity container.
    pub fn singularity(
        identifier: impl Into<String>,
        condition: FallbackCondition,
    ) -> Result<Self, ConfigError> {
        Self::build(identifier.into(), ContainerType::Singularity, condition)
    }

    fn build(
        identifier: String,
        container_type: ContainerType,
        condition: FallbackCondition,
    ) -> Result<Self, ConfigError> {
        let resolver = Self {
            description: ContainerDescription::new(identifier, container_type),
            condition,
        };
        if resolver.description.identifier().trim().is_empty() {
            return Err(ConfigError::EmptyIdentifier { resolver_type: resolver.kind() });
        }
        Ok(resolver)
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.description = self.description.with_shell(shell);
        self
    }

    pub fn description(&self) -> &ContainerDescription {
        &self.description
    }

    pub fn condition(&self) -> FallbackCondition {
        self.condition
    }
}

impl ContainerResolver for FallbackResolver {
    fn kind(&self) -> ResolverKind {
        let singularity = self.description.container_type() == ContainerType::Singularity;
        match (self.condition, singularity) {
            (FallbackCondition::Always, false) => ResolverKind::Fallback,
            (FallbackCondition::Always, true) => ResolverKind::FallbackSingularity,
            (FallbackCondition::NoRequirements, false) => ResolverKind::FallbackNoRequirements,
            (FallbackCondition::NoRequirements, true) => {
                ResolverKind::FallbackNoRequirementsSingularity
            }
            (FallbackCondition::RequiresGalaxyEnvironment, false) => {
                ResolverKind::RequiresGalaxyEnvironment
            }
            (FallbackCondition::RequiresGalaxyEnvironment, true) => {
                ResolverKind::RequiresGalaxyEnvironmentSingularity
            }
        }
    }

    fn resolve(
        &self,
        enabled: &EnabledTypes,
        tool_info: &ToolInfo,
        _options: &ResolveOptions,
    ) -> Option<ContainerDescription> {
        if !self.description.is_enabled(enabled) || !self.condition.holds(tool_info) {
            return None;
        }
        tracing::debug!(
            resolver = %self.kind(),
            tool_id = %tool_info.tool_id,
            container = %self.description,
            "fallback container"
        );
        Some(self.description.clone())
    }
}

#[cfg(test)]
#[path = "fallback_tests.rs"]
mod tests;
