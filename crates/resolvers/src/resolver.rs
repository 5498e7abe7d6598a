// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The resolver seam shared by every matching policy.

use std::fmt;

use cres_core::{ContainerDescription, EnabledTypes, ToolInfo};
use serde::{Deserialize, Serialize};

/// Resolver type names as they appear in administrator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverKind {
    Explicit,
    ExplicitSingularity,
    Fallback,
    FallbackSingularity,
    FallbackNoRequirements,
    FallbackNoRequirementsSingularity,
    RequiresGalaxyEnvironment,
    RequiresGalaxyEnvironmentSingularity,
    Mapping,
}

cres_core::simple_display! {
    ResolverKind {
        Explicit => "explicit",
        ExplicitSingularity => "explicit_singularity",
        Fallback => "fallback",
        FallbackSingularity => "fallback_singularity",
        FallbackNoRequirements => "fallback_no_requirements",
        FallbackNoRequirementsSingularity => "fallback_no_requirements_singularity",
        RequiresGalaxyEnvironment => "requires_galaxy_environment",
        RequiresGalaxyEnvironmentSingularity => "requires_galaxy_environment_singularity",
        Mapping => "mapping",
    }
}

/// Per-call options passed down the chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Caller would like the image installed. Resolution never installs;
    /// the executor acts on this after a match.
    pub install: bool,
}

impl ResolveOptions {
    pub fn install() -> Self {
        Self { install: true }
    }
}

/// One container matching policy.
///
/// Implementations hold only immutable configuration, so a chain can be
/// shared across threads and called concurrently.
pub trait ContainerResolver: fmt::Debug + Send + Sync {
    fn kind(&self) -> ResolverKind;

    /// Return the container to use for `tool_info`, or `None` when this
    /// policy does not apply. A returned description's type is always in
    /// `enabled`.
    fn resolve(
        &self,
        enabled: &EnabledTypes,
        tool_info: &ToolInfo,
        options: &ResolveOptions,
    ) -> Option<ContainerDescription>;
}
