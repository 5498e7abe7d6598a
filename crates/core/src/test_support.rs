// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{ContainerDescription, ContainerType, Requirement, ToolInfo};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for container and tool metadata.
pub mod strategies {
    use crate::{ContainerDescription, ContainerType, EnabledTypes};
    use proptest::prelude::*;

    pub fn arb_container_type() -> impl Strategy<Value = ContainerType> {
        prop_oneof![
            Just(ContainerType::Docker),
            Just(ContainerType::Singularity),
            Just(ContainerType::Conda),
        ]
    }

    pub fn arb_identifier() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_.-]{0,12}(/[a-z0-9_.-]{1,12}){0,2}(:[a-z0-9.]{1,8})?"
    }

    pub fn arb_description() -> impl Strategy<Value = ContainerDescription> {
        (arb_identifier(), arb_container_type())
            .prop_map(|(identifier, container_type)| ContainerDescription::new(identifier, container_type))
    }

    pub fn arb_enabled_types() -> impl Strategy<Value = EnabledTypes> {
        proptest::collection::vec(arb_container_type(), 0..3)
            .prop_map(|types| types.into_iter().collect())
    }
}

// ── Fixtures ────────────────────────────────────────────────────────────

pub fn docker(identifier: &str) -> ContainerDescription {
    ContainerDescription::new(identifier, ContainerType::Docker)
}

pub fn singularity(identifier: &str) -> ContainerDescription {
    ContainerDescription::new(identifier, ContainerType::Singularity)
}

/// Tool declaring the given containers and no requirements.
pub fn tool_with_containers(tool_id: &str, containers: Vec<ContainerDescription>) -> ToolInfo {
    ToolInfo::new(tool_id).container_descriptions(containers)
}

/// Tool declaring a single conda package requirement.
pub fn tool_with_package(tool_id: &str, package: &str, version: &str) -> ToolInfo {
    ToolInfo::new(tool_id).requirements(vec![Requirement::package(package, Some(version))])
}
