// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tool metadata consumed by container resolvers.
//!
//! Parsing tool descriptions happens elsewhere; this crate only carries the
//! fields resolvers look at.

use serde::{Deserialize, Serialize};

use crate::container::ContainerDescription;

/// Requirement kind for conda-style package dependencies.
pub const PACKAGE_REQUIREMENT: &str = "package";

/// A dependency requirement declared by a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Requirement kind, e.g. `package` or `set_environment`.
    #[serde(rename = "type", default = "default_requirement_type")]
    pub kind: String,
}

fn default_requirement_type() -> String {
    PACKAGE_REQUIREMENT.to_string()
}

impl Requirement {
    pub fn package(name: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            name: name.into(),
            version: version.map(str::to_string),
            kind: default_requirement_type(),
        }
    }

    pub fn is_package(&self) -> bool {
        self.kind == PACKAGE_REQUIREMENT
    }
}

/// Everything a resolver may inspect about one tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Author-declared containers, in declaration order.
    #[serde(default)]
    pub container_descriptions: Vec<ContainerDescription>,
    /// `None` when the tool carries no requirement block at all.
    #[serde(default)]
    pub requirements: Option<Vec<Requirement>>,
    /// Empty when resolving for a bare set of requirements rather than a tool.
    #[serde(default)]
    pub tool_id: String,
    #[serde(default)]
    pub tool_version: Option<String>,
    #[serde(default)]
    pub requires_galaxy_python_environment: bool,
}

impl ToolInfo {
    pub fn new(tool_id: impl Into<String>) -> Self {
        Self { tool_id: tool_id.into(), ..Self::default() }
    }

    crate::setters! {
        set {
            container_descriptions: Vec<ContainerDescription>,
            requires_galaxy_python_environment: bool,
        }
        option {
            requirements: Vec<Requirement>,
            tool_version: String,
        }
    }

    /// True when the tool declares no dependency requirements (absent or empty).
    pub fn has_no_requirements(&self) -> bool {
        self.requirements.as_ref().map_or(true, |reqs| reqs.is_empty())
    }
}

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;
