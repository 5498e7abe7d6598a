// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container descriptions and the engines that understand them.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shell used inside a container when the configuration does not name one.
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Scheme singularity uses to pull images hosted on a docker registry.
const DOCKER_URI_SCHEME: &str = "docker://";

/// Runtime engine that interprets a container identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerType {
    Docker,
    Singularity,
    Conda,
}

crate::simple_display! {
    ContainerType {
        Docker => "docker",
        Singularity => "singularity",
        Conda => "conda",
    }
}

impl ContainerType {
    pub const ALL: [ContainerType; 3] =
        [ContainerType::Docker, ContainerType::Singularity, ContainerType::Conda];
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown container type '{0}' (expected docker, singularity or conda)")]
pub struct ParseContainerTypeError(pub String);

impl FromStr for ContainerType {
    type Err = ParseContainerTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "docker" => Ok(ContainerType::Docker),
            "singularity" => Ok(ContainerType::Singularity),
            "conda" => Ok(ContainerType::Conda),
            other => Err(ParseContainerTypeError(other.to_string())),
        }
    }
}

/// Engines permitted on the current execution destination.
///
/// Administrators use this to switch engines off per destination (e.g. no
/// singularity on a docker-only node). Ordered so logs and output are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnabledTypes(BTreeSet<ContainerType>);

impl EnabledTypes {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        ContainerType::ALL.into_iter().collect()
    }

    pub fn contains(&self, container_type: ContainerType) -> bool {
        self.0.contains(&container_type)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ContainerType> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ContainerType> for EnabledTypes {
    fn from_iter<I: IntoIterator<Item = ContainerType>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parses a comma-separated list such as `"docker,singularity"`.
impl FromStr for EnabledTypes {
    type Err = ParseContainerTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(ContainerType::from_str)
            .collect()
    }
}

impl fmt::Display for EnabledTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|t| t.to_string()).collect();
        f.write_str(&names.join(","))
    }
}

/// One resolved container target.
///
/// Values are immutable once built. Transformations (`as_explicit`,
/// `docker_to_singularity`) return new descriptions and leave the
/// receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerDescription {
    identifier: String,
    #[serde(rename = "type")]
    container_type: ContainerType,
    #[serde(default = "default_shell")]
    shell: String,
    #[serde(default)]
    explicit: bool,
}

fn default_shell() -> String {
    DEFAULT_SHELL.to_string()
}

impl ContainerDescription {
    pub fn new(identifier: impl Into<String>, container_type: ContainerType) -> Self {
        Self {
            identifier: identifier.into(),
            container_type,
            shell: default_shell(),
            explicit: false,
        }
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn container_type(&self) -> ContainerType {
        self.container_type
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// True when the tool author hard-coded this container.
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Whether this description may be used on a destination with `enabled` engines.
    pub fn is_enabled(&self, enabled: &EnabledTypes) -> bool {
        enabled.contains(self.container_type)
    }

    /// Copy of this description marked as author-declared.
    pub fn as_explicit(&self) -> Self {
        Self { explicit: true, ..self.clone() }
    }

    /// Retarget a docker description at singularity.
    ///
    /// Singularity pulls docker-hosted images through the `docker://` scheme,
    /// so the identifier is prefixed and the type switched. Descriptions of
    /// any other type are returned as-is.
    pub fn docker_to_singularity(&self) -> Self {
        if self.container_type != ContainerType::Docker {
            return self.clone();
        }
        Self {
            identifier: format!("{}{}", DOCKER_URI_SCHEME, self.identifier),
            container_type: ContainerType::Singularity,
            ..self.clone()
        }
    }
}

impl fmt::Display for ContainerDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.container_type, self.identifier)
    }
}

#[cfg(test)]
#[path = "container_tests.rs"]
mod tests;
