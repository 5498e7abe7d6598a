// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container engine invocation settings.

pub const DEFAULT_SINGULARITY_COMMAND: &str = "singularity";
pub const DEFAULT_SINGULARITY_ENV_PREFIX: &str = "SINGULARITYENV_";
pub const DEFAULT_SUDO_COMMAND: &str = "sudo";

/// How to invoke the container engine on this destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    /// Engine executable, e.g. `singularity` or `/opt/apptainer/bin/apptainer`.
    pub command: String,
    /// Prefix that injects a variable into the container environment.
    pub env_prefix: String,
    pub sudo: bool,
    pub sudo_command: String,
}

impl Default for Engine {
    fn default() -> Self {
        Self::singularity()
    }
}

impl Engine {
    pub fn singularity() -> Self {
        Self {
            command: DEFAULT_SINGULARITY_COMMAND.to_string(),
            env_prefix: DEFAULT_SINGULARITY_ENV_PREFIX.to_string(),
            sudo: false,
            sudo_command: DEFAULT_SUDO_COMMAND.to_string(),
        }
    }

    pub fn apptainer() -> Self {
        Self {
            command: "apptainer".to_string(),
            env_prefix: "APPTAINERENV_".to_string(),
            ..Self::singularity()
        }
    }

    cres_core::setters! {
        into {
            command: String,
            env_prefix: String,
            sudo_command: String,
        }
        set {
            sudo: bool,
        }
    }

    /// `[sudo_command] command`
    pub fn prefix(&self) -> Vec<String> {
        let mut parts = Vec::with_capacity(2);
        if self.sudo {
            parts.push(self.sudo_command.clone());
        }
        parts.push(self.command.clone());
        parts
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
