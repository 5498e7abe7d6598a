// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while building resolvers from administrator configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::Format;
use crate::resolver::ResolverKind;

/// Fatal configuration problems. Always surfaced when the chain is built,
/// never deferred to resolution time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{resolver_type} container resolver must be specified with non-empty identifier")]
    EmptyIdentifier { resolver_type: ResolverKind },

    #[error("mapping #{index} must have a non-empty tool_id")]
    EmptyMappingToolId { index: usize },

    #[error("mapping #{index} must have a non-empty identifier")]
    EmptyMappingIdentifier { index: usize },

    #[error("unsupported resolver config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid {format} resolver config: {message}")]
    Parse { format: Format, message: String },

    #[error("failed to read resolver config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub(crate) fn parse(format: Format, err: impl std::fmt::Display) -> Self {
        ConfigError::Parse { format, message: err.to_string() }
    }
}
