// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cres-resolvers: decide which container (if any) runs a tool.
//!
//! Resolvers are tried in the order an administrator configures them; the
//! first one returning a description wins. A miss is `None`, never an error.
//! Malformed configuration fails when the chain is built.

pub mod chain;
pub mod config;
pub mod error;
pub mod explicit;
pub mod fallback;
pub mod mapping;
pub mod mulled;
pub mod resolver;

pub use chain::{Resolved, ResolverChain};
pub use config::{ChainConfig, Format, MappingEntry, ResolverConfig};
pub use error::ConfigError;
pub use explicit::{ExplicitResolver, ExplicitSingularityResolver};
pub use fallback::{FallbackCondition, FallbackResolver};
pub use mapping::MappingResolver;
pub use resolver::{ContainerResolver, ResolveOptions, ResolverKind};
