// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cres-command: build the commands that fetch and run a resolved container.
//!
//! Nothing here spawns a process. Pull commands are token vectors ready for
//! a process launcher; run commands are a single shell string because the
//! inner tool command is itself a shell fragment.

pub mod engine;
pub mod error;
pub mod pull;
pub mod quote;
pub mod run;

pub use engine::Engine;
pub use error::CommandError;
pub use pull::{pull_command, pull_mulled_command};
pub use quote::{join, quote};
pub use run::{run_command, RunSpec};
