// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cres-core: container descriptions and tool metadata shared by the
//! resolver chain and the command builders.

pub mod macros;

pub mod container;
pub mod tool;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use container::{
    ContainerDescription, ContainerType, EnabledTypes, ParseContainerTypeError, DEFAULT_SHELL,
};
pub use tool::{Requirement, ToolInfo};
