// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod exec;
pub mod mulled_hash;
pub mod pull;
pub mod resolve;
