// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while assembling engine command lines.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    /// A word a shell cannot carry, such as one containing a NUL byte.
    #[error("cannot shell-quote {value:?}")]
    Quote {
        value: String,
        #[source]
        source: shlex::QuoteError,
    },

    #[error("cannot join command tokens for the shell")]
    Join(#[source] shlex::QuoteError),
}
