// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! POSIX shell quoting.

use crate::error::CommandError;

/// Quote `s` so a POSIX shell reads it back as exactly one word.
///
/// Words made only of shell-safe characters pass through untouched.
pub fn quote(s: &str) -> Result<String, CommandError> {
    shlex::try_quote(s)
        .map(|quoted| quoted.into_owned())
        .map_err(|source| CommandError::Quote { value: s.to_string(), source })
}

/// Join command tokens into one shell line, quoting each as needed.
pub fn join(tokens: &[String]) -> Result<String, CommandError> {
    shlex::try_join(tokens.iter().map(String::as_str)).map_err(CommandError::Join)
}

#[cfg(test)]
#[path = "quote_tests.rs"]
mod tests;
