// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use super::prelude::*;

#[test]
fn cres_help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("mulled-hash")
        .stdout_has("resolve")
        .stdout_has("pull")
        .stdout_has("exec");
}

#[test]
fn unknown_subcommand_fails() {
    cli().args(&["install"]).fails().stderr_has("unrecognized subcommand");
}
