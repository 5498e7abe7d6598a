// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cres mulled-hash` specs

use super::prelude::*;

#[test]
fn v2_hash_of_two_pinned_packages() {
    cli()
        .args(&["mulled-hash", "samtools=1.3.1,bedtools=2.26.0"])
        .passes()
        .stdout_eq(
            "mulled-v2-8186960447c5cb2faa697666dc1e6d919ad23f3e:a6419f25efff953fc505dbd5ee734856180bb619\n",
        );
}

#[test]
fn v1_hash_of_two_pinned_packages() {
    cli()
        .args(&["mulled-hash", "--hash", "v1", "bedtools=2.26.0,samtools=1.3.1"])
        .passes()
        .stdout_eq("mulled-v1-51eff3a4f30b412aec1af0788ed07e8a3efd0414\n");
}

#[test]
fn single_package_keeps_its_name() {
    cli()
        .args(&["mulled-hash", "--image-build", "1", "samtools=1.3.1"])
        .passes()
        .stdout_eq("samtools:1.3.1--1\n");
}

#[test]
fn json_output_includes_targets() {
    let out = cli().args(&["-o", "json", "mulled-hash", "samtools=1.3.1"]).passes().stdout();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["image"], "samtools:1.3.1");
    assert_eq!(value["hash"], "v2");
    assert_eq!(value["targets"][0]["package"], "samtools");
}

#[test]
fn empty_target_list_fails() {
    cli().args(&["mulled-hash", ","]).fails().stderr_has("no targets");
}

#[test]
fn unknown_hash_version_fails() {
    cli().args(&["mulled-hash", "--hash", "v3", "samtools"]).fails();
}
