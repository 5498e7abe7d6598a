// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cres pull` specs

use super::prelude::*;

#[test]
fn pull_creates_registry_tree() {
    let project = Project::empty();
    let cache = project.path().join("cache");

    let out = cli()
        .args(&["-o", "json", "pull", "docker://quay.io/biocontainers/bwa:0.7.17", "--cache-dir"])
        .arg(&cache)
        .passes()
        .stdout();
    let tokens: Vec<String> = serde_json::from_str(&out).unwrap();

    assert_eq!(tokens[0], "singularity");
    assert_eq!(tokens[1], "build");
    assert_eq!(tokens[2], cache.join("quay.io/biocontainers/bwa:0.7.17").to_string_lossy());
    assert_eq!(tokens[3], "docker://quay.io/biocontainers/bwa:0.7.17");
    assert!(cache.join("quay.io/biocontainers").is_dir());
}

#[test]
fn mulled_pull_strips_namespace() {
    let project = Project::empty();

    let out = cli()
        .args(&[
            "-o",
            "json",
            "pull",
            "docker://quay.io/biocontainers/samtools:1.3.1",
            "--mulled",
            "--namespace",
            "biocontainers",
            "--sudo",
            "--cache-dir",
        ])
        .arg(project.path())
        .passes()
        .stdout();
    let tokens: Vec<String> = serde_json::from_str(&out).unwrap();

    assert_eq!(tokens[..3], ["sudo", "singularity", "build"]);
    assert_eq!(tokens[3], project.path().join("samtools:1.3.1").to_string_lossy());
}

#[test]
fn namespace_requires_mulled() {
    cli()
        .args(&["pull", "docker://x", "--cache-dir", "/tmp", "--namespace", "biocontainers"])
        .fails();
}

#[test]
fn text_output_quotes_cache_path_with_spaces() {
    let project = Project::empty();
    let cache = project.path().join("image cache");

    let out = cli().args(&["pull", "busybox:1", "--cache-dir"]).arg(&cache).passes().stdout();
    let tokens = shlex::split(out.trim_end()).unwrap();
    assert_eq!(tokens[2], cache.join("busybox:1").to_string_lossy());
}

#[test]
fn identifier_escaping_cache_fails() {
    let project = Project::empty();
    let cache = project.path().join("cache");

    cli()
        .args(&["pull", "docker://../../etc/x:1", "--cache-dir"])
        .arg(&cache)
        .fails()
        .stderr_has("relative path segments");
    assert!(!cache.exists());
}
