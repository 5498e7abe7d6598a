// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command builder specs
//!
//! Verify a resolved container turns into pull and exec commands a POSIX
//! shell reads back token for token.

use cres_command::{pull_command, pull_mulled_command, run_command, Engine, RunSpec};
use cres_resolvers::mulled::{self, HashVersion};

use super::prelude::*;

#[test]
fn resolved_declaration_pulls_into_registry_tree() {
    let project = Project::empty();
    let tool = tool_with_containers("bwa", vec![docker("quay.io/biocontainers/bwa:0.7.17--h5bf99c6_8")]);
    let singularity_only: EnabledTypes = "singularity".parse().unwrap();
    let resolved = ResolverChain::default_chain()
        .resolve(&singularity_only, &tool, &ResolveOptions::install())
        .unwrap();

    let cache = project.path().join("cache");
    let tokens = pull_command(&Engine::singularity(), resolved.identifier(), &cache).unwrap();

    let image = cache.join("quay.io/biocontainers/bwa:0.7.17--h5bf99c6_8");
    similar_asserts::assert_eq!(
        tokens,
        vec![
            "singularity".to_string(),
            "build".to_string(),
            image.to_string_lossy().into_owned(),
            "docker://quay.io/biocontainers/bwa:0.7.17--h5bf99c6_8".to_string(),
        ]
    );
    assert!(cache.join("quay.io/biocontainers").is_dir());
}

#[test]
fn mulled_image_for_requirements_is_saved_flat() {
    let project = Project::empty();
    let requirements = vec![
        Requirement::package("samtools", Some("1.3.1")),
        Requirement::package("bedtools", Some("2.26.0")),
    ];
    let targets = mulled::requirements_to_mulled_targets(&requirements);
    let name = mulled::image_name(HashVersion::V2, &targets, Some("0")).unwrap();
    assert_eq!(
        name,
        "mulled-v2-8186960447c5cb2faa697666dc1e6d919ad23f3e:a6419f25efff953fc505dbd5ee734856180bb619-0"
    );

    let identifier = format!("docker://quay.io/biocontainers/{}", name);
    let tokens = pull_mulled_command(
        &Engine::singularity().sudo(true),
        &identifier,
        project.path(),
        Some("biocontainers"),
    );

    assert_eq!(tokens[..3], ["sudo", "singularity", "build"]);
    assert_eq!(tokens[3], project.path().join(&name).to_string_lossy());
    assert_eq!(tokens[4], identifier);
}

#[test]
fn exec_command_survives_shell_splitting() {
    let spec = RunSpec::new("bwa mem ref.fa reads.fq > out.sam", "/images/bwa 0.7.17.sif")
        .volume("/data/inputs:/data/inputs:ro")
        .env_var("HOME", "/home/job42")
        .working_dir("/working dir");
    let command = run_command(&Engine::singularity(), &spec).unwrap();

    similar_asserts::assert_eq!(
        command,
        "SINGULARITYENV_HOME=/home/job42 singularity -s exec -B /data/inputs:/data/inputs:ro \
         --home /home/job42:/home/job42 '/images/bwa 0.7.17.sif' \
         bwa mem ref.fa reads.fq > out.sam"
    );

    let tokens = shlex::split(&command).unwrap();
    let image_at = tokens.iter().position(|t| t == "/images/bwa 0.7.17.sif").unwrap();
    assert_eq!(tokens[image_at - 2..image_at], ["--home", "/home/job42:/home/job42"]);
    assert_eq!(tokens[image_at + 1..], ["bwa", "mem", "ref.fa", "reads.fq", ">", "out.sam"]);
}

#[test]
fn opted_in_working_dir_is_passed_as_pwd() {
    let spec = RunSpec::new("true", "/images/bwa.sif").working_dir("/working dir").emit_pwd(true);
    let command = run_command(&Engine::apptainer(), &spec).unwrap();

    similar_asserts::assert_eq!(
        command,
        "apptainer -s exec --pwd '/working dir' /images/bwa.sif true"
    );
}
