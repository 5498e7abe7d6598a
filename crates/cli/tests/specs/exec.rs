// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cres exec` specs

use super::prelude::*;

#[test]
fn exec_prints_full_command() {
    cli()
        .args(&[
            "exec",
            "/images/bwa.sif",
            "bwa mem ref.fa reads.fq > out.sam",
            "-B",
            "/data:/data:ro",
            "--env",
            "HOME=/home/job",
            "--pwd",
            "/work dir",
        ])
        .passes()
        .stdout_eq(
            "SINGULARITYENV_HOME=/home/job singularity -s exec -B /data:/data:ro \
             --home /home/job:/home/job --pwd '/work dir' /images/bwa.sif \
             bwa mem ref.fa reads.fq > out.sam\n",
        );
}

#[test]
fn apptainer_with_extra_args() {
    cli()
        .args(&["exec", "img.sif", "true", "--apptainer", "--extra-args", "--cleanenv"])
        .passes()
        .stdout_eq("apptainer -s exec --cleanenv img.sif true\n");
}

#[test]
fn malformed_env_fails() {
    cli().args(&["exec", "img.sif", "true", "--env", "NOVALUE"]).fails().stderr_has("KEY=value");
}
