// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;
use clap::Args;
use cres_command::{run_command, Engine, RunSpec};

use crate::output::{print_json, OutputFormat};

/// Engine selection shared by commands that emit engine invocations.
#[derive(Args, Default)]
pub struct EngineArgs {
    /// Use apptainer instead of singularity
    #[arg(long)]
    pub apptainer: bool,

    /// Prefix the engine invocation with sudo
    #[arg(long)]
    pub sudo: bool,
}

impl EngineArgs {
    pub fn engine(&self) -> Engine {
        let engine = if self.apptainer { Engine::apptainer() } else { Engine::singularity() };
        engine.sudo(self.sudo)
    }
}

#[derive(Args)]
pub struct ExecArgs {
    /// Image path or identifier
    pub image: String,

    /// Shell command to run inside the container
    pub command: String,

    /// Bind mount (`src[:dest[:mode]]`), repeatable
    #[arg(short = 'B', long = "bind")]
    pub volumes: Vec<String>,

    /// Environment variable (`KEY=value`), repeatable
    #[arg(short, long = "env", value_parser = parse_env_var)]
    pub env: Vec<(String, String)>,

    /// Working directory inside the container (emitted as `--pwd`)
    #[arg(long)]
    pub pwd: Option<String>,

    /// Extra engine arguments inserted before the image
    #[arg(long, allow_hyphen_values = true)]
    pub extra_args: Option<String>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

pub fn handle(args: ExecArgs, format: OutputFormat) -> Result<()> {
    let engine = args.engine.engine();
    let mut spec = RunSpec::new(args.command, args.image);
    spec.volumes = args.volumes;
    spec.env = args.env;
    spec.emit_pwd = args.pwd.is_some();
    spec.working_dir = args.pwd;
    spec.extra_args = args.extra_args;

    let command = run_command(&engine, &spec)?;
    match format {
        OutputFormat::Text => println!("{}", command),
        OutputFormat::Json => print_json(&serde_json::json!({ "command": command }))?,
    }
    Ok(())
}

pub(crate) fn parse_env_var(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=value, got '{}'", s)),
    }
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
