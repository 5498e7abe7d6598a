// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! cres: inspect container resolution and the commands it produces.
//!
//! Every subcommand prints; none of them runs a container.

mod commands;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::commands::{exec, mulled_hash, pull, resolve};
use crate::output::OutputFormat;

/// Log filter variable; defaults to `warn`.
const LOG_ENV: &str = "CRES_LOG";

#[derive(Parser)]
#[command(name = "cres", version, about = "Container resolution for tool invocations")]
struct Cli {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the mulled image name for comma-separated conda targets
    MulledHash(mulled_hash::MulledHashArgs),
    /// Resolve the container for a tool description (JSON)
    Resolve(resolve::ResolveArgs),
    /// Print the command that pulls an image into the cache
    Pull(pull::PullArgs),
    /// Print the command that runs a tool command inside an image
    Exec(exec::ExecArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Command::MulledHash(args) => mulled_hash::handle(args, cli.output),
        Command::Resolve(args) => resolve::handle(args, cli.output),
        Command::Pull(args) => pull::handle(args, cli.output),
        Command::Exec(args) => exec::handle(args, cli.output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
