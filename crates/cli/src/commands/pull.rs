// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cres_command::{join, pull_command, pull_mulled_command};

use super::exec::EngineArgs;
use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct PullArgs {
    /// Image identifier, e.g. `docker://quay.io/biocontainers/samtools:1.3.1--0`
    pub identifier: String,

    /// Directory images are saved under
    #[arg(long)]
    pub cache_dir: PathBuf,

    /// Save as a flat mulled image file instead of a registry-shaped tree
    #[arg(long)]
    pub mulled: bool,

    /// Quay namespace stripped from mulled identifiers
    #[arg(long, requires = "mulled")]
    pub namespace: Option<String>,

    #[command(flatten)]
    pub engine: EngineArgs,
}

pub fn handle(args: PullArgs, format: OutputFormat) -> Result<()> {
    let engine = args.engine.engine();
    let tokens = if args.mulled {
        pull_mulled_command(&engine, &args.identifier, &args.cache_dir, args.namespace.as_deref())
    } else {
        pull_command(&engine, &args.identifier, &args.cache_dir).with_context(|| {
            format!("failed to prepare cache directory under {}", args.cache_dir.display())
        })?
    };

    match format {
        OutputFormat::Text => println!("{}", join(&tokens)?),
        OutputFormat::Json => print_json(&tokens)?,
    }
    Ok(())
}
