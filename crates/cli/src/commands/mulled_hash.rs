// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::{bail, Context, Result};
use clap::Args;
use cres_resolvers::mulled::{self, HashVersion};

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct MulledHashArgs {
    /// Comma-separated targets, e.g. `samtools=1.3.1,bedtools=2.26.0`
    pub targets: String,

    /// Naming scheme (v1 or v2)
    #[arg(long = "hash", default_value_t = HashVersion::V2)]
    pub hash: HashVersion,

    /// Image build number appended to the version tag
    #[arg(long)]
    pub image_build: Option<String>,
}

pub fn handle(args: MulledHashArgs, format: OutputFormat) -> Result<()> {
    let targets = mulled::parse_targets(&args.targets).context("invalid targets")?;
    let Some(name) = mulled::image_name(args.hash, &targets, args.image_build.as_deref()) else {
        bail!("no targets given");
    };

    match format {
        OutputFormat::Text => println!("{}", name),
        OutputFormat::Json => print_json(&serde_json::json!({
            "hash": args.hash.to_string(),
            "targets": targets,
            "image": name,
        }))?,
    }
    Ok(())
}
