// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use cres_core::{EnabledTypes, ToolInfo};
use cres_resolvers::{ResolveOptions, ResolverChain};

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ResolveArgs {
    /// Tool description as JSON (`container_descriptions`, `requirements`, `tool_id`, ...)
    #[arg(long)]
    pub tool: PathBuf,

    /// Resolver chain configuration (.yml, .toml, .json or .hcl)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enabled container types, comma-separated
    #[arg(long, default_value = "docker,singularity")]
    pub enable: EnabledTypes,

    /// Let resolvers request image installation
    #[arg(long)]
    pub install: bool,
}

pub fn handle(args: ResolveArgs, format: OutputFormat) -> Result<()> {
    let tool_info = load_tool(&args.tool)?;
    let chain = match &args.config {
        Some(path) => {
            tracing::debug!(config = %path.display(), "loading resolver chain");
            ResolverChain::load(path)?
        }
        None => ResolverChain::default_chain(),
    };
    let options = ResolveOptions { install: args.install };

    let resolved = chain.find(&args.enable, &tool_info, &options);
    match format {
        OutputFormat::Text => match &resolved {
            Some(resolved) => println!("{} ({})", resolved.description, resolved.kind),
            None => println!("no container"),
        },
        OutputFormat::Json => {
            let value = match &resolved {
                Some(resolved) => serde_json::json!({
                    "resolver": resolved.kind.to_string(),
                    "container": resolved.description,
                }),
                None => serde_json::Value::Null,
            };
            print_json(&value)?;
        }
    }
    Ok(())
}

fn load_tool(path: &Path) -> Result<ToolInfo> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tool description {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid tool description {}", path.display()))
}
