use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cryptocore_merkle::MerkleTree;
use tracing::info;

use super::merkle_root::write_tree;
use super::{read_content, resolve_metadata};
use crate::config::Settings;

#[derive(Args)]
pub struct IdentityTreeArgs {
    /// Metadata as JSON, shared by every file and encoded canonically
    #[arg(long = "metadata-json", value_name = "json")]
    metadata_json: Option<String>,

    /// Print every level, leaves first
    #[arg(long)]
    levels: bool,

    /// Artifacts, in leaf order
    #[arg(value_name = "file", required = true)]
    files: Vec<PathBuf>,
}

pub fn run(args: &IdentityTreeArgs, settings: &Settings) -> Result<i32> {
    let metadata = resolve_metadata(None, args.metadata_json.as_deref())?;
    let hasher = settings.hasher();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut leaves = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let content = read_content(file)?;
        let id = hasher
            .identity(&content, &metadata)
            .with_context(|| format!("cannot hash '{}'", file.display()))?;
        writeln!(out, "{id} {}", file.display())?;
        leaves.push(id.to_hex());
    }

    let tree = MerkleTree::build_with_algorithm(settings.algorithm, &leaves);
    info!(leaves = tree.len(), root = tree.root(), "built identity tree");
    write_tree(&mut out, &tree, args.levels)?;
    Ok(0)
}
