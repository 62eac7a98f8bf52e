pub mod hash_artifact;
pub mod identity_tree;
pub mod merkle_root;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;
use cryptocore_hash::canonical_metadata;

use crate::config::Settings;
use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the identity of a file and its metadata
    HashArtifact(hash_artifact::HashArtifactArgs),
    /// Fold digests into a Merkle root
    MerkleRoot(merkle_root::MerkleRootArgs),
    /// Hash several files and print the Merkle root over their identities
    IdentityTree(identity_tree::IdentityTreeArgs),
}

pub fn run(cli: Cli) -> Result<i32> {
    let settings = Settings::load(&cli.config)?;
    match &cli.command {
        Commands::HashArtifact(args) => hash_artifact::run(args, &settings),
        Commands::MerkleRoot(args) => merkle_root::run(args, &settings),
        Commands::IdentityTree(args) => identity_tree::run(args, &settings),
    }
}

/// Read an artifact's content from disk.
pub(crate) fn read_content(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("cannot read '{}'", path.display()))
}

/// Resolve metadata bytes from a raw file or a JSON literal. JSON is
/// re-encoded canonically; file bytes are used exactly as stored.
pub(crate) fn resolve_metadata(file: Option<&Path>, json: Option<&str>) -> Result<Vec<u8>> {
    if let Some(path) = file {
        return std::fs::read(path)
            .with_context(|| format!("cannot read metadata '{}'", path.display()));
    }
    match json {
        Some(text) => {
            let value: serde_json::Value =
                serde_json::from_str(text).context("metadata is not valid JSON")?;
            Ok(canonical_metadata(&value)?)
        }
        None => Ok(Vec::new()),
    }
}
