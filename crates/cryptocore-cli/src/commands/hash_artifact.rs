use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use super::{read_content, resolve_metadata};
use crate::config::Settings;

#[derive(Args)]
pub struct HashArtifactArgs {
    /// Read metadata bytes verbatim from this file
    #[arg(long, value_name = "file", conflicts_with = "metadata_json")]
    metadata: Option<PathBuf>,

    /// Metadata as JSON, encoded canonically before hashing
    #[arg(long = "metadata-json", value_name = "json")]
    metadata_json: Option<String>,

    /// Artifact content
    #[arg(value_name = "file")]
    file: PathBuf,
}

pub fn run(args: &HashArtifactArgs, settings: &Settings) -> Result<i32> {
    let content = read_content(&args.file)?;
    let metadata = resolve_metadata(args.metadata.as_deref(), args.metadata_json.as_deref())?;

    let id = settings.hasher().identity(&content, &metadata)?;
    info!(file = %args.file.display(), %id, "hashed artifact");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{id}")?;
    Ok(0)
}
