mod commands;
mod config;
mod logging;

use std::process;

use anyhow::Result;
use clap::{error::ErrorKind, Parser};

use commands::Commands;

#[derive(Parser)]
#[command(
    name = "cryptocore",
    about = "Artifact identities and Merkle roots",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Set a configuration value (key=value)
    #[arg(short = 'c', global = true, value_name = "key=value")]
    config: Vec<String>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(128),
            }
        }
    };

    logging::init(logging::DEFAULT_FILTER);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("fatal: {e:#}");
            process::exit(128);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    commands::run(cli)
}
