use std::io::{self, Read, Write};

use anyhow::Result;
use clap::Args;
use cryptocore_merkle::MerkleTree;

use crate::config::Settings;

#[derive(Args)]
pub struct MerkleRootArgs {
    /// Also read digests from stdin, one per line
    #[arg(long)]
    stdin: bool,

    /// Print every level, leaves first
    #[arg(long)]
    levels: bool,

    /// Leaf digests, in order
    #[arg(value_name = "digest")]
    digests: Vec<String>,
}

pub fn run(args: &MerkleRootArgs, settings: &Settings) -> Result<i32> {
    let mut leaves = args.digests.clone();
    if args.stdin {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        leaves.extend(
            input
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    let tree = MerkleTree::build_with_algorithm(settings.algorithm, &leaves);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tree(&mut out, &tree, args.levels)?;
    Ok(0)
}

/// Print the root, then every level from the leaves up to the root as
/// `level <n>: <digest>...` when asked.
pub(crate) fn write_tree(out: &mut impl Write, tree: &MerkleTree, levels: bool) -> io::Result<()> {
    writeln!(out, "{}", tree.root())?;
    if levels {
        for (i, level) in tree.levels().iter().enumerate() {
            writeln!(out, "level {i}: {}", level.join(" "))?;
        }
    }
    Ok(())
}
