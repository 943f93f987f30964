use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use tracing::info;
use treesum_tree::{Hasher, SymlinkPolicy};

use super::{EXIT_FAILURE, EXIT_USAGE};

#[derive(Args)]
pub struct HashArgs {
    /// Hash algorithm (md5, sha1, sha224, sha256, sha384, sha512)
    #[arg(short = 'a', long, env = "TREESUM_ALGORITHM", default_value = "sha256")]
    algorithm: String,

    /// Compare the digest of a single source with an expected hex value
    #[arg(long, value_name = "HEX")]
    verify: Option<String>,

    /// Leave symlinks inside folders out of the digest
    #[arg(long)]
    no_follow_symlinks: bool,

    /// Files or folders to hash
    #[arg(value_name = "SOURCE", required = true)]
    sources: Vec<String>,
}

pub fn run(args: &HashArgs) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut hasher = Hasher::new();
    hasher.set_algorithm(&args.algorithm)?;
    if args.no_follow_symlinks {
        hasher.set_symlink_policy(SymlinkPolicy::Skip);
    }

    if let Some(expected) = &args.verify {
        let [source] = args.sources.as_slice() else {
            eprintln!("treesum: --verify takes exactly one source");
            return Ok(EXIT_USAGE);
        };
        hasher.set_source(source)?;
        let matched = hasher.verify(expected)?;
        let shown = hasher.source().map(ToString::to_string).unwrap_or_default();
        writeln!(out, "{shown}: {}", if matched { "OK" } else { "MISMATCH" })?;
        return Ok(if matched { 0 } else { EXIT_FAILURE });
    }

    for source in &args.sources {
        hasher.set_source(source)?;
        let digest = hasher.compute()?;
        let shown = hasher.source().map(ToString::to_string).unwrap_or_default();
        info!(source = %shown, algorithm = %hasher.algorithm(), "hashed");
        writeln!(out, "{digest}  {shown}")?;
    }

    Ok(0)
}
