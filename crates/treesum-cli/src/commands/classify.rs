use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use treesum_tree::Hasher;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Paths to classify
    #[arg(value_name = "SOURCE", required = true)]
    sources: Vec<String>,
}

pub fn run(args: &ClassifyArgs) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut hasher = Hasher::new();
    for source in &args.sources {
        hasher.set_source(source)?;
        let kind = hasher.classify()?;
        let shown = hasher.source().map(ToString::to_string).unwrap_or_default();
        writeln!(out, "{kind}  {shown}")?;
    }

    Ok(0)
}
