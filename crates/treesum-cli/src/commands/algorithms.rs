use std::io::{self, Write};

use anyhow::Result;
use treesum_tree::{HashAlgorithm, Hasher};

pub fn run() -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for algo in HashAlgorithm::ALL {
        let marker = if algo == Hasher::default_algorithm() { " (default)" } else { "" };
        writeln!(out, "{:<8}{:>4} bits{marker}", algo.name(), algo.digest_len() * 8)?;
    }

    Ok(0)
}
