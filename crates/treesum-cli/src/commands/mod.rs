pub mod algorithms;
pub mod classify;
pub mod hash;

use anyhow::Result;
use clap::Subcommand;
use treesum_tree::ErrorKind;

use crate::Cli;

/// Digest did not match `--verify`, or a failure outside the hashing core.
pub const EXIT_FAILURE: i32 = 1;
/// Command line could not be parsed.
pub const EXIT_USAGE: i32 = 2;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the digest of each file or folder
    Hash(hash::HashArgs),
    /// Print whether each source is a file or a folder
    Classify(classify::ClassifyArgs),
    /// List the supported hash algorithms
    Algorithms,
}

pub fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Hash(args) => hash::run(args),
        Commands::Classify(args) => classify::run(args),
        Commands::Algorithms => algorithms::run(),
    }
}

/// Exit status for each kind of hashing failure.
pub fn status_for(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::InvalidAlgorithm => 3,
        ErrorKind::InvalidPath => 4,
        ErrorKind::NotFound => 5,
        ErrorKind::CycleDetected => 6,
        ErrorKind::IoFailure => 7,
        ErrorKind::InvalidDigest => 8,
    }
}

/// Exit status for an error that reached `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<treesum_tree::Error>()
        .map_or(EXIT_FAILURE, |e| status_for(e.kind()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    #[test]
    fn statuses_are_distinct_and_clear_of_reserved_codes() {
        let kinds = [
            ErrorKind::InvalidAlgorithm,
            ErrorKind::InvalidPath,
            ErrorKind::NotFound,
            ErrorKind::CycleDetected,
            ErrorKind::IoFailure,
            ErrorKind::InvalidDigest,
        ];
        let codes: HashSet<i32> = kinds.iter().map(|&k| status_for(k)).collect();
        assert_eq!(codes.len(), kinds.len());
        assert!(!codes.contains(&0));
        assert!(!codes.contains(&EXIT_FAILURE));
        assert!(!codes.contains(&EXIT_USAGE));
    }

    #[test]
    fn exit_code_sees_through_anyhow() {
        let err = anyhow::Error::new(treesum_tree::Error::NotFound {
            path: PathBuf::from("x"),
        });
        assert_eq!(exit_code(&err), 5);
        assert_eq!(exit_code(&anyhow::anyhow!("broken pipe")), EXIT_FAILURE);
    }
}
