//! Content fingerprints for files and folder trees.
//!
//! A [`Hasher`] takes a messy, user-supplied source path and a hash
//! algorithm name, and reduces whatever the path denotes to a single
//! [`Digest`]. Folder digests are built bottom-up by [`TreeHasher`] from the
//! sorted names and digests of their entries, so they do not depend on the
//! order in which the filesystem lists a directory.

mod config;
mod error;
mod facade;
pub mod tree;

pub use config::{HasherConfig, SymlinkPolicy};
pub use error::{Error, ErrorKind};
pub use facade::Hasher;
pub use tree::TreeHasher;

pub use treesum_hash::{Digest, HashAlgorithm};
pub use treesum_utils::{NormalisedPath, PathKind, RawSource};

pub type Result<T> = std::result::Result<T, Error>;
