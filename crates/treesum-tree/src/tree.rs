//! Recursive file and folder digests.
//!
//! A file digest is the hash of its bytes. A folder digest is the hash of
//! the stream
//!
//! ```text
//! folder <N>\0
//! <kind> <name>\0<hex digest>\n     (once per entry, sorted by name bytes)
//! ```
//!
//! where `<kind>` is `file` or `folder` and `<hex digest>` is the entry's own
//! digest under the same algorithm. The header keeps the empty folder apart
//! from the empty file, and the NUL after each name (which no file name can
//! contain) keeps one record from bleeding into the next.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use bstr::{BString, ByteVec};
use tracing::{debug, trace};
use treesum_hash::hasher::StreamHasher;
use treesum_hash::{Digest, HashAlgorithm};
use treesum_utils::{classify_os_path, PathError, PathKind};

use crate::config::{HasherConfig, SymlinkPolicy};
use crate::{Error, Result};

/// Computes digests for files and whole folder trees.
#[derive(Debug, Clone, Copy)]
pub struct TreeHasher {
    algorithm: HashAlgorithm,
    symlinks: SymlinkPolicy,
}

impl TreeHasher {
    pub fn new(config: &HasherConfig) -> Self {
        Self {
            algorithm: config.algorithm,
            symlinks: config.symlinks,
        }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Classify `path` and hash it as a file or a folder.
    pub fn hash_path(&self, path: &Path) -> Result<Digest> {
        match classify_os_path(path)? {
            PathKind::File => self.hash_file(path),
            PathKind::Folder => self.hash_folder(path),
        }
    }

    /// Hash a file's full contents.
    ///
    /// The file is streamed through the hasher; the handle is closed before
    /// returning on every path, including a failed read.
    pub fn hash_file(&self, path: &Path) -> Result<Digest> {
        let mut file = File::open(path).map_err(|e| PathError::from_io(path, e))?;
        let mut hasher = StreamHasher::new(self.algorithm);
        io::copy(&mut file, &mut hasher).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(hasher.finalize())
    }

    /// Hash a folder and everything below it.
    pub fn hash_folder(&self, path: &Path) -> Result<Digest> {
        let mut ancestors = Vec::new();
        self.hash_folder_guarded(path, &mut ancestors)
    }

    /// `ancestors` holds the canonical paths of the folders currently being
    /// hashed, outermost first. Re-entering one of them means a symlink loop.
    fn hash_folder_guarded(&self, path: &Path, ancestors: &mut Vec<PathBuf>) -> Result<Digest> {
        let canonical = fs::canonicalize(path).map_err(|e| PathError::from_io(path, e))?;
        if ancestors.contains(&canonical) {
            return Err(Error::CycleDetected {
                path: path.to_path_buf(),
            });
        }

        ancestors.push(canonical);
        let result = self.combine_entries(path, ancestors);
        ancestors.pop();
        result
    }

    fn combine_entries(&self, path: &Path, ancestors: &mut Vec<PathBuf>) -> Result<Digest> {
        let entries = self.sorted_entries(path)?;

        let mut hasher = StreamHasher::new(self.algorithm);
        hasher.update(format!("folder {}\0", entries.len()).as_bytes());

        for (name, child) in &entries {
            let kind = classify_os_path(child)?;
            let digest = match kind {
                PathKind::File => self.hash_file(child)?,
                PathKind::Folder => self.hash_folder_guarded(child, ancestors)?,
            };
            trace!(entry = %name, kind = %kind, digest = %digest, "combining entry");

            hasher.update(kind.as_str().as_bytes());
            hasher.update(b" ");
            hasher.update(name);
            hasher.update(b"\0");
            hasher.update(digest.to_hex().as_bytes());
            hasher.update(b"\n");
        }

        let digest = hasher.finalize();
        debug!(path = %path.display(), entries = entries.len(), digest = %digest, "hashed folder");
        Ok(digest)
    }

    /// Direct entries of `path` as (name bytes, full path), sorted by name bytes.
    fn sorted_entries(&self, path: &Path) -> Result<Vec<(BString, PathBuf)>> {
        let io_error = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| PathError::from_io(path, e))? {
            let entry = entry.map_err(io_error)?;
            if self.symlinks == SymlinkPolicy::Skip && entry.file_type().map_err(io_error)?.is_symlink() {
                trace!(path = %entry.path().display(), "skipping symlink");
                continue;
            }
            let name = BString::from(<Vec<u8>>::from_os_str_lossy(&entry.file_name()).into_owned());
            entries.push((name, entry.path()));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }
}
