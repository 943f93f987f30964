use tracing::debug;
use treesum_hash::{Digest, HashAlgorithm};
use treesum_utils::{classify, NormalisedPath, PathKind, RawSource};

use crate::config::{HasherConfig, SymlinkPolicy};
use crate::tree::TreeHasher;
use crate::{Error, Result};

/// One hashing task: a source path plus the settings to hash it with.
///
/// Built with the default algorithm (sha256) and no source. Setters validate
/// their input first and leave the hasher untouched when validation fails.
#[derive(Debug, Clone, Default)]
pub struct Hasher {
    config: HasherConfig,
    source: Option<NormalisedPath>,
}

impl Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HasherConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// The algorithm a fresh hasher starts with.
    pub const fn default_algorithm() -> HashAlgorithm {
        HashAlgorithm::default_algorithm()
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.config.algorithm
    }

    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&NormalisedPath> {
        self.source.as_ref()
    }

    /// Normalise and store the source path.
    pub fn set_source(&mut self, raw: impl Into<RawSource>) -> Result<()> {
        self.source = Some(NormalisedPath::normalise(raw)?);
        Ok(())
    }

    /// Validate and store the hash algorithm.
    pub fn set_algorithm(&mut self, candidate: &str) -> Result<()> {
        self.config.algorithm = HashAlgorithm::normalise(Some(candidate))
            .map_err(|err| Error::algorithm(candidate, err))?;
        Ok(())
    }

    pub fn set_symlink_policy(&mut self, policy: SymlinkPolicy) {
        self.config.symlinks = policy;
    }

    /// Report whether the source is a file or a folder.
    pub fn classify(&self) -> Result<PathKind> {
        Ok(classify(self.require_source()?)?)
    }

    /// Compute the digest of the source.
    pub fn compute(&self) -> Result<Digest> {
        let source = self.require_source()?;
        let kind = classify(source)?;
        let tree = TreeHasher::new(&self.config);
        let path = source.to_path_buf();
        let digest = match kind {
            PathKind::File => tree.hash_file(&path)?,
            PathKind::Folder => tree.hash_folder(&path)?,
        };
        debug!(source = %source, kind = %kind, algorithm = %self.config.algorithm, digest = %digest, "computed digest");
        Ok(digest)
    }

    /// Compute the digest and compare it with an expected hex string.
    ///
    /// The expected value is checked before any file is read.
    pub fn verify(&self, expected_hex: &str) -> Result<bool> {
        let expected = Digest::from_hex(self.config.algorithm, expected_hex.trim())
            .map_err(|source| Error::digest(expected_hex, source))?;
        Ok(self.compute()? == expected)
    }

    fn require_source(&self) -> Result<&NormalisedPath> {
        self.source.as_ref().ok_or(Error::InvalidPath {
            input: String::new(),
            reason: "no source path set",
        })
    }
}
