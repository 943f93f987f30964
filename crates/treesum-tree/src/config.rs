use treesum_hash::HashAlgorithm;

/// How symlinks met inside a folder are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymlinkPolicy {
    /// Hash the link target. Dangling links are `NotFound`; a link back to
    /// an enclosing folder is `CycleDetected`.
    #[default]
    Follow,
    /// Leave symlinks out of folder digests. A symlink given as the source
    /// itself is still followed.
    Skip,
}

/// Settings for one hashing task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HasherConfig {
    pub algorithm: HashAlgorithm,
    pub symlinks: SymlinkPolicy,
}

impl HasherConfig {
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn with_symlinks(mut self, symlinks: SymlinkPolicy) -> Self {
        self.symlinks = symlinks;
        self
    }
}
