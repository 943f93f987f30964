use std::path::PathBuf;

use treesum_hash::HashError;
use treesum_utils::PathError;

/// Every failure a hashing task can surface.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid hash algorithm '{name}': {reason}")]
    InvalidAlgorithm { name: String, reason: &'static str },

    #[error("invalid path '{input}': {reason}")]
    InvalidPath { input: String, reason: &'static str },

    #[error("path not found: '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("symlink cycle detected at '{}'", path.display())]
    CycleDetected { path: PathBuf },

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid expected digest '{value}': {source}")]
    InvalidDigest {
        value: String,
        #[source]
        source: HashError,
    },
}

/// Field-less view of [`Error`] for callers that map failures to statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidAlgorithm,
    InvalidPath,
    NotFound,
    CycleDetected,
    IoFailure,
    InvalidDigest,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidAlgorithm { .. } => ErrorKind::InvalidAlgorithm,
            Error::InvalidPath { .. } => ErrorKind::InvalidPath,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::CycleDetected { .. } => ErrorKind::CycleDetected,
            Error::Io { .. } => ErrorKind::IoFailure,
            Error::InvalidDigest { .. } => ErrorKind::InvalidDigest,
        }
    }
}

impl From<PathError> for Error {
    fn from(err: PathError) -> Self {
        match err {
            PathError::InvalidPath { input, reason } => Error::InvalidPath { input, reason },
            PathError::NotFound { path } => Error::NotFound { path },
            PathError::SymlinkLoop { path } => Error::CycleDetected { path },
            PathError::Io { path, source } => Error::Io { path, source },
        }
    }
}

impl Error {
    /// Rejected algorithm name, reported under the name the caller gave.
    pub(crate) fn algorithm(candidate: &str, err: HashError) -> Self {
        let reason = match err {
            HashError::InvalidAlgorithm { reason, .. } => reason,
            _ => "not a supported algorithm",
        };
        Error::InvalidAlgorithm {
            name: candidate.to_string(),
            reason,
        }
    }

    /// Rejected expected digest, reported with the offending text.
    pub(crate) fn digest(value: &str, source: HashError) -> Self {
        Error::InvalidDigest {
            value: value.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_errors_flatten() {
        let err: Error = PathError::NotFound {
            path: PathBuf::from("a/b"),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "path not found: 'a/b'");

        let err: Error = PathError::SymlinkLoop {
            path: PathBuf::from("loop"),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::CycleDetected);
    }

    #[test]
    fn algorithm_errors_name_the_candidate() {
        let err = treesum_hash::HashAlgorithm::normalise(Some("blahblah")).unwrap_err();
        let err = Error::algorithm("blahblah", err);
        assert_eq!(err.kind(), ErrorKind::InvalidAlgorithm);
        assert!(err.to_string().contains("blahblah"));
    }

    #[test]
    fn digest_errors_name_the_value() {
        let err = treesum_hash::Digest::from_hex(treesum_hash::HashAlgorithm::Md5, "xyz").unwrap_err();
        let err = Error::digest("xyz", err);
        assert_eq!(err.kind(), ErrorKind::InvalidDigest);
        assert!(err.to_string().contains("'xyz'"));
    }
}
