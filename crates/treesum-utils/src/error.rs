use std::path::PathBuf;

/// Errors raised while normalising or inspecting a path.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("invalid path '{input}': {reason}")]
    InvalidPath { input: String, reason: &'static str },

    #[error("path not found: '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("too many levels of symbolic links: '{}'", path.display())]
    SymlinkLoop { path: PathBuf },

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PathError {
    /// Classify an I/O error raised while touching `path`.
    ///
    /// Missing entries (including dangling symlinks) become [`PathError::NotFound`],
    /// `ELOOP` becomes [`PathError::SymlinkLoop`], anything else stays an I/O error.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return PathError::NotFound { path };
        }
        #[cfg(unix)]
        if source.raw_os_error() == Some(libc::ELOOP) {
            return PathError::SymlinkLoop { path };
        }
        PathError::Io { path, source }
    }
}
