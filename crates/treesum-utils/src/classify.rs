use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::PathError;
use crate::path::NormalisedPath;
use crate::Result;

/// What an existing path denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    File,
    Folder,
}

impl PathKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PathKind::File => "file",
            PathKind::Folder => "folder",
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a normalised path by asking the filesystem.
///
/// Symlinks are followed. The answer is never cached: the filesystem may
/// change between calls.
pub fn classify(path: &NormalisedPath) -> Result<PathKind> {
    classify_os_path(&path.to_path_buf())
}

/// Classify a platform path, following symlinks.
///
/// Empty files and empty folders classify normally. A missing entry or a
/// dangling symlink is [`PathError::NotFound`]; anything that is neither a
/// regular file nor a folder (FIFO, socket, device) is rejected as
/// [`PathError::InvalidPath`] since reading it may block or never end.
pub fn classify_os_path(path: &Path) -> Result<PathKind> {
    let meta = fs::metadata(path).map_err(|e| PathError::from_io(path, e))?;
    let kind = if meta.is_dir() {
        PathKind::Folder
    } else if meta.is_file() {
        PathKind::File
    } else {
        return Err(PathError::InvalidPath {
            input: path.display().to_string(),
            reason: "not a regular file or folder",
        });
    };
    debug!(path = %path.display(), kind = %kind, "classified path");
    Ok(kind)
}
