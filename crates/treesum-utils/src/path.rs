use std::borrow::Cow;
use std::path::{Path, PathBuf};

use bstr::{BString, ByteSlice, ByteVec};
use tracing::debug;

use crate::error::PathError;
use crate::Result;

/// Raw, caller-supplied path input.
///
/// Text input is trimmed of surrounding whitespace before use; path values
/// are taken as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSource {
    Text(String),
    Path(PathBuf),
}

impl RawSource {
    fn describe(&self) -> String {
        match self {
            RawSource::Text(s) => s.clone(),
            RawSource::Path(p) => p.display().to_string(),
        }
    }
}

impl From<&str> for RawSource {
    fn from(s: &str) -> Self {
        RawSource::Text(s.to_string())
    }
}

impl From<String> for RawSource {
    fn from(s: String) -> Self {
        RawSource::Text(s)
    }
}

impl From<&String> for RawSource {
    fn from(s: &String) -> Self {
        RawSource::Text(s.clone())
    }
}

impl From<&Path> for RawSource {
    fn from(p: &Path) -> Self {
        RawSource::Path(p.to_path_buf())
    }
}

impl From<PathBuf> for RawSource {
    fn from(p: PathBuf) -> Self {
        RawSource::Path(p)
    }
}

impl From<&PathBuf> for RawSource {
    fn from(p: &PathBuf) -> Self {
        RawSource::Path(p.clone())
    }
}

impl From<&NormalisedPath> for RawSource {
    fn from(p: &NormalisedPath) -> Self {
        RawSource::Path(p.to_path_buf())
    }
}

/// A normalised source path (always forward slashes, no trailing slash
/// unless root, home shorthand already expanded).
///
/// Normalising a `NormalisedPath` again yields the same value. Nothing here
/// asserts that the path exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalisedPath(BString);

/// Check if a byte is a directory separator (handles both Unix and Windows).
#[inline]
fn is_dir_sep(c: u8) -> bool {
    c == b'/' || c == b'\\'
}

impl NormalisedPath {
    /// Normalise raw input.
    ///
    /// Steps, in order: trim surrounding whitespace (text input only),
    /// turn backslashes into forward slashes, expand a leading `~` or `~/`
    /// to the current user's home directory, then collapse repeated
    /// separators, `.` components and trailing slashes. `..` is kept.
    ///
    /// Fails with [`PathError::InvalidPath`] for empty input, input with a
    /// NUL byte, a path that is not valid UTF-8 on platforms that store
    /// paths as UTF-16, or a `~` prefix when no home directory is known.
    pub fn normalise(source: impl Into<RawSource>) -> Result<Self> {
        let source = source.into();
        let invalid = |reason| PathError::InvalidPath {
            input: source.describe(),
            reason,
        };

        let raw: &[u8] = match &source {
            RawSource::Text(s) => s.trim().as_bytes(),
            RawSource::Path(p) => {
                <[u8]>::from_path(p).ok_or_else(|| invalid("path is not valid UTF-8"))?
            }
        };
        if raw.is_empty() {
            return Err(invalid("empty path"));
        }
        if raw.contains(&0) {
            return Err(invalid("path contains a NUL byte"));
        }

        let unified: Vec<u8> = raw
            .iter()
            .map(|&b| if is_dir_sep(b) { b'/' } else { b })
            .collect();
        // Expand only after cleaning, so `./~` is seen as a home prefix now
        // rather than on a later pass.
        let cleaned = clean(&unified);
        let expanded = expand_home(&cleaned).ok_or_else(|| invalid("home directory is unknown"))?;

        let normalised = NormalisedPath(clean(&expanded));
        debug!(input = %source.describe(), normalised = %normalised, "normalised source path");
        Ok(normalised)
    }

    /// Get the raw bytes of this path.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Convert to a platform path for file system operations.
    pub fn to_path_buf(&self) -> PathBuf {
        // Only built from UTF-8 or native bytes, so the conversion is lossless.
        self.0.to_path_lossy().into_owned()
    }

    /// Check if the path is absolute (Unix root, UNC prefix or drive letter).
    pub fn is_absolute(&self) -> bool {
        let bytes = self.0.as_bytes();
        match bytes {
            [b'/', ..] => true,
            [drive, b':', b'/', ..] => drive.is_ascii_alphabetic(),
            _ => false,
        }
    }
}

impl std::fmt::Display for NormalisedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.as_bstr())
    }
}

impl AsRef<[u8]> for NormalisedPath {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// Replace a leading `~` or `~/` with the home directory.
///
/// Returns `None` only when expansion is needed and no home directory is known.
/// `~user` forms are left untouched.
fn expand_home(path: &[u8]) -> Option<Cow<'_, [u8]>> {
    let rest = match path {
        [b'~'] => &path[1..],
        [b'~', b'/', ..] => &path[2..],
        _ => return Some(Cow::Borrowed(path)),
    };

    let home = dirs::home_dir()?;
    let home = <[u8]>::from_path(&home)?;
    let mut out: Vec<u8> = home
        .iter()
        .map(|&b| if is_dir_sep(b) { b'/' } else { b })
        .collect();
    while out.last() == Some(&b'/') {
        out.pop();
    }
    out.push_byte(b'/');
    out.push_str(rest);
    Some(Cow::Owned(out))
}

/// Collapse a forward-slash path: repeated separators, `.` components and
/// trailing slashes go; a leading `//` (UNC) and a bare drive root survive.
fn clean(bytes: &[u8]) -> BString {
    let unc = bytes.starts_with(b"//") && !bytes.starts_with(b"///");
    let mut out = BString::new(Vec::with_capacity(bytes.len()));
    if unc {
        out.push_str(b"//");
    } else if bytes.first() == Some(&b'/') {
        out.push_byte(b'/');
    }

    for component in bytes.split(|&b| b == b'/') {
        match component {
            b"" | b"." => continue,
            other => {
                if !out.is_empty() && out.last() != Some(&b'/') {
                    out.push_byte(b'/');
                }
                out.push_str(other);
            }
        }
    }

    // "C:/" must not degrade to the drive-relative "C:".
    if out.len() == 2
        && out[1] == b':'
        && out[0].is_ascii_alphabetic()
        && bytes.starts_with(&out[..2])
        && bytes.get(2) == Some(&b'/')
    {
        out.push_byte(b'/');
    }

    if out.is_empty() {
        out.push_byte(b'.');
    }
    out
}
