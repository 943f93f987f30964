pub mod classify;
pub mod error;
pub mod path;

pub use classify::{classify, classify_os_path, PathKind};
pub use error::PathError;
pub use path::{NormalisedPath, RawSource};

pub type Result<T> = std::result::Result<T, PathError>;
