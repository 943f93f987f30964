/// Errors produced by algorithm selection and digest handling.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("invalid hash algorithm '{name}': {reason}")]
    InvalidAlgorithm { name: String, reason: &'static str },

    #[error("invalid hex character at position {position}: '{character}'")]
    InvalidHex { position: usize, character: char },

    #[error("invalid hex length: expected {expected}, got {actual}")]
    InvalidHexLength { expected: usize, actual: usize },
}
