use std::fmt;

use crate::hex::{hex_decode, hex_to_string};
use crate::{HashAlgorithm, HashError};

/// A finished content fingerprint.
///
/// Always complete: the byte length equals the algorithm's digest length.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: HashAlgorithm,
    bytes: Vec<u8>,
}

impl Digest {
    pub(crate) fn new(algorithm: HashAlgorithm, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), algorithm.digest_len());
        Self { algorithm, bytes }
    }

    /// Parse a hex digest produced by `algorithm`. Either case is accepted.
    pub fn from_hex(algorithm: HashAlgorithm, hex: &str) -> Result<Self, HashError> {
        let mut bytes = vec![0u8; algorithm.digest_len()];
        hex_decode(hex, &mut bytes)?;
        Ok(Self { algorithm, bytes })
    }

    /// The algorithm that produced this digest.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Get the raw bytes of the digest.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lowercase hex representation.
    pub fn to_hex(&self) -> String {
        hex_to_string(&self.bytes)
    }

    /// Compare against an expected hex string, ignoring case and
    /// surrounding whitespace. Malformed input never matches.
    pub fn matches_hex(&self, expected: &str) -> bool {
        Self::from_hex(self.algorithm, expected.trim()).is_ok_and(|other| other == *self)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({}:{})", self.algorithm, self.to_hex())
    }
}
