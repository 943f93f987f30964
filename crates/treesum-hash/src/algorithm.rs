use std::str::FromStr;

use crate::HashError;

/// Supported content hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    /// MD5 (16 bytes / 128 bits).
    Md5,
    /// SHA-1 (20 bytes / 160 bits).
    Sha1,
    /// SHA-224 (28 bytes / 224 bits).
    Sha224,
    /// SHA-256 (default, 32 bytes / 256 bits).
    #[default]
    Sha256,
    /// SHA-384 (48 bytes / 384 bits).
    Sha384,
    /// SHA-512 (64 bytes / 512 bits).
    Sha512,
}

impl HashAlgorithm {
    /// Every supported algorithm, in ascending digest size.
    pub const ALL: [HashAlgorithm; 6] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
    ];

    /// The algorithm used when the caller does not pick one.
    pub const fn default_algorithm() -> Self {
        Self::Sha256
    }

    /// Length of the hash digest in bytes.
    pub const fn digest_len(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Length of the hex representation.
    pub const fn hex_len(&self) -> usize {
        self.digest_len() * 2
    }

    /// Look up a hash algorithm by name.
    ///
    /// Matching ignores ASCII case and accepts the dashed spellings
    /// (`sha-256`) alongside the canonical ones (`sha256`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "md5" => Some(Self::Md5),
            "sha1" | "sha-1" => Some(Self::Sha1),
            "sha224" | "sha-224" => Some(Self::Sha224),
            "sha256" | "sha-256" => Some(Self::Sha256),
            "sha384" | "sha-384" => Some(Self::Sha384),
            "sha512" | "sha-512" => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Validate a candidate algorithm identifier.
    ///
    /// `None` stands for "no identifier supplied". Missing, empty and
    /// unknown candidates all fail with [`HashError::InvalidAlgorithm`].
    pub fn normalise(candidate: Option<&str>) -> Result<Self, HashError> {
        let name = candidate.ok_or(HashError::InvalidAlgorithm {
            name: String::new(),
            reason: "no algorithm given",
        })?;
        if name.is_empty() {
            return Err(HashError::InvalidAlgorithm {
                name: String::new(),
                reason: "empty name",
            });
        }
        Self::from_name(name).ok_or_else(|| HashError::InvalidAlgorithm {
            name: name.to_string(),
            reason: "not a supported algorithm",
        })
    }

    /// The canonical lowercase name of this algorithm.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalise(Some(s))
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
