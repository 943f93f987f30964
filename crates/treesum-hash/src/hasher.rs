use crate::{Digest, HashAlgorithm};

enum HasherInner {
    Md5(md5::Md5),
    Sha1(sha1::Sha1),
    Sha224(sha2::Sha224),
    Sha256(sha2::Sha256),
    Sha384(sha2::Sha384),
    Sha512(Box<sha2::Sha512>),
}

/// Streaming hash computation.
///
/// Wraps every supported algorithm behind a single interface. Data can be
/// fed incrementally with [`update`](StreamHasher::update) or through the
/// [`std::io::Write`] implementation, then finalised into a [`Digest`].
/// The result does not depend on how the input was split across calls.
pub struct StreamHasher {
    algorithm: HashAlgorithm,
    inner: HasherInner,
}

impl StreamHasher {
    /// Create a new hasher for the given algorithm.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        use digest::Digest;
        let inner = match algorithm {
            HashAlgorithm::Md5 => HasherInner::Md5(md5::Md5::new()),
            HashAlgorithm::Sha1 => HasherInner::Sha1(sha1::Sha1::new()),
            HashAlgorithm::Sha224 => HasherInner::Sha224(sha2::Sha224::new()),
            HashAlgorithm::Sha256 => HasherInner::Sha256(sha2::Sha256::new()),
            HashAlgorithm::Sha384 => HasherInner::Sha384(sha2::Sha384::new()),
            HashAlgorithm::Sha512 => HasherInner::Sha512(Box::new(sha2::Sha512::new())),
        };
        Self { algorithm, inner }
    }

    /// The algorithm this hasher was created for.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Feed data into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        use digest::Digest;
        match &mut self.inner {
            HasherInner::Md5(h) => h.update(data),
            HasherInner::Sha1(h) => h.update(data),
            HasherInner::Sha224(h) => h.update(data),
            HasherInner::Sha256(h) => h.update(data),
            HasherInner::Sha384(h) => h.update(data),
            HasherInner::Sha512(h) => h.update(data),
        }
    }

    /// Finalize and return the digest.
    pub fn finalize(self) -> Digest {
        use digest::Digest as _;
        let bytes = match self.inner {
            HasherInner::Md5(h) => h.finalize().to_vec(),
            HasherInner::Sha1(h) => h.finalize().to_vec(),
            HasherInner::Sha224(h) => h.finalize().to_vec(),
            HasherInner::Sha256(h) => h.finalize().to_vec(),
            HasherInner::Sha384(h) => h.finalize().to_vec(),
            HasherInner::Sha512(h) => (*h).finalize().to_vec(),
        };
        Digest::new(self.algorithm, bytes)
    }

    /// Convenience: hash data in one call.
    pub fn digest(algorithm: HashAlgorithm, data: &[u8]) -> Digest {
        let mut h = Self::new(algorithm);
        h.update(data);
        h.finalize()
    }
}

impl std::io::Write for StreamHasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
