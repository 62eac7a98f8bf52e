use digest::Digest;

use crate::{ContentId, HashAlgorithm};

enum HasherInner {
    Sha256(sha2::Sha256),
    Sha384(sha2::Sha384),
    Sha512(sha2::Sha512),
    Sha512_256(sha2::Sha512_256),
}

/// Streaming hash computation.
///
/// Wraps the SHA-2 family behind a single interface selected at runtime by
/// [`HashAlgorithm`]. Data can be fed incrementally with
/// [`update`](Hasher::update) or through the [`std::io::Write`]
/// implementation, then finalised into a [`ContentId`].
///
/// For a hash function chosen at compile time, use [`digest_parts`] with any
/// [`digest::Digest`] implementation instead.
pub struct Hasher {
    inner: HasherInner,
}

impl Hasher {
    /// Create a new hasher for the given algorithm.
    pub fn new(algo: HashAlgorithm) -> Self {
        let inner = match algo {
            HashAlgorithm::Sha256 => HasherInner::Sha256(sha2::Sha256::new()),
            HashAlgorithm::Sha384 => HasherInner::Sha384(sha2::Sha384::new()),
            HashAlgorithm::Sha512 => HasherInner::Sha512(sha2::Sha512::new()),
            HashAlgorithm::Sha512_256 => HasherInner::Sha512_256(sha2::Sha512_256::new()),
        };
        Self { inner }
    }

    /// The algorithm this hasher was created with.
    pub fn algorithm(&self) -> HashAlgorithm {
        match self.inner {
            HasherInner::Sha256(_) => HashAlgorithm::Sha256,
            HasherInner::Sha384(_) => HashAlgorithm::Sha384,
            HasherInner::Sha512(_) => HashAlgorithm::Sha512,
            HasherInner::Sha512_256(_) => HashAlgorithm::Sha512_256,
        }
    }

    /// Feed data into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        match &mut self.inner {
            HasherInner::Sha256(h) => h.update(data),
            HasherInner::Sha384(h) => h.update(data),
            HasherInner::Sha512(h) => h.update(data),
            HasherInner::Sha512_256(h) => h.update(data),
        }
    }

    /// Finalize and return the ContentId.
    pub fn finalize(self) -> ContentId {
        match self.inner {
            HasherInner::Sha256(h) => ContentId::from_output(&h.finalize()),
            HasherInner::Sha384(h) => ContentId::from_output(&h.finalize()),
            HasherInner::Sha512(h) => ContentId::from_output(&h.finalize()),
            HasherInner::Sha512_256(h) => ContentId::from_output(&h.finalize()),
        }
    }

    /// Convenience: hash data in one call.
    pub fn digest(algo: HashAlgorithm, data: &[u8]) -> ContentId {
        let mut h = Self::new(algo);
        h.update(data);
        h.finalize()
    }
}

impl std::io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Hash `parts` in order with the hash function `D`, no separators.
///
/// This is the pluggable entry point: any type that accepts bytes
/// incrementally and finalizes to a fixed-size output works here.
pub fn digest_parts<D: Digest>(parts: &[&[u8]]) -> ContentId {
    let mut h = D::new();
    for part in parts {
        Digest::update(&mut h, part);
    }
    ContentId::from_output(&h.finalize())
}
