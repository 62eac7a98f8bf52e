//! Artifact identities: one digest per (content, metadata) pair.
//!
//! The default identity is `SHA-256(content || metadata)` with no delimiter.
//! Two different pairs whose concatenations are equal share an identity, so
//! callers must use a self-delimiting metadata encoding (see
//! [`canonical_metadata`](crate::canonical_metadata)) or opt into
//! [`Framing::LengthPrefixed`].

use std::fmt;
use std::str::FromStr;

use digest::Digest;
use tracing::debug;

use crate::hasher::Hasher;
use crate::{ContentId, HashAlgorithm, HashError};

/// How content and metadata are laid out in the hash input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Framing {
    /// `content || metadata`, no separator.
    #[default]
    Concatenated,
    /// `len(content) || content || len(metadata) || metadata`, each length a
    /// big-endian u64.
    LengthPrefixed,
}

impl Framing {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "concat" | "concatenated" => Some(Self::Concatenated),
            "length-prefixed" | "length_prefixed" => Some(Self::LengthPrefixed),
            _ => None,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Concatenated => "concat",
            Self::LengthPrefixed => "length-prefixed",
        }
    }
}

impl fmt::Display for Framing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Framing {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| HashError::UnknownFraming(s.to_string()))
    }
}

/// Computes artifact identities with a fixed algorithm and framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArtifactHasher {
    algorithm: HashAlgorithm,
    framing: Framing,
}

impl ArtifactHasher {
    pub fn new(algorithm: HashAlgorithm, framing: Framing) -> Self {
        Self { algorithm, framing }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn framing(&self) -> Framing {
        self.framing
    }

    /// Identity of one artifact.
    ///
    /// Fails with [`HashError::InvalidInput`] when `content` is empty; any
    /// non-empty content is accepted with any metadata, including none.
    pub fn identity(&self, content: &[u8], metadata: &[u8]) -> Result<ContentId, HashError> {
        check_content(content)?;
        let mut h = Hasher::new(self.algorithm);
        feed(self.framing, content, metadata, |part| h.update(part));
        Ok(h.finalize())
    }
}

/// Identity of an artifact under the default configuration (SHA-256,
/// concatenated framing).
///
/// ```
/// let id = cryptocore_hash::compute_identity(b"test_file", br#"{"name":"test"}"#).unwrap();
/// assert_eq!(id.to_hex().len(), 64);
/// ```
pub fn compute_identity(content: &[u8], metadata: &[u8]) -> Result<ContentId, HashError> {
    ArtifactHasher::default().identity(content, metadata)
}

/// Identity of an artifact with a caller-chosen hash function `D`.
pub fn compute_identity_with<D: Digest>(
    content: &[u8],
    metadata: &[u8],
    framing: Framing,
) -> Result<ContentId, HashError> {
    check_content(content)?;
    let mut h = D::new();
    feed(framing, content, metadata, |part| Digest::update(&mut h, part));
    Ok(ContentId::from_output(&h.finalize()))
}

fn check_content(content: &[u8]) -> Result<(), HashError> {
    if content.is_empty() {
        debug!("rejecting artifact with empty content");
        return Err(HashError::InvalidInput);
    }
    Ok(())
}

fn feed(framing: Framing, content: &[u8], metadata: &[u8], mut update: impl FnMut(&[u8])) {
    match framing {
        Framing::Concatenated => {
            update(content);
            update(metadata);
        }
        Framing::LengthPrefixed => {
            update(&(content.len() as u64).to_be_bytes());
            update(content);
            update(&(metadata.len() as u64).to_be_bytes());
            update(metadata);
        }
    }
}
