use std::fmt;
use std::str::FromStr;

use crate::HashError;

/// Hash functions available for identities and tree folding.
///
/// All variants are members of the SHA-2 family. SHA-256 is the default and
/// the one every pinned digest in this workspace is computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    /// SHA-256 (default, 32 bytes / 256 bits).
    #[default]
    Sha256,
    /// SHA-384 (48 bytes).
    Sha384,
    /// SHA-512 (64 bytes).
    Sha512,
    /// SHA-512 truncated to 256 bits (32 bytes).
    Sha512_256,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 4] = [
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha512_256,
    ];

    /// Length of the digest in bytes.
    pub const fn digest_len(&self) -> usize {
        match self {
            Self::Sha256 | Self::Sha512_256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Length of the hex representation.
    pub const fn hex_len(&self) -> usize {
        self.digest_len() * 2
    }

    /// Look up an algorithm by name. Accepts both `sha256` and `sha-256` forms.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Some(Self::Sha256),
            "sha384" | "sha-384" => Some(Self::Sha384),
            "sha512" | "sha-512" => Some(Self::Sha512),
            "sha512-256" | "sha512_256" | "sha-512/256" => Some(Self::Sha512_256),
            _ => None,
        }
    }

    /// Canonical configuration name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Sha512_256 => "sha512-256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| HashError::UnknownAlgorithm(s.to_string()))
    }
}
