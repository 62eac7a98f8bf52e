use std::fmt;
use std::str::FromStr;

use crate::{HashAlgorithm, HashError};

/// A content identity: the raw digest bytes of an artifact or tree node.
///
/// Immutable once created and compared by exact byte equality. The external
/// form is lowercase hex, available through [`to_hex`](ContentId::to_hex) and
/// `Display`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId {
    bytes: Box<[u8]>,
}

impl ContentId {
    /// Create a ContentId from raw bytes produced by `algo`.
    pub fn from_bytes(bytes: &[u8], algo: HashAlgorithm) -> Result<Self, HashError> {
        let expected = algo.digest_len();
        if bytes.len() != expected {
            return Err(HashError::InvalidHashLength {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self::from_output(bytes))
    }

    /// Wrap the finalized output of any hash function.
    pub(crate) fn from_output(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Parse a hex identity. Upper and lower case are both accepted.
    ///
    /// The length must match the digest length of one of the supported
    /// algorithms (64, 96 or 128 hex characters).
    pub fn from_hex(s: &str) -> Result<Self, HashError> {
        let bytes = hex::decode(s)?;
        let known = HashAlgorithm::ALL
            .iter()
            .any(|algo| algo.digest_len() == bytes.len());
        if !known {
            return Err(HashError::UnsupportedDigestLength {
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes: bytes.into_boxed_slice(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Digest length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercase hex representation.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.to_hex();
        write!(f, "ContentId({})", &hex[..hex.len().min(8)])
    }
}

impl FromStr for ContentId {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for ContentId {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
