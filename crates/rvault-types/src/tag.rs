use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Length in bytes of every [`IntegrityTag`] (HMAC-SHA256 output).
pub const TAG_LEN: usize = 32;

/// Keyed authentication code over a replica's content.
///
/// A tag is only meaningful together with the secret that produced it; this
/// type carries the raw bytes and nothing else. The length is fixed no matter
/// how long the tagged content is.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntegrityTag([u8; TAG_LEN]);

impl IntegrityTag {
    /// Wrap pre-computed tag bytes.
    pub const fn from_bytes(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw tag bytes.
    pub fn as_bytes(&self) -> &[u8; TAG_LEN] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        let arr: [u8; TAG_LEN] = bytes.try_into().map_err(|b: Vec<u8>| TypeError::InvalidLength {
            expected: TAG_LEN,
            actual: b.len(),
        })?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for IntegrityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntegrityTag({})", self.short_hex())
    }
}

impl fmt::Display for IntegrityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; TAG_LEN]> for IntegrityTag {
    fn from(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }
}
