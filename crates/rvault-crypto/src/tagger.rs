use hmac::{Hmac, Mac};
use sha2::Sha256;

use rvault_types::{IntegrityTag, TAG_LEN};

use crate::key::{KeyError, SecretKey};

type HmacSha256 = Hmac<Sha256>;

/// Computes and checks HMAC-SHA256 tags keyed by the process secret.
///
/// The keyed MAC state is derived once at construction and cloned for every
/// computation, so the tagger holds no mutable state and can be shared across
/// threads without synchronization.
#[derive(Clone)]
pub struct IntegrityTagger {
    mac: HmacSha256,
}

impl IntegrityTagger {
    pub fn new(key: &SecretKey) -> Result<Self, KeyError> {
        let mac = <HmacSha256 as Mac>::new_from_slice(key.as_bytes())
            .map_err(|e| KeyError::Rejected(e.to_string()))?;
        Ok(Self { mac })
    }

    /// Tag arbitrary content. Deterministic for a given key and content.
    pub fn tag(&self, content: &[u8]) -> IntegrityTag {
        let mut mac = self.mac.clone();
        mac.update(content);
        let bytes: [u8; TAG_LEN] = mac.finalize().into_bytes().into();
        IntegrityTag::from_bytes(bytes)
    }

    /// Whether `tag` authenticates `content` under this key.
    ///
    /// Recomputes the tag and compares in constant time.
    pub fn matches(&self, content: &[u8], tag: &IntegrityTag) -> bool {
        let mut mac = self.mac.clone();
        mac.update(content);
        mac.verify_slice(tag.as_bytes()).is_ok()
    }
}

impl std::fmt::Debug for IntegrityTagger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IntegrityTagger(hmac-sha256, <redacted>)")
    }
}
