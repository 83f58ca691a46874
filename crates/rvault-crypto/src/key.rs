use rand::RngCore;

/// Environment variable the secret is read from unless configured otherwise.
pub const DEFAULT_SECRET_ENV: &str = "SECRET_KEY";

/// The process secret used to key integrity tags.
///
/// Loaded once at startup and never exposed through any read path; the
/// `Debug` output is redacted.
#[derive(Clone)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Create from raw secret bytes. Empty secrets are rejected.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, KeyError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(KeyError::Empty);
        }
        Ok(Self(bytes))
    }

    /// Read the secret from an environment variable.
    ///
    /// The variable's UTF-8 value is used verbatim as key material, so a key
    /// set as `SECRET_KEY=hunter2` produces the same tags as any other
    /// HMAC-SHA256 implementation keyed with the string `hunter2`.
    pub fn from_env(var: &str) -> Result<Self, KeyError> {
        match std::env::var(var) {
            Ok(value) if value.is_empty() => Err(KeyError::Empty),
            Ok(value) => Ok(Self(value.into_bytes())),
            Err(std::env::VarError::NotPresent) => Err(KeyError::Missing { var: var.to_string() }),
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(KeyError::NotUnicode { var: var.to_string() })
            }
        }
    }

    /// Generate a random secret of `len` bytes (at least one).
    pub fn generate(len: usize) -> Self {
        let mut bytes = vec![0u8; len.max(1)];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Hex encoding of the secret, for printing freshly generated keys.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the key material in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: an empty secret cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretKey(<redacted>)")
    }
}

/// Errors from loading or constructing the process secret.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("secret key variable {var} is not set")]
    Missing { var: String },
    #[error("secret key variable {var} is not valid UTF-8")]
    NotUnicode { var: String },
    #[error("secret key is empty")]
    Empty,
    #[error("secret key rejected by HMAC: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty() {
        assert_eq!(SecretKey::new(Vec::new()).unwrap_err(), KeyError::Empty);
    }

    #[test]
    fn from_env_reads_value() {
        std::env::set_var("RVAULT_TEST_KEY_PRESENT", "hunter2");
        let key = SecretKey::from_env("RVAULT_TEST_KEY_PRESENT").unwrap();
        assert_eq!(key.as_bytes(), b"hunter2");
    }

    #[test]
    fn from_env_missing_is_error() {
        let err = SecretKey::from_env("RVAULT_TEST_KEY_DEFINITELY_UNSET").unwrap_err();
        assert_eq!(
            err,
            KeyError::Missing { var: "RVAULT_TEST_KEY_DEFINITELY_UNSET".into() }
        );
    }

    #[test]
    fn from_env_empty_is_error() {
        std::env::set_var("RVAULT_TEST_KEY_EMPTY", "");
        assert_eq!(SecretKey::from_env("RVAULT_TEST_KEY_EMPTY").unwrap_err(), KeyError::Empty);
    }

    #[test]
    fn generate_has_requested_length() {
        let key = SecretKey::generate(32);
        assert_eq!(key.len(), 32);
        assert_eq!(key.to_hex().len(), 64);
        assert_eq!(SecretKey::generate(0).len(), 1);
    }

    #[test]
    fn generated_keys_differ() {
        assert_ne!(SecretKey::generate(32).to_hex(), SecretKey::generate(32).to_hex());
    }

    #[test]
    fn debug_redacts_secret() {
        let key = SecretKey::new(b"top-secret".to_vec()).unwrap();
        let debug = format!("{key:?}");
        assert!(debug.contains("redacted"));
        assert!(!debug.contains("top-secret"));
    }
}
