use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use rvault_crypto::DEFAULT_SECRET_ENV;

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub replica_count: usize,
    pub initial_content: String,
    /// Name of the environment variable holding the tag secret.
    pub secret_env: String,
    pub cors_permissive: bool,
    pub rate_limit: RateLimitConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            replica_count: 3,
            initial_content: "Hello World".into(),
            secret_env: DEFAULT_SECRET_ENV.into(),
            cors_permissive: true,
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Fixed-window request limit applied per client address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Requests allowed per window; `0` disables limiting.
    pub max_requests: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            window_secs: 15 * 60,
        }
    }
}

impl RateLimitConfig {
    pub fn disabled() -> Self {
        Self { max_requests: 0, ..Self::default() }
    }

    pub fn is_enabled(&self) -> bool {
        self.max_requests > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(c.replica_count, 3);
        assert_eq!(c.initial_content, "Hello World");
        assert_eq!(c.secret_env, "SECRET_KEY");
        assert!(c.cors_permissive);
        assert_eq!(c.rate_limit, RateLimitConfig { max_requests: 100, window_secs: 900 });
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ServerConfig::from_toml_str(
            r#"
            replica_count = 5

            [rate_limit]
            max_requests = 10
            "#,
        )
        .unwrap();
        assert_eq!(c.replica_count, 5);
        assert_eq!(c.initial_content, "Hello World");
        assert_eq!(c.rate_limit.max_requests, 10);
        assert_eq!(c.rate_limit.window_secs, 900);
    }

    #[test]
    fn bad_toml_is_config_error() {
        let err = ServerConfig::from_toml_str("replica_count = \"three\"").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = \"0.0.0.0:9000\"").unwrap();
        writeln!(file, "secret_env = \"RVAULT_SECRET\"").unwrap();
        let c = ServerConfig::load(file.path()).unwrap();
        assert_eq!(c.bind_addr.port(), 9000);
        assert_eq!(c.secret_env, "RVAULT_SECRET");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = ServerConfig::load(Path::new("/nonexistent/rvault.toml")).unwrap_err();
        assert!(matches!(err, ServerError::Io(_)));
    }

    #[test]
    fn disabled_rate_limit() {
        assert!(!RateLimitConfig::disabled().is_enabled());
        assert!(RateLimitConfig::default().is_enabled());
    }
}
