use serde::{Deserialize, Serialize};

/// HTTP endpoint paths.
pub mod endpoints {
    pub const REPLICAS: &str = "/";
    pub const CORRUPT: &str = "/corrupt";
    pub const VERIFY: &str = "/verify";
    pub const RESTORE: &str = "/restore";
    pub const HEALTH: &str = "/v1/health";
    pub const INFO: &str = "/v1/info";
}

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Server description returned by the info endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub replica_count: usize,
    pub tag_algorithm: String,
}

impl InfoResponse {
    pub fn new(replica_count: usize) -> Self {
        Self {
            name: "rvault-server".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            replica_count,
            tag_algorithm: "hmac-sha256".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_defaults() {
        let h = HealthResponse::default();
        assert_eq!(h.status, "ok");
        assert!(!h.version.is_empty());
    }

    #[test]
    fn info_is_camel_case() {
        let json = serde_json::to_value(InfoResponse::new(3)).unwrap();
        assert_eq!(json["replicaCount"], 3);
        assert_eq!(json["tagAlgorithm"], "hmac-sha256");
    }

    #[test]
    fn endpoint_paths() {
        assert_eq!(endpoints::REPLICAS, "/");
        assert_eq!(endpoints::CORRUPT, "/corrupt");
        assert_eq!(endpoints::VERIFY, "/verify");
        assert_eq!(endpoints::RESTORE, "/restore");
    }
}
