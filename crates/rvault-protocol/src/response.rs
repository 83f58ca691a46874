use serde::{Deserialize, Serialize};

use rvault_store::{ReplicaSnapshot, RestoreOutcome, VerifyReport};
use rvault_types::ReplicaId;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReplicaListResponse {
    pub replicas: Vec<ReplicaSnapshot>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub message: String,
    pub replicas: Vec<ReplicaSnapshot>,
}

impl UpdateResponse {
    pub fn new(replicas: Vec<ReplicaSnapshot>) -> Self {
        Self {
            message: "Data updated successfully".into(),
            replicas,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CorruptResponse {
    pub message: String,
    pub replica: ReplicaSnapshot,
}

impl CorruptResponse {
    pub fn new(replica: ReplicaSnapshot) -> Self {
        Self {
            message: "Data corrupted successfully".into(),
            replica,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub offenders: Vec<ReplicaId>,
}

impl From<VerifyReport> for VerifyResponse {
    fn from(report: VerifyReport) -> Self {
        Self {
            valid: report.valid,
            offenders: report.offenders,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckContentResponse {
    /// `true` if at least one replica's tag authenticates the content.
    pub valid: bool,
    pub matching: Vec<ReplicaId>,
}

impl CheckContentResponse {
    pub fn new(matching: Vec<ReplicaId>) -> Self {
        Self {
            valid: !matching.is_empty(),
            matching,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreResponse {
    pub restored_value: String,
    pub votes: usize,
    pub repaired: Vec<ReplicaId>,
    pub replicas: Vec<ReplicaSnapshot>,
}

impl From<RestoreOutcome> for RestoreResponse {
    fn from(outcome: RestoreOutcome) -> Self {
        Self {
            restored_value: outcome.restored_value,
            votes: outcome.votes,
            repaired: outcome.repaired,
            replicas: outcome.replicas,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snap(id: u32, content: &str) -> ReplicaSnapshot {
        ReplicaSnapshot { id: ReplicaId::new(id), content: content.into() }
    }

    #[test]
    fn restore_response_shape() {
        let outcome = RestoreOutcome {
            restored_value: "A".into(),
            votes: 2,
            repaired: vec![ReplicaId::new(2)],
            replicas: vec![snap(1, "A"), snap(2, "A")],
        };
        let json = serde_json::to_value(RestoreResponse::from(outcome)).unwrap();
        assert_eq!(
            json,
            json!({
                "restoredValue": "A",
                "votes": 2,
                "repaired": [2],
                "replicas": [{"id": 1, "content": "A"}, {"id": 2, "content": "A"}],
            })
        );
    }

    #[test]
    fn verify_response_shape() {
        let report = VerifyReport::from_offenders(vec![ReplicaId::new(2)]);
        let json = serde_json::to_value(VerifyResponse::from(report)).unwrap();
        assert_eq!(json, json!({"valid": false, "offenders": [2]}));
    }

    #[test]
    fn check_content_valid_when_any_match() {
        assert!(CheckContentResponse::new(vec![ReplicaId::new(1)]).valid);
        assert!(!CheckContentResponse::new(vec![]).valid);
    }
}
