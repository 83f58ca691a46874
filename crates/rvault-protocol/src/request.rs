use serde::{Deserialize, Serialize};

use rvault_types::ReplicaId;

use crate::error::{ProtocolError, ProtocolResult};

/// Treat absent and empty strings alike.
fn required_text(value: Option<String>, field: &'static str) -> ProtocolResult<String> {
    value
        .filter(|s| !s.is_empty())
        .ok_or(ProtocolError::MissingField(field))
}

/// Body of an authenticated update of every replica.
///
/// `content` is also accepted under the older field name `data`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateRequest {
    #[serde(default, alias = "data")]
    pub content: Option<String>,
}

impl UpdateRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: Some(content.into()) }
    }

    /// The new content, if present and non-empty.
    pub fn validate(self) -> ProtocolResult<String> {
        required_text(self.content, "content")
    }
}

/// Body of an out-of-band write to a single replica.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CorruptRequest {
    #[serde(default)]
    pub id: Option<ReplicaId>,
    #[serde(default, alias = "data")]
    pub content: Option<String>,
}

impl CorruptRequest {
    pub fn new(id: ReplicaId, content: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            content: Some(content.into()),
        }
    }

    /// The target replica and its new content.
    pub fn validate(self) -> ProtocolResult<(ReplicaId, String)> {
        let id = self.id.ok_or(ProtocolError::MissingField("id"))?;
        let content = required_text(self.content, "content")?;
        Ok((id, content))
    }
}

/// Body asking which replicas' tags authenticate a client-held value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CheckContentRequest {
    #[serde(default, alias = "data")]
    pub content: Option<String>,
}

impl CheckContentRequest {
    pub fn validate(self) -> ProtocolResult<String> {
        required_text(self.content, "content")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_accepts_content_or_data() {
        let a: UpdateRequest = serde_json::from_str(r#"{"content":"x"}"#).unwrap();
        let b: UpdateRequest = serde_json::from_str(r#"{"data":"x"}"#).unwrap();
        assert_eq!(a.validate().unwrap(), "x");
        assert_eq!(b.validate().unwrap(), "x");
    }

    #[test]
    fn update_rejects_missing_or_empty() {
        let missing: UpdateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.validate(), Err(ProtocolError::MissingField("content")));
        let empty = UpdateRequest::new("");
        assert_eq!(empty.validate(), Err(ProtocolError::MissingField("content")));
        let null: UpdateRequest = serde_json::from_str(r#"{"content":null}"#).unwrap();
        assert!(null.validate().is_err());
    }

    #[test]
    fn corrupt_requires_both_fields() {
        let ok: CorruptRequest = serde_json::from_str(r#"{"id":2,"data":"Corrupted Data"}"#).unwrap();
        assert_eq!(ok.validate().unwrap(), (ReplicaId::new(2), "Corrupted Data".to_string()));

        let no_id: CorruptRequest = serde_json::from_str(r#"{"content":"x"}"#).unwrap();
        assert_eq!(no_id.validate(), Err(ProtocolError::MissingField("id")));

        let no_content: CorruptRequest = serde_json::from_str(r#"{"id":1}"#).unwrap();
        assert_eq!(no_content.validate(), Err(ProtocolError::MissingField("content")));
    }

    #[test]
    fn check_content_requires_content() {
        assert!(CheckContentRequest::default().validate().is_err());
    }

    #[test]
    fn missing_field_message() {
        assert_eq!(ProtocolError::MissingField("content").to_string(), "content is required");
    }
}
