use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use rvault_protocol::ErrorResponse;
use rvault_store::StoreError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Protocol(#[from] rvault_protocol::ProtocolError),

    /// The request body was not JSON of the expected shape.
    #[error("malformed request: {0}")]
    BadRequest(String),

    #[error("secret key error: {0}")]
    Key(#[from] rvault_crypto::KeyError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("too many requests, retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// HTTP status reported for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::InvalidInput(_)) | Self::Protocol(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Store(StoreError::EmptyStore)
            | Self::Key(_)
            | Self::Config(_)
            | Self::Io(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        let body = Json(ErrorResponse::new(self.to_string()));
        match self {
            Self::RateLimited { retry_after_secs } => (
                status,
                [(header::RETRY_AFTER, retry_after_secs.to_string())],
                body,
            )
                .into_response(),
            _ => (status, body).into_response(),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rvault_protocol::ProtocolError;
    use rvault_types::ReplicaId;

    #[test]
    fn status_mapping() {
        assert_eq!(
            ServerError::from(StoreError::InvalidInput("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::from(ProtocolError::MissingField("id")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::from(StoreError::NotFound(ReplicaId::new(9))).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::from(StoreError::EmptyStore).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServerError::RateLimited { retry_after_secs: 1 }.status(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn store_errors_render_their_own_message() {
        let err = ServerError::from(StoreError::NotFound(ReplicaId::new(99)));
        assert_eq!(err.to_string(), "replica not found: 99");
    }

    #[test]
    fn rate_limited_sets_retry_after() {
        let response = ServerError::RateLimited { retry_after_secs: 42 }.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "42");
    }
}
