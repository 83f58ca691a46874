//! Wire protocol for rvault.
//!
//! Defines the endpoint paths and the JSON request/response bodies exchanged
//! between clients and the replica server. Requests arrive with optional
//! fields and are validated here, so the store only ever sees well-formed
//! arguments.

pub mod endpoint;
pub mod error;
pub mod request;
pub mod response;

pub use endpoint::{endpoints, HealthResponse, InfoResponse};
pub use error::{ProtocolError, ProtocolResult};
pub use request::{CheckContentRequest, CorruptRequest, UpdateRequest};
pub use response::{
    CheckContentResponse, CorruptResponse, ErrorResponse, ReplicaListResponse, RestoreResponse,
    UpdateResponse, VerifyResponse,
};
