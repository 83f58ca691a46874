use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;

use rvault_protocol::{
    CheckContentRequest, CheckContentResponse, CorruptRequest, CorruptResponse, HealthResponse,
    InfoResponse, ReplicaListResponse, RestoreResponse, UpdateRequest, UpdateResponse,
    VerifyResponse,
};

use crate::error::ServerResult;

// Body extractors are taken as `Result` so that every malformed body is
// answered with 400 and an `ErrorResponse`, like a missing field.
use crate::state::AppState;

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse::new(state.store.len()))
}

/// `GET /`: every replica's content, tags omitted.
pub async fn read_all_handler(State(state): State<AppState>) -> Json<ReplicaListResponse> {
    Json(ReplicaListResponse {
        replicas: state.store.read_all(),
    })
}

/// `POST /`: authenticated update of all replicas.
pub async fn update_handler(
    State(state): State<AppState>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> ServerResult<Json<UpdateResponse>> {
    let Json(request) = payload?;
    let content = request.validate()?;
    let replicas = state.store.update_all(&content)?;
    Ok(Json(UpdateResponse::new(replicas)))
}

/// `POST /corrupt`: overwrite one replica without retagging.
pub async fn corrupt_handler(
    State(state): State<AppState>,
    payload: Result<Json<CorruptRequest>, JsonRejection>,
) -> ServerResult<Json<CorruptResponse>> {
    let Json(request) = payload?;
    let (id, content) = request.validate()?;
    let replica = state.store.corrupt(id, &content)?;
    Ok(Json(CorruptResponse::new(replica)))
}

/// `GET /verify`: list replicas whose tag does not match their content.
pub async fn verify_handler(State(state): State<AppState>) -> Json<VerifyResponse> {
    Json(state.store.verify().into())
}

/// `POST /verify`: which replicas' tags authenticate the supplied content.
pub async fn check_content_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckContentRequest>, JsonRejection>,
) -> ServerResult<Json<CheckContentResponse>> {
    let Json(request) = payload?;
    let content = request.validate()?;
    let matching = state.store.check_content(&content)?;
    Ok(Json(CheckContentResponse::new(matching)))
}

/// `POST /restore`: plurality restore of all replicas.
pub async fn restore_handler(State(state): State<AppState>) -> ServerResult<Json<RestoreResponse>> {
    let outcome = state.store.restore()?;
    Ok(Json(outcome.into()))
}
