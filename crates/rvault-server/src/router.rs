use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use rvault_protocol::endpoints;

use crate::handler;
use crate::ratelimit;
use crate::state::AppState;

/// Build the axum router with all rvault endpoints.
pub fn build_router(state: AppState, cors_permissive: bool) -> Router {
    let router = Router::new()
        .route(
            endpoints::REPLICAS,
            get(handler::read_all_handler).post(handler::update_handler),
        )
        .route(endpoints::CORRUPT, post(handler::corrupt_handler))
        .route(
            endpoints::VERIFY,
            get(handler::verify_handler).post(handler::check_content_handler),
        )
        .route(endpoints::RESTORE, post(handler::restore_handler))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .layer(middleware::from_fn_with_state(state.clone(), ratelimit::enforce))
        .layer(TraceLayer::new_for_http());

    let router = if cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };
    router.with_state(state)
}
