use std::sync::Arc;

use rvault_store::ReplicaStore;

use crate::ratelimit::RateLimiter;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReplicaStore>,
    pub limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(store: Arc<dyn ReplicaStore>, limiter: RateLimiter) -> Self {
        Self {
            store,
            limiter: Arc::new(limiter),
        }
    }
}
