use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use rvault_crypto::{IntegrityTagger, SecretKey};
use rvault_store::{InMemoryReplicaStore, ReplicaStore};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::ratelimit::RateLimiter;
use crate::router::build_router;
use crate::state::AppState;

/// rvault replica server.
///
/// Owns the process-lifetime replica store and exposes it over HTTP.
pub struct RvaultServer {
    config: ServerConfig,
    store: Arc<InMemoryReplicaStore>,
}

impl RvaultServer {
    /// Build a server whose replicas are tagged with `tagger`.
    pub fn new(config: ServerConfig, tagger: Arc<IntegrityTagger>) -> ServerResult<Self> {
        let store =
            InMemoryReplicaStore::new(config.replica_count, &config.initial_content, tagger)?;
        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }

    /// Build a server keyed by the secret in `config.secret_env`.
    ///
    /// Fails if the variable is unset or empty; the server must not start
    /// without a secret.
    pub fn from_env(config: ServerConfig) -> ServerResult<Self> {
        let key = SecretKey::from_env(&config.secret_env)?;
        let tagger = IntegrityTagger::new(&key)?;
        Self::new(config, Arc::new(tagger))
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<InMemoryReplicaStore> {
        &self.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        let store: Arc<dyn ReplicaStore> = self.store.clone();
        let state = AppState::new(store, RateLimiter::new(&self.config.rate_limit));
        build_router(state, self.config.cors_permissive)
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            replicas = self.store.len(),
            "rvault server listening on {}",
            self.config.bind_addr
        );
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
