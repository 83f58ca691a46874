use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::config::RateLimitConfig;
use crate::error::ServerError;
use crate::state::AppState;

/// Client map size above which expired windows are swept.
const SWEEP_THRESHOLD: usize = 4096;

#[derive(Clone, Copy, Debug)]
struct Window {
    started: Instant,
    count: u32,
}

/// Fixed-window request counter keyed by client IP.
///
/// Requests whose peer address is unknown share a single bucket.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    clients: Mutex<HashMap<Option<IpAddr>, Window>>,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            max_requests: config.max_requests,
            window: Duration::from_secs(config.window_secs),
            clients: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.max_requests > 0
    }

    /// Count one request. On rejection returns the time until the window resets.
    pub fn check(&self, client: Option<IpAddr>) -> Result<(), Duration> {
        self.check_at(client, Instant::now())
    }

    fn check_at(&self, client: Option<IpAddr>, now: Instant) -> Result<(), Duration> {
        if !self.is_enabled() {
            return Ok(());
        }
        let mut clients = self.clients.lock().expect("lock poisoned");
        if clients.len() > SWEEP_THRESHOLD {
            let window = self.window;
            clients.retain(|_, w| now.duration_since(w.started) < window);
        }

        let entry = clients.entry(client).or_insert(Window { started: now, count: 0 });
        let elapsed = now.duration_since(entry.started);
        if elapsed >= self.window {
            *entry = Window { started: now, count: 0 };
        }
        if entry.count >= self.max_requests {
            return Err(self.window.saturating_sub(now.duration_since(entry.started)));
        }
        entry.count += 1;
        Ok(())
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("max_requests", &self.max_requests)
            .field("window", &self.window)
            .finish()
    }
}

/// Middleware rejecting requests over the configured limit with 429.
pub async fn enforce(
    State(state): State<AppState>,
    connect: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let client = connect.map(|ConnectInfo(addr)| addr.ip());
    match state.limiter.check(client) {
        Ok(()) => next.run(request).await,
        Err(retry_after) => {
            tracing::warn!(?client, "rate limit exceeded");
            ServerError::RateLimited {
                retry_after_secs: retry_after.as_secs().max(1),
            }
            .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max_requests: u32, window_secs: u64) -> RateLimiter {
        RateLimiter::new(&RateLimitConfig { max_requests, window_secs })
    }

    fn ip(last: u8) -> Option<IpAddr> {
        Some(IpAddr::from([10, 0, 0, last]))
    }

    #[test]
    fn allows_up_to_limit() {
        let l = limiter(2, 60);
        let now = Instant::now();
        assert!(l.check_at(ip(1), now).is_ok());
        assert!(l.check_at(ip(1), now).is_ok());
        let retry = l.check_at(ip(1), now).unwrap_err();
        assert_eq!(retry, Duration::from_secs(60));
    }

    #[test]
    fn clients_are_independent() {
        let l = limiter(1, 60);
        let now = Instant::now();
        assert!(l.check_at(ip(1), now).is_ok());
        assert!(l.check_at(ip(2), now).is_ok());
        assert!(l.check_at(ip(1), now).is_err());
    }

    #[test]
    fn window_resets() {
        let l = limiter(1, 10);
        let start = Instant::now();
        assert!(l.check_at(ip(1), start).is_ok());
        assert!(l.check_at(ip(1), start + Duration::from_secs(5)).is_err());
        assert!(l.check_at(ip(1), start + Duration::from_secs(10)).is_ok());
    }

    #[test]
    fn disabled_never_rejects() {
        let l = RateLimiter::new(&RateLimitConfig::disabled());
        for _ in 0..1000 {
            assert!(l.check(None).is_ok());
        }
    }
}
