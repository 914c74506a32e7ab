use crate::rate_limit::Clock;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Above this many tracked clients, expired windows are swept before counting.
const PRUNE_THRESHOLD: usize = 1024;

#[derive(Debug, Clone, Copy)]
struct Window {
    started_at: Instant,
    count: u32,
}

/// Outcome of counting one request against its client's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    pub reset_after: Duration,
}

/// Fixed-window request counter keyed by client.
///
/// Built once at startup and shared between workers. Each key is updated
/// under its map entry lock, so concurrent requests from one client cannot
/// lose increments.
pub struct RateLimiter {
    windows: DashMap<String, Window>,
    window: Duration,
    max_requests: u32,
    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: u32, clock: Arc<dyn Clock>) -> Self {
        Self {
            windows: DashMap::new(),
            window,
            max_requests,
            clock,
        }
    }

    /// Count one request for `key` and decide whether it may proceed.
    pub fn check(&self, key: &str) -> RateLimitDecision {
        if self.windows.len() > PRUNE_THRESHOLD {
            self.prune();
        }

        let now = self.clock.now();
        let mut window = self.windows.entry(key.to_string()).or_insert(Window {
            started_at: now,
            count: 0,
        });
        if now.duration_since(window.started_at) >= self.window {
            *window = Window {
                started_at: now,
                count: 0,
            };
        }
        window.count = window.count.saturating_add(1);

        RateLimitDecision {
            allowed: window.count <= self.max_requests,
            limit: self.max_requests,
            remaining: self.max_requests.saturating_sub(window.count),
            reset_after: self
                .window
                .saturating_sub(now.duration_since(window.started_at)),
        }
    }

    /// Drop every window that has already expired.
    pub fn prune(&self) {
        let now = self.clock.now();
        self.windows
            .retain(|_, window| now.duration_since(window.started_at) < self.window);
    }

    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}
