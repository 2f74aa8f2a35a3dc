//! # Submission Rate Limiter
//!
//! Sliding-window attempt counter keyed by caller identifier.
//!
//! Every submission attempt counts against the caller's window, whether or
//! not it later passes validation. State lives in a sharded concurrent map
//! (`DashMap`) so concurrent callers do not contend on one global lock, and
//! idle callers are reclaimed to bound memory.

use crate::domain::value_objects::CallerId;
use dashmap::DashMap;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Configuration for the submission rate limiter.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Maximum attempts allowed per caller within the window.
    pub max_attempts: usize,
    /// Length of the trailing window.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: 20,
            window: Duration::from_secs(60),
        }
    }
}

/// Sliding-window rate limiter over per-caller attempt timestamps.
#[derive(Debug)]
pub struct SlidingWindowRateLimiter {
    attempts: DashMap<CallerId, VecDeque<Instant>>,
    config: RateLimitConfig,
}

impl SlidingWindowRateLimiter {
    /// Creates a limiter with the given configuration.
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            attempts: DashMap::new(),
            config,
        }
    }

    /// Creates a limiter with the default 20-per-60-seconds policy.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(RateLimitConfig::default())
    }

    /// Registers an attempt for `caller` and returns whether it is allowed.
    ///
    /// Expired entries are pruned before the check. A disallowed attempt is
    /// not recorded, so sustained abuse cannot grow a caller's entry beyond
    /// `max_attempts` timestamps.
    pub fn try_acquire(&self, caller: &CallerId) -> bool {
        let now = Instant::now();
        let mut entry = self.attempts.entry(caller.clone()).or_default();

        Self::prune(&mut entry, now, self.config.window);

        if entry.len() < self.config.max_attempts {
            entry.push_back(now);
            true
        } else {
            false
        }
    }

    /// Drops callers whose every recorded attempt has left the window.
    ///
    /// Intended to be driven periodically from a background task.
    pub fn evict_idle(&self) {
        let now = Instant::now();
        let window = self.config.window;
        self.attempts.retain(|_, timestamps| {
            Self::prune(timestamps, now, window);
            !timestamps.is_empty()
        });
    }

    /// Returns the number of callers currently tracked.
    #[must_use]
    pub fn tracked_callers(&self) -> usize {
        self.attempts.len()
    }

    /// Returns the configuration in effect.
    #[must_use]
    pub fn config(&self) -> RateLimitConfig {
        self.config
    }

    fn prune(timestamps: &mut VecDeque<Instant>, now: Instant, window: Duration) {
        while let Some(oldest) = timestamps.front() {
            if now.duration_since(*oldest) >= window {
                timestamps.pop_front();
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max_attempts: usize, window_ms: u64) -> SlidingWindowRateLimiter {
        SlidingWindowRateLimiter::new(RateLimitConfig {
            max_attempts,
            window: Duration::from_millis(window_ms),
        })
    }

    #[test]
    fn allows_up_to_limit_then_rejects() {
        let limiter = limiter(20, 60_000);
        let caller = CallerId::new("10.0.0.1");

        for _ in 0..20 {
            assert!(limiter.try_acquire(&caller));
        }
        assert!(!limiter.try_acquire(&caller));
    }

    #[test]
    fn callers_are_limited_independently() {
        let limiter = limiter(1, 60_000);
        let first = CallerId::new("10.0.0.1");
        let second = CallerId::new("10.0.0.2");

        assert!(limiter.try_acquire(&first));
        assert!(!limiter.try_acquire(&first));
        assert!(limiter.try_acquire(&second));
    }

    #[test]
    fn window_slides() {
        let limiter = limiter(2, 50);
        let caller = CallerId::new("10.0.0.1");

        assert!(limiter.try_acquire(&caller));
        assert!(limiter.try_acquire(&caller));
        assert!(!limiter.try_acquire(&caller));

        std::thread::sleep(Duration::from_millis(60));
        assert!(limiter.try_acquire(&caller));
    }

    #[test]
    fn evict_idle_reclaims_expired_callers() {
        let limiter = limiter(5, 50);
        let caller = CallerId::new("10.0.0.1");

        limiter.try_acquire(&caller);
        assert_eq!(limiter.tracked_callers(), 1);

        std::thread::sleep(Duration::from_millis(60));
        limiter.evict_idle();
        assert_eq!(limiter.tracked_callers(), 0);
    }

    #[test]
    fn evict_idle_keeps_active_callers() {
        let limiter = limiter(5, 60_000);
        let caller = CallerId::new("10.0.0.1");

        limiter.try_acquire(&caller);
        limiter.evict_idle();
        assert_eq!(limiter.tracked_callers(), 1);
    }

    #[test]
    fn rejected_attempts_do_not_grow_state() {
        let limiter = limiter(3, 60_000);
        let caller = CallerId::new("10.0.0.1");

        for _ in 0..50 {
            limiter.try_acquire(&caller);
        }
        let stored = limiter
            .attempts
            .get(&caller)
            .map(|entry| entry.len())
            .unwrap_or(0);
        assert_eq!(stored, 3);
    }

    #[test]
    fn default_config_matches_policy() {
        let config = RateLimitConfig::default();
        assert_eq!(config.max_attempts, 20);
        assert_eq!(config.window, Duration::from_secs(60));
    }
}
