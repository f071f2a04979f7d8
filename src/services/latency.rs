//! Latency simulation
//!
//! Delays delivery of an already computed value by a random amount around a
//! base delay, to make in-process queries behave like remote fetches.
//! The value itself passes through untouched.

use crate::config::LatencyConfig;
use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    base_ms: u64,
}

impl Latency {
    pub fn new(base_ms: u64) -> Self {
        Self { base_ms }
    }

    /// No delay at all
    pub fn none() -> Self {
        Self::new(0)
    }

    pub fn from_config(config: &LatencyConfig) -> Self {
        Self::new(config.base_ms)
    }

    pub fn base_ms(&self) -> u64 {
        self.base_ms
    }

    /// Inclusive delay range `[floor(0.8 * B), ceil(1.2 * B)]` in milliseconds
    pub fn bounds(&self) -> (u64, u64) {
        let low = self.base_ms.saturating_mul(4) / 5;
        let high = self.base_ms.saturating_mul(6).saturating_add(4) / 5;
        (low, high)
    }

    /// Draw a delay uniformly from `bounds()`
    pub fn sample(&self) -> Duration {
        let (low, high) = self.bounds();
        let ms = if low >= high {
            low
        } else {
            rand::thread_rng().gen_range(low..=high)
        };
        Duration::from_millis(ms)
    }

    /// Deliver `value` after a sampled delay
    pub async fn deliver<T>(&self, value: T) -> T {
        let delay = self.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        value
    }

    /// Run `compute` now and deliver its result after a sampled delay
    pub async fn wrap<T, F>(&self, compute: F) -> T
    where
        F: FnOnce() -> T,
    {
        let value = compute();
        self.deliver(value).await
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::from_config(&LatencyConfig::default())
    }
}
