use rand::Rng;
use std::time::Duration;

const DEFAULT_BASE_DELAY_MS: u64 = 500;
const DEFAULT_MAX_DELAY_MS: u64 = 30_000;
const MAX_DOUBLINGS: u32 = 6;
const JITTER_PERCENT: u64 = 20;
/// Largest delay a browser timer accepts (`setTimeout` takes a u32 of ms).
pub const MAX_TIMER_DELAY_MS: u64 = u32::MAX as u64;

/// Exponential reconnect delay, capped, with a bounded random jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    base_delay_ms: u64,
    max_delay_ms: u64,
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DELAY_MS, DEFAULT_MAX_DELAY_MS)
    }
}

impl Backoff {
    /// Both bounds are clamped to what a browser timer can wait.
    pub fn new(base_delay_ms: u64, max_delay_ms: u64) -> Self {
        let base_delay_ms = base_delay_ms.clamp(1, MAX_TIMER_DELAY_MS);
        Self {
            base_delay_ms,
            max_delay_ms: max_delay_ms.clamp(base_delay_ms, MAX_TIMER_DELAY_MS),
        }
    }

    pub fn base_delay_ms(&self) -> u64 {
        self.base_delay_ms
    }

    pub fn max_delay_ms(&self) -> u64 {
        self.max_delay_ms
    }

    /// Delay before reconnect attempt `attempt` (1-based), without jitter.
    pub fn delay_ms(&self, attempt: u32) -> u64 {
        let multiplier = 2_u64.saturating_pow(attempt.min(MAX_DOUBLINGS));
        self.base_delay_ms
            .saturating_mul(multiplier)
            .min(self.max_delay_ms)
    }

    /// `delay_ms` plus up to 20% jitter, never above the cap.
    pub fn jittered_delay_ms<R: Rng + ?Sized>(&self, attempt: u32, rng: &mut R) -> u64 {
        let delay = self.delay_ms(attempt);
        let spread = delay.saturating_mul(JITTER_PERCENT) / 100;
        let jitter = if spread == 0 {
            0
        } else {
            rng.random_range(0..=spread)
        };
        delay.saturating_add(jitter).min(self.max_delay_ms)
    }

    pub fn next_delay(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.jittered_delay_ms(attempt, &mut rand::rng()))
    }
}
