//! Retry policy for the fallback orchestrator.
//!
//! The transport layer never retries; all retry pacing comes from here.

use std::time::Duration;

use serde::Deserialize;

/// Immutable retry configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Maximum attempts per `analyze` invocation (including the first).
    pub max_attempts: u32,
    /// Delay before the second attempt.
    #[serde(with = "millis")]
    pub base_delay: Duration,
    /// Upper bound on the delay between attempts.
    #[serde(with = "millis")]
    pub max_delay: Duration,
    /// Double the delay after each failed attempt; constant otherwise.
    pub exponential: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(10_000),
            exponential: true,
        }
    }
}

impl RetryPolicy {
    /// Delay to sleep after `attempt` (1-based) fails, before the next one.
    ///
    /// Exponential mode: `min(base * 2^(attempt-1), max)`.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        if self.exponential {
            let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
            self.base_delay.saturating_mul(factor).min(self.max_delay)
        } else {
            self.base_delay
        }
    }

    /// A policy suitable for quick tests (no real waiting).
    #[must_use]
    pub const fn instant(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(10),
            exponential: true,
        }
    }
}

mod millis {
    use super::Duration;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let ms = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(ms))
    }
}
