//! Periodic connectivity monitor.
//!
//! Re-runs the probe sweep on a fixed interval, but only while the system
//! is marked offline. A healthy system is not probed; the sweep guard in
//! the status store suppresses overlap with user-triggered retests.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::core::analyzer::Analyzer;

/// Periodic sweep task handle builder.
pub struct Monitor {
    analyzer: Arc<Analyzer>,
    interval: Duration,
}

impl Monitor {
    #[must_use]
    pub const fn new(analyzer: Arc<Analyzer>, interval: Duration) -> Self {
        Self { analyzer, interval }
    }

    /// Spawn the monitor loop. Runs until the handle is aborted or the
    /// runtime shuts down.
    #[must_use]
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick fires immediately; the startup sweep already
            // ran, so consume it.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if self.analyzer.status().is_online {
                    continue;
                }
                tracing::debug!("system offline, re-running probe sweep");
                self.analyzer.sweep_all().await;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::probe::ProbeResult;
    use crate::core::provider::{Provider, ProviderDescriptor, ProviderRegistry};
    use crate::core::retry::RetryPolicy;

    fn dead_end_analyzer() -> Arc<Analyzer> {
        let registry = ProviderRegistry::with_descriptors(vec![ProviderDescriptor::new(
            Provider::Cerebras,
            // Unroutable; any probe attempt marks the provider offline.
            "http://127.0.0.1:9",
            None,
        )]);
        Arc::new(
            Analyzer::with_registry(
                registry,
                RetryPolicy::instant(1),
                Duration::from_millis(200),
                Duration::from_millis(200),
            )
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn monitor_skips_probing_while_online() {
        let analyzer = dead_end_analyzer();

        // Mark the provider online by hand; the monitor must then leave
        // the store untouched across ticks.
        analyzer
            .store()
            .record_probe(Provider::Cerebras, &ProbeResult::ok(1));

        let handle = Monitor::new(Arc::clone(&analyzer), Duration::from_millis(20)).spawn();
        tokio::time::sleep(Duration::from_millis(120)).await;
        handle.abort();

        let status = analyzer.status();
        assert!(status.is_online);
        assert!(status.statuses[&Provider::Cerebras].online);
    }

    #[tokio::test]
    async fn monitor_sweeps_while_offline() {
        let analyzer = dead_end_analyzer();
        assert!(
            analyzer.status().statuses[&Provider::Cerebras]
                .last_checked
                .is_none()
        );

        let handle = Monitor::new(Arc::clone(&analyzer), Duration::from_millis(20)).spawn();
        tokio::time::sleep(Duration::from_millis(200)).await;
        handle.abort();

        // A sweep ran: the dead endpoint was probed and recorded.
        let health = &analyzer.status().statuses[&Provider::Cerebras];
        assert!(health.last_checked.is_some());
        assert!(!health.online);
    }
}
