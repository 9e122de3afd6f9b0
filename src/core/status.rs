//! Shared provider status store.
//!
//! One record per provider plus the aggregate view (active provider,
//! overall online flag). The prober and the live-call path are the only
//! writers; the UI layer reads snapshots. Locks are held only for short
//! non-await sections, and sweep reentrancy is a compare-exchange flag
//! rather than a mutex.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::probe::ProbeResult;
use crate::core::provider::Provider;
use crate::error::ErrorKind;

// =============================================================================
// Per-provider health
// =============================================================================

/// Last known health of a single provider.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProviderHealth {
    pub online: bool,
    pub last_checked: Option<DateTime<Utc>>,
    pub latency_ms: Option<u64>,
    pub last_error: Option<ErrorKind>,
}

// =============================================================================
// Aggregate status
// =============================================================================

/// Aggregate system status: all provider records plus the derived view.
///
/// Invariants (maintained by every mutation):
/// - `active_provider` is `Some(p)` only if `statuses[p].online`;
/// - `is_online` is true iff at least one provider is online.
#[derive(Debug, Clone, Serialize)]
pub struct SystemStatus {
    pub statuses: HashMap<Provider, ProviderHealth>,
    pub active_provider: Option<Provider>,
    pub is_online: bool,
}

impl SystemStatus {
    /// All providers offline, nothing checked yet.
    #[must_use]
    pub fn new() -> Self {
        let statuses = Provider::PRIORITY
            .iter()
            .map(|&p| (p, ProviderHealth::default()))
            .collect();
        Self {
            statuses,
            active_provider: None,
            is_online: false,
        }
    }

    /// Whether a specific provider is currently marked online.
    #[must_use]
    pub fn provider_online(&self, provider: Provider) -> bool {
        self.statuses.get(&provider).is_some_and(|h| h.online)
    }

    fn recompute(&mut self) {
        self.active_provider = Provider::PRIORITY
            .iter()
            .copied()
            .find(|&p| self.provider_online(p));
        self.is_online = self.active_provider.is_some();
    }
}

impl Default for SystemStatus {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Status store
// =============================================================================

/// Process-wide shared store. Cheap to clone snapshots out of; writers
/// update records in place.
#[derive(Debug)]
pub struct StatusStore {
    inner: RwLock<SystemStatus>,
    sweeping: AtomicBool,
}

impl StatusStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(SystemStatus::new()),
            sweeping: AtomicBool::new(false),
        }
    }

    /// Read-only snapshot of the current status.
    ///
    /// # Panics
    /// Panics if the lock is poisoned (a writer panicked), which is a bug.
    #[must_use]
    pub fn snapshot(&self) -> SystemStatus {
        self.inner.read().expect("status lock poisoned").clone()
    }

    /// Record a probe outcome and recompute the aggregate view.
    pub fn record_probe(&self, provider: Provider, result: &ProbeResult) {
        let mut status = self.inner.write().expect("status lock poisoned");
        let entry = status.statuses.entry(provider).or_default();
        entry.online = result.online;
        entry.last_checked = Some(Utc::now());
        entry.latency_ms = Some(result.latency_ms);
        entry.last_error = result.error_kind;
        status.recompute();
    }

    /// Record a successful live call: provider goes online, error clears,
    /// and the provider becomes the active one.
    pub fn record_call_success(&self, provider: Provider, latency_ms: u64) {
        let mut status = self.inner.write().expect("status lock poisoned");
        let entry = status.statuses.entry(provider).or_default();
        entry.online = true;
        entry.last_checked = Some(Utc::now());
        entry.latency_ms = Some(latency_ms);
        entry.last_error = None;
        status.active_provider = Some(provider);
        status.is_online = true;
    }

    /// Record a failed live call: provider goes offline with the error
    /// kind recorded, and the active provider is recomputed.
    pub fn record_call_failure(&self, provider: Provider, kind: ErrorKind) {
        let mut status = self.inner.write().expect("status lock poisoned");
        let entry = status.statuses.entry(provider).or_default();
        entry.online = false;
        entry.last_checked = Some(Utc::now());
        entry.last_error = Some(kind);
        status.recompute();
    }

    /// Claim the sweep guard. Returns false when a sweep is already in
    /// progress; the caller must skip its sweep in that case.
    pub fn try_begin_sweep(&self) -> bool {
        self.sweeping
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Release the sweep guard.
    pub fn end_sweep(&self) {
        self.sweeping.store(false, Ordering::Release);
    }
}

impl Default for StatusStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fully_offline() {
        let store = StatusStore::new();
        let status = store.snapshot();
        assert!(!status.is_online);
        assert!(status.active_provider.is_none());
        assert_eq!(status.statuses.len(), Provider::PRIORITY.len());
        assert!(status.statuses.values().all(|h| !h.online));
    }

    #[test]
    fn probe_result_updates_record_and_aggregate() {
        let store = StatusStore::new();
        store.record_probe(Provider::OpenRouterText, &ProbeResult::ok(42));
        let status = store.snapshot();
        assert!(status.is_online);
        assert_eq!(status.active_provider, Some(Provider::OpenRouterText));
        let health = &status.statuses[&Provider::OpenRouterText];
        assert!(health.online);
        assert_eq!(health.latency_ms, Some(42));
        assert!(health.last_checked.is_some());
    }

    #[test]
    fn active_provider_follows_priority_order() {
        let store = StatusStore::new();
        store.record_probe(Provider::OpenRouterVisual, &ProbeResult::ok(10));
        store.record_probe(Provider::Cerebras, &ProbeResult::ok(20));
        assert_eq!(store.snapshot().active_provider, Some(Provider::Cerebras));

        store.record_call_failure(Provider::Cerebras, ErrorKind::ServerError);
        let status = store.snapshot();
        assert_eq!(status.active_provider, Some(Provider::OpenRouterVisual));
        assert!(status.is_online);
        assert_eq!(
            status.statuses[&Provider::Cerebras].last_error,
            Some(ErrorKind::ServerError)
        );
    }

    #[test]
    fn call_success_sets_active_provider() {
        let store = StatusStore::new();
        store.record_probe(Provider::Cerebras, &ProbeResult::ok(5));
        store.record_call_success(Provider::OpenRouterText, 77);
        let status = store.snapshot();
        assert_eq!(status.active_provider, Some(Provider::OpenRouterText));
        assert!(status.statuses[&Provider::OpenRouterText].online);
        assert!(status.statuses[&Provider::OpenRouterText].last_error.is_none());
    }

    #[test]
    fn all_failures_drop_back_offline() {
        let store = StatusStore::new();
        store.record_probe(Provider::Cerebras, &ProbeResult::ok(5));
        store.record_call_failure(Provider::Cerebras, ErrorKind::Timeout);
        let status = store.snapshot();
        assert!(!status.is_online);
        assert!(status.active_provider.is_none());
    }

    #[test]
    fn sweep_guard_is_exclusive() {
        let store = StatusStore::new();
        assert!(store.try_begin_sweep());
        assert!(!store.try_begin_sweep());
        store.end_sweep();
        assert!(store.try_begin_sweep());
        store.end_sweep();
    }
}
