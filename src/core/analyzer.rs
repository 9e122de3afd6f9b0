//! Fallback orchestrator.
//!
//! The single entry point for analysis requests. Walks providers in
//! priority order, retries with exponential backoff, and degrades to the
//! bundled sample content when every provider is exhausted. Provider-side
//! failures never escape `analyze`; the caller always receives usable
//! text plus a signal distinguishing a live answer from the sample.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use serde::Serialize;

use crate::core::chat::{ChatRequest, ChatResponse};
use crate::core::config::{AppConfig, SYSTEM_PROMPT};
use crate::core::http;
use crate::core::probe::{Prober, classify_transport};
use crate::core::provider::{Provider, ProviderRegistry};
use crate::core::retry::RetryPolicy;
use crate::core::sample::SAMPLE_ANALYSIS;
use crate::core::status::{StatusStore, SystemStatus};
use crate::error::{ErrorKind, Result, SiaError};

// =============================================================================
// Analysis result
// =============================================================================

/// Why the orchestrator fell back to sample content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradedReason {
    /// No provider was online before any call was attempted.
    AllOffline,
    /// Live attempts were made and all failed.
    RetriesExhausted,
}

impl std::fmt::Display for DegradedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllOffline => f.write_str("all providers offline"),
            Self::RetriesExhausted => f.write_str("retries exhausted"),
        }
    }
}

/// Where an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSource {
    /// A provider answered the live call.
    Live(Provider),
    /// Degraded mode: bundled sample content.
    Sample(DegradedReason),
}

/// The orchestrator's result: always usable text.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub content: String,
    pub source: AnalysisSource,
}

impl Analysis {
    /// Whether this is degraded-mode sample content.
    #[must_use]
    pub const fn is_sample(&self) -> bool {
        matches!(self.source, AnalysisSource::Sample(_))
    }

    /// The provider that answered, for live analyses.
    #[must_use]
    pub const fn provider(&self) -> Option<Provider> {
        match self.source {
            AnalysisSource::Live(p) => Some(p),
            AnalysisSource::Sample(_) => None,
        }
    }
}

// =============================================================================
// Analyzer
// =============================================================================

/// Provider health and fallback orchestrator.
pub struct Analyzer {
    registry: ProviderRegistry,
    store: Arc<StatusStore>,
    retry: RetryPolicy,
    client: Client,
    prober: Prober,
}

impl Analyzer {
    /// Build the orchestrator from resolved configuration.
    ///
    /// # Errors
    /// Returns an error if an HTTP client cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let registry = ProviderRegistry::from_config(config);
        Self::with_registry(registry, config.retry.clone(), config.main_timeout, config.health_timeout)
    }

    /// Build from an explicit registry; the seam used by integration tests
    /// and embedders with their own descriptor sets.
    ///
    /// # Errors
    /// Returns an error if an HTTP client cannot be constructed.
    pub fn with_registry(
        registry: ProviderRegistry,
        retry: RetryPolicy,
        main_timeout: Duration,
        health_timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            registry,
            store: Arc::new(StatusStore::new()),
            retry,
            client: http::build_client(main_timeout)?,
            prober: Prober::new(health_timeout)?,
        })
    }

    /// Shared handle to the status store.
    #[must_use]
    pub fn store(&self) -> Arc<StatusStore> {
        Arc::clone(&self.store)
    }

    /// Read-only status snapshot for the UI layer.
    #[must_use]
    pub fn status(&self) -> SystemStatus {
        self.store.snapshot()
    }

    /// Analyze a startup idea. Never fails for provider-side reasons.
    ///
    /// Each attempt picks the highest-priority provider that is marked
    /// online and has not been tried in this invocation; a provider is
    /// never called twice per `analyze`. Failed attempts back off per the
    /// retry policy. When no candidate remains, the bundled sample is
    /// returned with the degraded-mode reason.
    pub async fn analyze(&self, request: &str) -> Analysis {
        let mut tried: HashSet<Provider> = HashSet::new();

        for attempt in 1..=self.retry.max_attempts {
            let snapshot = self.store.snapshot();
            let Some(provider) = self
                .registry
                .iter_priority()
                .map(|d| d.id)
                .find(|p| snapshot.provider_online(*p) && !tried.contains(p))
            else {
                tracing::debug!(attempt, "no untried online provider remains");
                break;
            };
            tried.insert(provider);

            tracing::info!(
                provider = provider.api_name(),
                attempt,
                max_attempts = self.retry.max_attempts,
                "trying provider"
            );

            match self.call_provider(provider, request).await {
                Ok(content) => {
                    tracing::info!(provider = provider.api_name(), "analysis succeeded");
                    return Analysis {
                        content,
                        source: AnalysisSource::Live(provider),
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        provider = provider.api_name(),
                        attempt,
                        error = %e,
                        "analysis attempt failed"
                    );
                    if attempt < self.retry.max_attempts {
                        let delay = self.retry.delay_for(attempt);
                        tracing::debug!(delay_ms = delay.as_millis() as u64, "backing off");
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        let reason = if tried.is_empty() {
            DegradedReason::AllOffline
        } else {
            DegradedReason::RetriesExhausted
        };
        tracing::warn!(reason = %reason, "falling back to sample analysis");
        Analysis {
            content: SAMPLE_ANALYSIS.to_string(),
            source: AnalysisSource::Sample(reason),
        }
    }

    /// Probe every provider and write results into the status store.
    ///
    /// Returns false when another sweep was already in progress (the call
    /// is then a no-op). Probes run sequentially; this is a diagnostic
    /// sweep, not a hot path.
    pub async fn sweep_all(&self) -> bool {
        if !self.store.try_begin_sweep() {
            tracing::debug!("sweep already in progress, skipping");
            return false;
        }

        tracing::info!("probing all providers");
        for descriptor in self.registry.iter_priority() {
            let result = self.prober.probe(descriptor).await;
            self.store.record_probe(descriptor.id, &result);
        }
        self.store.end_sweep();

        let status = self.store.snapshot();
        match status.active_provider {
            Some(provider) => tracing::info!(
                active = provider.api_name(),
                "sweep complete, system online"
            ),
            None => tracing::warn!("sweep complete, all providers offline"),
        }
        true
    }

    /// Re-test all providers on demand (the user-facing retest entry).
    pub async fn retest_all(&self) {
        self.sweep_all().await;
    }

    /// Issue one live call. Always mutates the status store: success marks
    /// the provider online and active, failure marks it offline with the
    /// classified error kind.
    async fn call_provider(&self, provider: Provider, request: &str) -> Result<String> {
        let descriptor = self
            .registry
            .get(provider)
            .ok_or_else(|| SiaError::InvalidProvider(provider.api_name().to_string()))?;

        let body = ChatRequest::analysis(&descriptor.model, SYSTEM_PROMPT, request);
        let start = Instant::now();

        let response = descriptor
            .apply_headers(self.client.post(&descriptor.endpoint))
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let kind = classify_transport(&e);
                self.store.record_call_failure(provider, kind);
                SiaError::call_with_detail(provider.api_name(), kind, e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let kind = ErrorKind::from_status(status.as_u16());
            self.store.record_call_failure(provider, kind);
            let detail = response.text().await.unwrap_or_default();
            return Err(SiaError::call_with_detail(
                provider.api_name(),
                kind,
                format!("HTTP {status}: {}", detail.chars().take(200).collect::<String>()),
            ));
        }

        let envelope: ChatResponse = response.json().await.map_err(|e| {
            self.store.record_call_failure(provider, ErrorKind::ParseError);
            SiaError::call_with_detail(provider.api_name(), ErrorKind::ParseError, e.to_string())
        })?;

        #[allow(clippy::cast_possible_truncation)] // call latencies fit u64 millis
        let latency_ms = start.elapsed().as_millis() as u64;

        envelope.into_content().map_or_else(
            || {
                self.store.record_call_failure(provider, ErrorKind::ParseError);
                Err(SiaError::call_with_detail(
                    provider.api_name(),
                    ErrorKind::ParseError,
                    "envelope has no usable choice",
                ))
            },
            |content| {
                self.store.record_call_success(provider, latency_ms);
                Ok(content)
            },
        )
    }
}
