//! Provider health probing.
//!
//! Issues each provider's fixed health-check payload with the short probe
//! timeout and classifies the outcome. The prober is pure with respect to
//! the status store: writing results back is the sweep's job, which keeps
//! probing independently testable.

use std::time::{Duration, Instant};

use reqwest::Client;

use crate::core::chat::ChatResponse;
use crate::core::http;
use crate::core::provider::ProviderDescriptor;
use crate::error::{ErrorKind, Result};

/// How much response-body detail to keep on failures.
const DETAIL_LIMIT: usize = 200;

// =============================================================================
// Probe Result
// =============================================================================

/// Classified outcome of a single health probe.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub online: bool,
    pub latency_ms: u64,
    pub error_kind: Option<ErrorKind>,
    pub detail: Option<String>,
}

impl ProbeResult {
    /// A healthy probe.
    #[must_use]
    pub const fn ok(latency_ms: u64) -> Self {
        Self {
            online: true,
            latency_ms,
            error_kind: None,
            detail: None,
        }
    }

    /// A failed probe.
    #[must_use]
    pub fn failed(kind: ErrorKind, latency_ms: u64, detail: Option<String>) -> Self {
        Self {
            online: false,
            latency_ms,
            error_kind: Some(kind),
            detail,
        }
    }
}

// =============================================================================
// Prober
// =============================================================================

/// Health prober holding the short-timeout client.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
}

impl Prober {
    /// Create a prober with the given health-check timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http::build_client(timeout)?,
        })
    }

    /// Probe one provider with its fixed health-check payload.
    pub async fn probe(&self, descriptor: &ProviderDescriptor) -> ProbeResult {
        let provider = descriptor.id;
        tracing::debug!(
            provider = provider.api_name(),
            endpoint = %descriptor.endpoint,
            "probing provider"
        );

        let start = Instant::now();
        let request = descriptor
            .apply_headers(self.client.post(&descriptor.endpoint))
            .header("Accept", "application/json")
            .json(&descriptor.health_check_body());

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let kind = classify_transport(&e);
                let latency_ms = elapsed_ms(start);
                tracing::debug!(
                    provider = provider.api_name(),
                    error = %e,
                    kind = %kind,
                    "probe transport failure"
                );
                return ProbeResult::failed(kind, latency_ms, Some(e.to_string()));
            }
        };

        let status = response.status();
        let latency_ms = elapsed_ms(start);

        if !status.is_success() {
            let kind = ErrorKind::from_status(status.as_u16());
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(
                provider = provider.api_name(),
                status = status.as_u16(),
                kind = %kind,
                "probe rejected"
            );
            return ProbeResult::failed(kind, latency_ms, Some(truncate_detail(&body)));
        }

        match response.json::<ChatResponse>().await {
            Ok(envelope) => match envelope.into_content() {
                Some(_) => {
                    tracing::debug!(
                        provider = provider.api_name(),
                        latency_ms,
                        "probe succeeded"
                    );
                    ProbeResult::ok(latency_ms)
                }
                None => ProbeResult::failed(
                    ErrorKind::ParseError,
                    latency_ms,
                    Some("envelope has no usable choice".to_string()),
                ),
            },
            Err(e) => ProbeResult::failed(
                ErrorKind::ParseError,
                latency_ms,
                Some(truncate_detail(&e.to_string())),
            ),
        }
    }
}

/// Classify a transport-level reqwest failure.
pub(crate) fn classify_transport(error: &reqwest::Error) -> ErrorKind {
    if error.is_timeout() {
        ErrorKind::Timeout
    } else if error.is_connect() || error.is_request() {
        ErrorKind::NetworkError
    } else {
        ErrorKind::UnknownError
    }
}

#[allow(clippy::cast_possible_truncation)] // probe latencies fit u64 millis
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

fn truncate_detail(text: &str) -> String {
    let mut detail: String = text.chars().take(DETAIL_LIMIT).collect();
    if text.chars().count() > DETAIL_LIMIT {
        detail.push_str("...");
    }
    detail
}
