//! Robot-mode output (stable JSON for scripts and agents).

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::analyzer::{Analysis, AnalysisSource, DegradedReason};
use crate::core::provider::Provider;
use crate::core::status::SystemStatus;
use crate::error::Result;

/// Schema version for robot output consumers.
const SCHEMA_VERSION: u32 = 1;

/// Render any serializable value as JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json<T: Serialize>(output: &T, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(output)?)
    } else {
        Ok(serde_json::to_string(output)?)
    }
}

/// JSON report for the `status` command.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub status: SystemStatus,
}

impl StatusReport {
    #[must_use]
    pub fn new(status: SystemStatus) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            status,
        }
    }
}

/// JSON report for the `analyze` command.
#[derive(Debug, Serialize)]
pub struct AnalyzeReport {
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    /// "live" or "sample".
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded_reason: Option<DegradedReason>,
    pub content: String,
}

impl AnalyzeReport {
    #[must_use]
    pub fn new(analysis: &Analysis) -> Self {
        let (source, provider, degraded_reason) = match analysis.source {
            AnalysisSource::Live(p) => ("live", Some(p), None),
            AnalysisSource::Sample(reason) => ("sample", None, Some(reason)),
        };
        Self {
            schema_version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            source,
            provider,
            degraded_reason,
            content: analysis.content.clone(),
        }
    }
}
