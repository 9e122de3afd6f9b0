//! Human-readable terminal output.

use std::fmt::Write;

use colored::Colorize;

use crate::core::analyzer::{Analysis, AnalysisSource, DegradedReason};
use crate::core::provider::Provider;
use crate::core::status::SystemStatus;
use crate::util::format::{format_age, format_latency};

/// Render the provider status table.
#[must_use]
pub fn render_status(status: &SystemStatus, no_color: bool) -> String {
    let mut out = String::new();

    let headline = status.active_provider.map_or_else(
        || {
            let line = "All providers offline - sample data will be used".to_string();
            if no_color { line } else { line.red().to_string() }
        },
        |active| {
            let line = format!("Connected via {}", active.display_name());
            if no_color { line } else { line.green().to_string() }
        },
    );
    let _ = writeln!(out, "{headline}");
    let _ = writeln!(out);

    for &provider in Provider::PRIORITY {
        let Some(health) = status.statuses.get(&provider) else {
            continue;
        };
        let marker = if status.active_provider == Some(provider) {
            "*"
        } else {
            " "
        };
        let state = if health.online {
            if no_color {
                "online".to_string()
            } else {
                "online".green().to_string()
            }
        } else if no_color {
            "offline".to_string()
        } else {
            "offline".red().to_string()
        };
        let error = health
            .last_error
            .map_or_else(String::new, |kind| format!("  [{kind}]"));
        let _ = writeln!(
            out,
            "{marker} {:<18} {:<18} {state:<10} {:>8}  {}{error}",
            provider.display_name(),
            provider.purpose(),
            format_latency(health.latency_ms),
            format_age(health.last_checked),
        );
    }

    out
}

/// Render an analysis, with a banner when it is sample content.
#[must_use]
pub fn render_analysis(analysis: &Analysis, no_color: bool) -> String {
    match analysis.source {
        AnalysisSource::Live(provider) => {
            let footer = format!("\n\n[analyzed via {}]", provider.display_name());
            let footer = if no_color {
                footer
            } else {
                footer.dimmed().to_string()
            };
            format!("{}{footer}", analysis.content)
        }
        AnalysisSource::Sample(reason) => {
            let banner = match reason {
                DegradedReason::AllOffline => {
                    "Offline - showing sample analysis (all providers unreachable)"
                }
                DegradedReason::RetriesExhausted => {
                    "Providers unavailable - showing sample analysis (retries exhausted)"
                }
            };
            let banner = if no_color {
                banner.to_string()
            } else {
                banner.yellow().bold().to_string()
            };
            format!("{banner}\n\n{}", analysis.content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::probe::ProbeResult;
    use crate::core::status::StatusStore;
    use crate::error::ErrorKind;

    #[test]
    fn status_headline_reflects_offline() {
        let status = StatusStore::new().snapshot();
        let text = render_status(&status, true);
        assert!(text.contains("All providers offline"));
        assert!(text.contains("Cerebras"));
        assert!(text.contains("offline"));
        assert!(text.contains("never"));
    }

    #[test]
    fn status_marks_active_provider() {
        let store = StatusStore::new();
        store.record_probe(Provider::Cerebras, &ProbeResult::ok(30));
        store.record_probe(
            Provider::OpenRouterText,
            &ProbeResult::failed(ErrorKind::AuthError, 10, None),
        );
        let text = render_status(&store.snapshot(), true);
        assert!(text.contains("Connected via Cerebras"));
        assert!(text.contains("* Cerebras"));
        assert!(text.contains("[auth_error]"));
        assert!(text.contains("30ms"));
    }

    #[test]
    fn sample_analysis_gets_banner() {
        let analysis = Analysis {
            content: "body".to_string(),
            source: AnalysisSource::Sample(DegradedReason::RetriesExhausted),
        };
        let text = render_analysis(&analysis, true);
        assert!(text.starts_with("Providers unavailable"));
        assert!(text.ends_with("body"));
    }

    #[test]
    fn live_analysis_names_provider() {
        let analysis = Analysis {
            content: "body".to_string(),
            source: AnalysisSource::Live(Provider::OpenRouterText),
        };
        let text = render_analysis(&analysis, true);
        assert!(text.starts_with("body"));
        assert!(text.contains("analyzed via OpenRouter Text"));
    }
}
