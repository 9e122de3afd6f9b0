//! Application configuration.
//!
//! Everything is fixed at process start: retry policy, the two timeout
//! tiers, the sweep interval, and per-provider endpoint/model/credential
//! overrides. Values come from an optional TOML file (platform config
//! directory, or `SIA_CONFIG`) with API keys preferring the per-provider
//! environment variables.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::core::provider::Provider;
use crate::core::retry::RetryPolicy;
use crate::error::{Result, SiaError};

/// Env var pointing at an explicit config file.
const CONFIG_PATH_ENV: &str = "SIA_CONFIG";

/// Fixed system instruction sent with every live analysis call.
pub const SYSTEM_PROMPT: &str = "You are a startup research assistant. When analyzing a startup \
idea, provide a comprehensive evaluation in exactly these sections:

**1. IDEA VALIDATION SCORE**: Rate 1-10 with data-driven justification
**2. MARKET ANALYSIS**: TAM size and growth, industry trends, competitive landscape, entry \
barriers, target audience
**3. STRENGTHS & OPPORTUNITIES**: Market potential, unique advantages
**4. POTENTIAL FLAWS/RISKS**: Categorized risks with evidence
**5. FUTURE RISKS**: Market trends, regulatory, tech disruption
**6. PRESENT HURDLES**: Competition, resources, MVP challenges
**7. RELEVANT VCs/INVESTORS**: Name, focus areas, contact info, recent investments
**8. HOW ACTA CAN HELP**: Tailored support and next steps
**9. EMAIL TEMPLATES**: 3 professional outreach templates

Use clear formatting with proper headers and structured presentation. Provide actionable \
insights based on real market data.";

// =============================================================================
// Resolved configuration
// =============================================================================

/// Per-provider overrides from the config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderOverrides {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub retry: RetryPolicy,
    pub main_timeout: Duration,
    pub health_timeout: Duration,
    pub sweep_interval: Duration,
    providers: HashMap<Provider, ProviderOverrides>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            main_timeout: crate::core::http::MAIN_TIMEOUT,
            health_timeout: crate::core::http::HEALTH_TIMEOUT,
            sweep_interval: Duration::from_secs(60),
            providers: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration, merging the config file over defaults.
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed,
    /// names an unknown provider, or fails validation.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.is_file() => {
                let text = std::fs::read_to_string(&path)?;
                let file: ConfigFile =
                    toml::from_str(&text).map_err(|e| SiaError::ConfigParse {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    })?;
                Self::from_file(file)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Config file location: `SIA_CONFIG` or the platform config dir.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        ProjectDirs::from("so", "acta", "sia").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Overrides for one provider, if any were configured.
    #[must_use]
    pub fn provider_overrides(&self, provider: Provider) -> Option<&ProviderOverrides> {
        self.providers.get(&provider)
    }

    fn from_file(file: ConfigFile) -> Result<Self> {
        let defaults = Self::default();
        let mut providers = HashMap::new();
        for (name, overrides) in file.providers {
            providers.insert(Provider::from_api_name(&name)?, overrides);
        }

        let config = Self {
            retry: file.retry.unwrap_or_default(),
            main_timeout: file
                .main_timeout_secs
                .map_or(defaults.main_timeout, Duration::from_secs),
            health_timeout: file
                .health_timeout_secs
                .map_or(defaults.health_timeout, Duration::from_secs),
            sweep_interval: file
                .sweep_interval_secs
                .map_or(defaults.sweep_interval, Duration::from_secs),
            providers,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.retry.max_attempts == 0 {
            return Err(SiaError::Config(
                "retry.max_attempts must be at least 1".to_string(),
            ));
        }
        if self.sweep_interval.is_zero() {
            return Err(SiaError::Config(
                "sweep_interval_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// File format
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    main_timeout_secs: Option<u64>,
    health_timeout_secs: Option<u64>,
    sweep_interval_secs: Option<u64>,
    retry: Option<RetryPolicy>,
    #[serde(default)]
    providers: HashMap<String, ProviderOverrides>,
}
