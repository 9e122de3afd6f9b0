//! Provider descriptors and registry.
//!
//! Defines the chat-completion providers, their fixed priority order, and
//! the per-provider request shape (endpoint, model, credential, routing
//! headers, health-check payload).

use serde::{Deserialize, Serialize};

use crate::core::chat::ChatRequest;
use crate::core::config::AppConfig;
use crate::error::{Result, SiaError};

// =============================================================================
// Provider Enum
// =============================================================================

/// Supported chat-completion providers, one variant per remote endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// Primary text analysis.
    #[serde(rename = "cerebras")]
    Cerebras,
    /// Fallback text analysis via OpenRouter.
    #[serde(rename = "openrouter-text")]
    OpenRouterText,
    /// Last-resort analysis on OpenRouter's visual-tuned model.
    #[serde(rename = "openrouter-visual")]
    OpenRouterVisual,
}

impl Provider {
    /// All providers in fallback priority order: the orchestrator and the
    /// sweep both walk this list front to back.
    pub const PRIORITY: &'static [Self] =
        &[Self::Cerebras, Self::OpenRouterText, Self::OpenRouterVisual];

    /// Stable machine name (config keys, JSON output, log fields).
    #[must_use]
    pub const fn api_name(self) -> &'static str {
        match self {
            Self::Cerebras => "cerebras",
            Self::OpenRouterText => "openrouter-text",
            Self::OpenRouterVisual => "openrouter-visual",
        }
    }

    /// Display name for human output.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cerebras => "Cerebras",
            Self::OpenRouterText => "OpenRouter Text",
            Self::OpenRouterVisual => "OpenRouter Visual",
        }
    }

    /// What this provider is for, shown in status output.
    #[must_use]
    pub const fn purpose(self) -> &'static str {
        match self {
            Self::Cerebras => "Primary analysis",
            Self::OpenRouterText => "Fallback analysis",
            Self::OpenRouterVisual => "Limited analysis",
        }
    }

    /// Default chat-completions endpoint.
    #[must_use]
    pub const fn default_endpoint(self) -> &'static str {
        match self {
            Self::Cerebras => "https://api.cerebras.ai/v1/chat/completions",
            Self::OpenRouterText | Self::OpenRouterVisual => {
                "https://openrouter.ai/api/v1/chat/completions"
            }
        }
    }

    /// Default model identifier.
    #[must_use]
    pub const fn default_model(self) -> &'static str {
        match self {
            Self::Cerebras => "llama3.1-70b",
            Self::OpenRouterText => "meta-llama/llama-3.1-70b-instruct",
            Self::OpenRouterVisual => "meta-llama/llama-4-scout",
        }
    }

    /// Environment variable consulted for this provider's API key.
    #[must_use]
    pub const fn api_key_env(self) -> &'static str {
        match self {
            Self::Cerebras => "SIA_CEREBRAS_API_KEY",
            Self::OpenRouterText => "SIA_OPENROUTER_TEXT_API_KEY",
            Self::OpenRouterVisual => "SIA_OPENROUTER_VISUAL_API_KEY",
        }
    }

    /// Provider-specific routing headers sent with every request.
    #[must_use]
    pub const fn routing_headers(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Cerebras => &[],
            Self::OpenRouterText | Self::OpenRouterVisual => &[
                ("HTTP-Referer", "https://acta.so"),
                ("X-Title", "Startup Idea Analyzer"),
            ],
        }
    }

    /// Parse from a CLI argument or config key.
    pub fn from_api_name(name: &str) -> Result<Self> {
        let lower = name.to_lowercase();
        Self::PRIORITY
            .iter()
            .find(|p| p.api_name() == lower)
            .copied()
            .ok_or_else(|| SiaError::InvalidProvider(name.to_string()))
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.api_name())
    }
}

// =============================================================================
// Provider Descriptor
// =============================================================================

/// Resolved, immutable definition of one provider endpoint.
#[derive(Debug, Clone)]
pub struct ProviderDescriptor {
    pub id: Provider,
    /// Full chat-completions URL.
    pub endpoint: String,
    /// Model identifier sent in the request body.
    pub model: String,
    /// Bearer credential. `None` sends no Authorization header; the
    /// provider will reject the probe and the store records it offline.
    pub api_key: Option<String>,
    /// Extra routing headers.
    pub headers: &'static [(&'static str, &'static str)],
}

impl ProviderDescriptor {
    /// Descriptor with the provider's built-in endpoint and model.
    #[must_use]
    pub fn new(id: Provider, endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            id,
            endpoint: endpoint.into(),
            model: id.default_model().to_string(),
            api_key,
            headers: id.routing_headers(),
        }
    }

    /// The fixed health-check payload for this provider.
    #[must_use]
    pub fn health_check_body(&self) -> ChatRequest {
        ChatRequest::health_check(&self.model)
    }

    /// Attach the credential and routing headers to a request.
    #[must_use]
    pub fn apply_headers(&self, mut req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }
        for (name, value) in self.headers {
            req = req.header(*name, *value);
        }
        req
    }
}

// =============================================================================
// Provider Registry
// =============================================================================

/// The fixed set of provider descriptors, consulted in priority order.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    descriptors: Vec<ProviderDescriptor>,
}

impl ProviderRegistry {
    /// Build the registry from resolved configuration.
    ///
    /// Credentials resolve env var first, then the config file value.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let descriptors = Provider::PRIORITY
            .iter()
            .map(|&provider| {
                let overrides = config.provider_overrides(provider);
                let endpoint = overrides
                    .and_then(|o| o.endpoint.clone())
                    .unwrap_or_else(|| provider.default_endpoint().to_string());
                let model = overrides
                    .and_then(|o| o.model.clone())
                    .unwrap_or_else(|| provider.default_model().to_string());
                let api_key = std::env::var(provider.api_key_env())
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .or_else(|| overrides.and_then(|o| o.api_key.clone()));
                if api_key.is_none() {
                    tracing::warn!(
                        provider = provider.api_name(),
                        env = provider.api_key_env(),
                        "no API key configured, provider will probe offline"
                    );
                }
                ProviderDescriptor {
                    id: provider,
                    endpoint,
                    model,
                    api_key,
                    headers: provider.routing_headers(),
                }
            })
            .collect();
        Self { descriptors }
    }

    /// Registry from explicit descriptors (kept in the given order).
    #[must_use]
    pub const fn with_descriptors(descriptors: Vec<ProviderDescriptor>) -> Self {
        Self { descriptors }
    }

    /// Get the descriptor for a provider.
    #[must_use]
    pub fn get(&self, provider: Provider) -> Option<&ProviderDescriptor> {
        self.descriptors.iter().find(|d| d.id == provider)
    }

    /// Descriptors in fallback priority order.
    pub fn iter_priority(&self) -> impl Iterator<Item = &ProviderDescriptor> {
        Provider::PRIORITY.iter().filter_map(|&p| self.get(p))
    }
}
