//! Error types for sia.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! Two layers:
//! - [`ErrorKind`] - the provider-failure taxonomy. Every failed probe or
//!   live call is classified into exactly one kind. Kinds are recorded in
//!   the status store and absorbed by the fallback orchestrator; they never
//!   reach the caller of `analyze` as errors.
//! - [`SiaError`] - hard failures (configuration, I/O, client construction)
//!   that do propagate, plus a `Call` variant carrying an `ErrorKind` for
//!   the internal live-call boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Provider Failure Taxonomy
// =============================================================================

/// Classification of a failed provider probe or live call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Request exceeded its timeout and was aborted.
    Timeout,
    /// Credential rejected (HTTP 401/403).
    AuthError,
    /// Provider throttled the request (HTTP 429).
    RateLimit,
    /// Provider-side failure (HTTP 5xx).
    ServerError,
    /// Response body was not the expected envelope, or had no usable choice.
    ParseError,
    /// Transport-level failure (DNS, connect, TLS).
    NetworkError,
    /// Origin-policy rejection. Never produced by the native transport;
    /// retained for status-report parity with proxied deployments.
    CorsError,
    /// Endpoint path does not exist (HTTP 404).
    NotFound,
    /// Any other non-success HTTP status.
    HttpError,
    /// Unclassifiable failure.
    UnknownError,
}

impl ErrorKind {
    /// Classify a non-success HTTP status code.
    ///
    /// Pure and total: every status maps to exactly one kind.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::AuthError,
            429 => Self::RateLimit,
            404 => Self::NotFound,
            s if s >= 500 => Self::ServerError,
            _ => Self::HttpError,
        }
    }

    /// Stable wire label (matches the serde representation).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::AuthError => "auth_error",
            Self::RateLimit => "rate_limit",
            Self::ServerError => "server_error",
            Self::ParseError => "parse_error",
            Self::NetworkError => "network_error",
            Self::CorsError => "cors_error",
            Self::NotFound => "not_found",
            Self::HttpError => "http_error",
            Self::UnknownError => "unknown_error",
        }
    }

    /// User-facing message for this failure kind.
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::Timeout => "Request timed out. Please try again.",
            Self::AuthError => "Authentication failed. The API key may be invalid or expired.",
            Self::RateLimit => "Too many requests. Please wait a moment before trying again.",
            Self::ServerError => "Server error occurred. Please try again in a few moments.",
            Self::ParseError => "Failed to process the response. Please try again.",
            Self::NetworkError => {
                "Network connection failed. Please check your internet connection and try again."
            }
            Self::CorsError => "Cross-origin request blocked. Trying alternative connection method.",
            Self::NotFound => "The provider endpoint was not found.",
            Self::HttpError => "The provider returned an unexpected HTTP error.",
            Self::UnknownError => "An unexpected error occurred. Please try again or contact support.",
        }
    }

    /// Whether a failure of this kind is worth retrying on another attempt.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::NetworkError | Self::RateLimit | Self::ServerError
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure
    GeneralError = 1,
    /// Configuration or argument errors
    ConfigError = 2,
    /// Parse/format errors
    ParseError = 3,
    /// Timeout
    Timeout = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

// =============================================================================
// Hard Errors
// =============================================================================

/// Main error type for sia operations.
///
/// Provider-side failures are absorbed by the orchestrator and never
/// surface through this type from `analyze`; these variants cover the
/// paths that genuinely cannot continue.
#[derive(Error, Debug)]
pub enum SiaError {
    /// Configuration file or value problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// Error parsing the configuration file.
    #[error("config parse error at {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// Unknown provider name from CLI or config.
    #[error("invalid provider: {0}")]
    InvalidProvider(String),

    /// HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// A live call failed, classified by kind. Internal to the
    /// orchestrator's call boundary.
    #[error("call to {provider} failed: {kind}")]
    Call {
        provider: String,
        kind: ErrorKind,
        detail: Option<String>,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SiaError {
    /// Map error to a process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_)
            | Self::ConfigParse { .. }
            | Self::InvalidProvider(_) => ExitCode::ConfigError,

            Self::Json(_) => ExitCode::ParseError,

            Self::Call { kind, .. } => match kind {
                ErrorKind::Timeout => ExitCode::Timeout,
                ErrorKind::ParseError => ExitCode::ParseError,
                _ => ExitCode::GeneralError,
            },

            Self::ClientBuild(_) | Self::Io(_) | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// The failure kind, for call errors.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Call { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Construct a call error without detail text.
    #[must_use]
    pub fn call(provider: &str, kind: ErrorKind) -> Self {
        Self::Call {
            provider: provider.to_string(),
            kind,
            detail: None,
        }
    }

    /// Construct a call error with detail text.
    #[must_use]
    pub fn call_with_detail(provider: &str, kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self::Call {
            provider: provider.to_string(),
            kind,
            detail: Some(detail.into()),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SiaError>;
