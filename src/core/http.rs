//! HTTP client utilities.
//!
//! Provides the configured clients shared by the prober and the live-call
//! path. Two timeout tiers: health probes are bounded tighter than live
//! analysis calls.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::error::{Result, SiaError};

/// Timeout for live analysis calls.
pub const MAIN_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for health-check probes.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(10);

/// Build a configured HTTP client.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn build_client(timeout: Duration) -> Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(format!("sia/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| SiaError::ClientBuild(e.to_string()))
}
