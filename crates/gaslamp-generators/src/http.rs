//! Shared HTTP client construction for the generator providers.

use std::time::Duration;

use gaslamp_core::generator::GeneratorError;

/// How long we wait on any single provider call. Image rendering is the
/// slowest; two minutes covers it with room to spare.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Builds the `reqwest` client all providers share.
///
/// # Errors
///
/// Returns [`GeneratorError::Transport`] if the TLS backend cannot be
/// initialized.
pub fn build_http_client() -> Result<reqwest::Client, GeneratorError> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| GeneratorError::Transport(e.to_string()))
}
