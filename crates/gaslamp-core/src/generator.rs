//! Ports for the language-model and image providers.
//!
//! The domain crates depend only on these traits; the HTTP-backed
//! implementations live in `gaslamp-generators` and the deterministic
//! stand-ins in `gaslamp-test-support`.

use async_trait::async_trait;
use thiserror::Error;

/// Failure reaching or being served by an upstream generator.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The provider rejected our credentials.
    #[error("generator authentication failed: {0}")]
    AuthenticationFailed(String),
    /// The provider throttled the request.
    #[error("generator rate limited: {0}")]
    RateLimited(String),
    /// Any other non-success status from the provider.
    #[error("generator upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },
    /// The request never produced an HTTP response.
    #[error("generator transport error: {0}")]
    Transport(String),
    /// A successful status whose body did not match the provider's schema.
    #[error("generator returned an unintelligible response: {0}")]
    InvalidResponse(String),
    /// A successful response that carried no usable content.
    #[error("generator returned an empty response")]
    EmptyResponse,
}

impl GeneratorError {
    /// Classifies a non-success HTTP status from a provider.
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::AuthenticationFailed(body),
            429 => Self::RateLimited(body),
            _ => Self::Upstream {
                status,
                message: body,
            },
        }
    }
}

/// A language model that turns a prompt into prose or JSON text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}

/// An image model that turns a prompt into a hosted image URL.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn render(&self, prompt: &str) -> Result<String, GeneratorError>;
}
