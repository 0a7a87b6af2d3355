//! Server configuration read from the environment at startup.

use crate::error::AppError;

/// Default text model for the narrative voice.
const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1";
/// Default text model for the analytic voice.
const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";
/// Default image model for scene illustrations.
const DEFAULT_FAL_MODEL: &str = "fal-ai/flux/schnell";

/// Everything the server needs from its environment, resolved once at
/// startup so a missing variable fails fast with a named error instead of
/// surfacing mid-request.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Credential for the narrative provider.
    pub openai_api_key: String,
    /// Credential for the analytic provider.
    pub anthropic_api_key: String,
    /// Credential for the image provider. Absent disables illustration;
    /// cases and questioning still work, scenes degrade to none.
    pub fal_key: Option<String>,
    /// Narrative model name.
    pub openai_model: String,
    /// Analytic model name.
    pub anthropic_model: String,
    /// Image model name.
    pub fal_model: String,
}

impl ApiConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] naming the first variable that is
    /// missing or unparsable.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            get(name).ok_or_else(|| AppError::Config(format!("{name} must be set")))
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 8001,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_owned()),
            port,
            openai_api_key: required("OPENAI_API_KEY")?,
            anthropic_api_key: required("ANTHROPIC_API_KEY")?,
            fal_key: get("FAL_KEY"),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_owned()),
            anthropic_model: get("ANTHROPIC_MODEL")
                .unwrap_or_else(|| DEFAULT_ANTHROPIC_MODEL.to_owned()),
            fal_model: get("FAL_MODEL").unwrap_or_else(|| DEFAULT_FAL_MODEL.to_owned()),
        })
    }
}
