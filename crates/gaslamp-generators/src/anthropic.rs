//! Anthropic messages provider — the analytic voice.

use async_trait::async_trait;
use serde::Deserialize;

use gaslamp_core::generator::{GeneratorError, TextGenerator};

/// Default Anthropic API endpoint.
const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Current API version.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Upper bound on reply length. Validation verdicts are a single word;
/// evidence analyses run to a few pages.
const MAX_TOKENS: u32 = 4096;

/// Anthropic-backed text generator. The persona travels as the system
/// field on every call; the per-call prompt is the user message.
pub struct AnthropicGenerator {
    client: reqwest::Client,
    api_key: String,
    model: String,
    persona: String,
}

impl AnthropicGenerator {
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        api_key: impl Into<String>,
        model: impl Into<String>,
        persona: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            persona: persona.into(),
        }
    }

    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "system": self.persona,
            "messages": [
                {"role": "user", "content": prompt}
            ]
        })
    }

    fn parse_response(body: &str) -> Result<String, GeneratorError> {
        let response: MessagesResponse =
            serde_json::from_str(body).map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;
        response
            .content
            .into_iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .filter(|text| !text.trim().is_empty())
            .ok_or(GeneratorError::EmptyResponse)
    }
}

#[async_trait]
impl TextGenerator for AnthropicGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&self.build_request_body(prompt))
            .send()
            .await
            .map_err(|e| GeneratorError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GeneratorError::Transport(e.to_string()))?;

        if status != 200 {
            tracing::warn!(status, "analytic provider returned an error");
            return Err(GeneratorError::from_status(status, body));
        }

        Self::parse_response(&body)
    }
}

/// Messages API response format, reduced to what we read.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_http_client;

    fn test_generator() -> AnthropicGenerator {
        AnthropicGenerator::new(
            build_http_client().unwrap(),
            "test-key",
            "claude-sonnet-4-20250514",
            "Be a logician",
        )
    }

    #[test]
    fn test_request_body_carries_system_and_user_message() {
        let generator = test_generator();

        let body = generator.build_request_body("Check this draft");

        assert_eq!(body["model"], "claude-sonnet-4-20250514");
        assert_eq!(body["system"], "Be a logician");
        assert_eq!(body["max_tokens"], MAX_TOKENS);
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "Check this draft");
    }

    #[test]
    fn test_parses_first_text_block() {
        let body = r#"{"content": [{"type": "text", "text": "VALID"}]}"#;
        assert_eq!(AnthropicGenerator::parse_response(body).unwrap(), "VALID");
    }

    #[test]
    fn test_skips_non_text_blocks() {
        let body = r#"{"content": [{"type": "thinking", "thinking": "hmm"}, {"type": "text", "text": "after thought"}]}"#;
        assert_eq!(
            AnthropicGenerator::parse_response(body).unwrap(),
            "after thought"
        );
    }

    #[test]
    fn test_no_text_block_is_empty_response() {
        let body = r#"{"content": []}"#;
        assert!(matches!(
            AnthropicGenerator::parse_response(body),
            Err(GeneratorError::EmptyResponse)
        ));
    }

    #[test]
    fn test_unintelligible_body_is_invalid_response() {
        assert!(matches!(
            AnthropicGenerator::parse_response("not json"),
            Err(GeneratorError::InvalidResponse(_))
        ));
    }
}
