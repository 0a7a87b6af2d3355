//! OpenAI chat-completions provider — the narrative voice.

use async_trait::async_trait;
use serde::Deserialize;

use gaslamp_core::generator::{GeneratorError, TextGenerator};

/// Default OpenAI API endpoint.
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI-backed text generator. The persona travels as the system message
/// on every call; the per-call prompt is the user message.
pub struct OpenAiGenerator {
    client: reqwest::Client,
    api_key: String,
    model: String,
    persona: String,
}

impl OpenAiGenerator {
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
            "messages": [
                {"role": "system", "content": self.persona},
                {"role": "user", "content": prompt}
            ]
        })
    }

    fn parse_response(body: &str) -> Result<String, GeneratorError> {
        let response: ChatCompletionResponse =
            serde_json::from_str(body).map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GeneratorError::EmptyResponse)
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
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
            tracing::warn!(status, "narrative provider returned an error");
            return Err(GeneratorError::from_status(status, body));
        }

        Self::parse_response(&body)
    }
}

/// Chat-completions response format, reduced to what we read.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}
