//! fal.ai provider — renders crime-scene and testimony illustrations.

use async_trait::async_trait;
use serde::Deserialize;

use gaslamp_core::generator::{GeneratorError, ImageGenerator};

/// fal.ai-backed image generator, calling the synchronous `fal.run`
/// endpoint for the configured model.
pub struct FalImageGenerator {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl FalImageGenerator {
    /// `model` is a fal.ai model path such as `fal-ai/flux/schnell`.
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        api_key: impl Into<String>,
        model: &str,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            endpoint: format!("https://fal.run/{model}"),
        }
    }

    fn build_request_body(prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "prompt": prompt,
            "image_size": "landscape_4_3",
            "num_images": 1
        })
    }

    fn parse_response(body: &str) -> Result<String, GeneratorError> {
        let response: FalResponse =
            serde_json::from_str(body).map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;
        response
            .images
            .into_iter()
            .next()
            .map(|image| image.url)
            .filter(|url| !url.is_empty())
            .ok_or(GeneratorError::EmptyResponse)
    }
}

#[async_trait]
impl ImageGenerator for FalImageGenerator {
    async fn render(&self, prompt: &str) -> Result<String, GeneratorError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Key {}", self.api_key))
            .json(&Self::build_request_body(prompt))
            .send()
            .await
            .map_err(|e| GeneratorError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GeneratorError::Transport(e.to_string()))?;

        if status != 200 {
            tracing::warn!(status, "image provider returned an error");
            return Err(GeneratorError::from_status(status, body));
        }

        Self::parse_response(&body)
    }
}

/// fal.run response format, reduced to what we read.
#[derive(Debug, Deserialize)]
struct FalResponse {
    images: Vec<FalImage>,
}

#[derive(Debug, Deserialize)]
struct FalImage {
    url: String,
}
