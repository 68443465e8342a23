use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::{json, Value};

use super::{GenerationError, PlanGenerator};
use crate::config::GeminiConfig;

/// Google Gemini `generateContent` client. One request per prompt; no retry,
/// streaming or response checks.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        if config.api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY is not set; plan generation requests will be unauthenticated");
        }

        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn headers(&self) -> Result<HeaderMap, GenerationError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = &self.config.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|_| GenerationError("Invalid API key header".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

pub(crate) fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }]
    })
}

#[async_trait]
impl PlanGenerator for GeminiClient {
    async fn generate_plan(&self, prompt: &str) -> Result<Value, GenerationError> {
        tracing::debug!("Requesting plan from {}", self.config.endpoint);

        let resp = self
            .client
            .post(&self.config.endpoint)
            .headers(self.headers()?)
            .json(&request_body(prompt))
            .send()
            .await
            .map_err(|e| GenerationError(format!("Failed to send request: {}", e)))?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            let text = resp.text().await.unwrap_or_default();
            tracing::warn!("Gemini returned {}", status);
            if text.trim().is_empty() {
                return Err(GenerationError(format!("Gemini returned {}", status)));
            }
            return Err(GenerationError(text));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| GenerationError(format!("Failed to parse response: {}", e)))
    }
}
