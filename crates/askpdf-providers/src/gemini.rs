//! Gemini API client.
//!
//! Talks to the Google Generative Language REST API. Gemini authenticates
//! with a `?key=` query parameter rather than a bearer header.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use askpdf_core::config::AskPdfConfig;
use askpdf_core::error::{AskPdfError, Result};
use askpdf_core::traits::{Embedder, Generator};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for Gemini embedding and generation endpoints.
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    embedding_model: String,
    generation_model: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: &AskPdfConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AskPdfError::Http(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: DEFAULT_BASE_URL.to_string(),
            embedding_model: config.embedding_model.clone(),
            generation_model: config.generation_model.clone(),
            client,
        })
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// POST `body` to `models/{model}:{action}` and return the response JSON.
    async fn post(&self, model: &str, action: &str, body: &Value) -> Result<Value> {
        if self.api_key.is_empty() {
            return Err(AskPdfError::ApiKeyMissing("gemini".into()));
        }

        let url = format!(
            "{}/models/{}:{}?key={}",
            self.base_url, model, action, self.api_key
        );

        tracing::debug!("→ gemini {model}:{action}");

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                AskPdfError::Http(format!("gemini connection failed ({model}:{action}): {e}"))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(AskPdfError::Provider(format!(
                "gemini API error {status}: {text}"
            )));
        }

        resp.json()
            .await
            .map_err(|e| AskPdfError::Http(e.to_string()))
    }
}

#[async_trait]
impl Embedder for GeminiClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let body = json!({
            "content": { "parts": [{ "text": text }] }
        });
        let json = self.post(&self.embedding_model, "embedContent", &body).await?;
        parse_embedding(&json)
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        let json = self
            .post(&self.generation_model, "generateContent", &body)
            .await?;
        parse_generation(&json)
    }
}

/// Pull the vector out of an `embedContent` response.
fn parse_embedding(json: &Value) -> Result<Vec<f32>> {
    let values = json["embedding"]["values"]
        .as_array()
        .ok_or_else(|| AskPdfError::Provider("No embedding values in response".into()))?;

    values
        .iter()
        .map(|v| {
            v.as_f64()
                .map(|f| f as f32)
                .ok_or_else(|| AskPdfError::Provider("Non-numeric embedding value".into()))
        })
        .collect()
}

/// Pull the completion text out of a `generateContent` response.
///
/// A candidate's content may span several parts; they are concatenated.
fn parse_generation(json: &Value) -> Result<String> {
    let candidate = json["candidates"]
        .get(0)
        .ok_or_else(|| AskPdfError::Provider("No candidates in response".into()))?;

    let parts = candidate["content"]["parts"]
        .as_array()
        .ok_or_else(|| AskPdfError::Provider("No content parts in response".into()))?;

    let text: String = parts
        .iter()
        .filter_map(|p| p["text"].as_str())
        .collect();

    Ok(text)
}
