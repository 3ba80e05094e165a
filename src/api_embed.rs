//! Embedding provider for OpenAI-compatible `/embeddings` endpoints.
//!
//! Works against api.openai.com as well as local servers that speak the same
//! protocol (text-embeddings-inference, Ollama, llama.cpp). Requests are blocking and
//! are never retried here; a failed call surfaces as `EmbeddingFailed`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::VecEmbedder;
use crate::{Result, SemsearchError};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "text-embedding-3-small";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for an OpenAI-compatible embedding endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenAIConfig {
    /// Bearer token. Empty for local servers without auth.
    #[serde(default)]
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl OpenAIConfig {
    /// Resolve settings from `OPENAI_API_KEY`, `OPENAI_BASE_URL` and
    /// `SEMSEARCH_EMBED_MODEL`, falling back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            base_url: std::env::var("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            model: std::env::var("SEMSEARCH_EMBED_MODEL").unwrap_or(defaults.model),
            timeout_secs: defaults.timeout_secs,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/embeddings", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<f32>,
}

pub struct OpenAIEmbedder {
    config: OpenAIConfig,
    client: reqwest::blocking::Client,
}

impl OpenAIEmbedder {
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        if config.model.trim().is_empty() {
            return Err(SemsearchError::InvalidConfig {
                reason: "embedding model name is empty".into(),
            });
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| SemsearchError::InvalidConfig {
                reason: format!("failed to build HTTP client: {err}"),
            })?;
        Ok(Self { config, client })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(OpenAIConfig::from_env())
    }
}

impl VecEmbedder for OpenAIEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut request = self.client.post(self.config.endpoint()).json(&EmbeddingsRequest {
            model: &self.config.model,
            input: text,
        });
        if !self.config.api_key.is_empty() {
            request = request.bearer_auth(&self.config.api_key);
        }

        let response = request
            .send()
            .map_err(|err| SemsearchError::embedding(format!("request failed: {err}")))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(
                target = "semsearch::embed",
                status = status.as_u16(),
                model = %self.config.model,
                "embedding endpoint returned an error"
            );
            return Err(SemsearchError::embedding(format!(
                "endpoint returned {status}: {body}"
            )));
        }

        let parsed: EmbeddingsResponse = response
            .json()
            .map_err(|err| SemsearchError::embedding(format!("malformed response: {err}")))?;
        parsed
            .data
            .into_iter()
            .next()
            .map(|datum| datum.embedding)
            .ok_or_else(|| SemsearchError::embedding("response contained no embeddings"))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
