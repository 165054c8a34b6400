//! Generative rephrasing of rendered sentences.
//!
//! When enabled, the deterministic sentence is offered to a local
//! Ollama-style endpoint for a friendlier phrasing. The caller falls back
//! to the deterministic sentence on any error; a rewrite failure can never
//! fail a request.

use crate::config::RewriteConfig;
use std::time::Duration;
use voicemon_common::MetricCategory;

#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("rewriter returned empty text")]
    Empty,
}

pub struct SpeechRewriter {
    config: RewriteConfig,
    client: reqwest::Client,
}

impl SpeechRewriter {
    pub fn new(config: RewriteConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Ask the model for a rephrased sentence.
    pub async fn rewrite(
        &self,
        category: MetricCategory,
        sentence: &str,
    ) -> Result<String, RewriteError> {
        let prompt = format!(
            "Rephrase this {} status line as one short friendly spoken sentence. \
             Keep every number exactly as written. Reply with the sentence only.\n\n{}",
            category.as_str(),
            sentence
        );

        let url = format!("{}/api/generate", self.config.endpoint);
        let body = serde_json::json!({
            "model": self.config.model,
            "prompt": prompt,
            "stream": false,
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| RewriteError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RewriteError::Http(format!("HTTP {}", response.status())));
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RewriteError::InvalidResponse(e.to_string()))?;

        let text = value
            .get("response")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .trim()
            .to_string();

        if text.is_empty() {
            return Err(RewriteError::Empty);
        }

        Ok(text)
    }
}
