use serde_json::{json, Value};
use std::time::Duration;

use super::{AiError, AiRequest, AiResponse, Completer};
use crate::config::AppConfig;

const API_VERSION: &str = "2023-06-01";

/// Anthropic Messages API client.
#[derive(Debug, Clone)]
pub struct Anthropic {
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
    timeout: Duration,
}

impl Anthropic {
    /// Build a client from config. Returns `None` when no credential is set.
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        let api_key = config.api_key()?;
        Some(Anthropic {
            api_key: api_key.to_string(),
            base_url: config.anthropic_base_url.trim_end_matches('/').to_string(),
            model: config.anthropic_model.clone(),
            max_tokens: config.anthropic_max_tokens,
            timeout: Duration::from_secs(config.anthropic_timeout_secs),
        })
    }

    fn url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    fn body(&self, req: &AiRequest) -> Value {
        let mut body = json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "messages": [
                {"role": "user", "content": req.prompt}
            ]
        });
        if !req.system.is_empty() {
            body["system"] = json!(req.system);
        }
        body
    }
}

/// Pull the first text block out of a Messages API reply.
pub fn reply_text(json: &Value) -> Option<String> {
    json.get("content")
        .and_then(|c| c.as_array())
        .and_then(|blocks| {
            blocks.iter().find(|b| {
                b.get("type").and_then(|t| t.as_str()).unwrap_or("text") == "text"
            })
        })
        .and_then(|b| b.get("text"))
        .and_then(|t| t.as_str())
        .map(|t| t.to_string())
}

impl Completer for Anthropic {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn complete(&self, req: &AiRequest) -> Result<AiResponse, AiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| AiError(format!("HTTP client error: {}", e)))?;

        let resp = client
            .post(self.url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("Content-Type", "application/json")
            .json(&self.body(req))
            .send()
            .map_err(|e| AiError(format!("Anthropic request failed: {}", e)))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            return Err(AiError(format!("Anthropic returned {}: {}", status, text)));
        }

        let json: Value = resp
            .json()
            .map_err(|e| AiError(format!("Anthropic JSON parse error: {}", e)))?;

        let text = reply_text(&json)
            .ok_or_else(|| AiError("Anthropic reply has no text content".into()))?;

        Ok(AiResponse {
            text,
            provider: self.name().into(),
            model: self.model.clone(),
        })
    }
}
