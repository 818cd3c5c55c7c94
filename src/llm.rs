use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::agent::prompts;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Failure classes for a completion attempt. The composer treats every
/// variant the same way (fall back to documentation search); the split
/// exists for logging and tests.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("backend rejected the API credentials")]
    Unauthorized,
    #[error("backend quota exhausted")]
    QuotaExceeded,
    #[error("backend returned a response with no content")]
    EmptyResponse,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected backend failure: {0}")]
    Unknown(String),
}

/// A chat-style completion backend. Object-safe so the composer holds an
/// `Arc<dyn CompletionBackend>` and tests can substitute fakes.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// One non-streaming completion scoped to `context`. No retry here;
    /// recovery is the caller's job.
    async fn complete(&self, question: &str, context: &str) -> Result<String, GenerationError>;
}

pub struct LlmClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl LlmClient {
    /// Build from env vars. Returns `Ok(None)` when no backend is
    /// configured at all; the agent then answers from documentation alone.
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        use anyhow::Context;

        let base_url = dotenv::var("LLM_BASE_URL").ok().filter(|u| !u.is_empty());
        let api_key = dotenv::var("LLM_API_KEY").ok().filter(|k| !k.is_empty());
        if base_url.is_none() && api_key.is_none() {
            return Ok(None);
        }

        let base_url = base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string());
        let model = dotenv::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4".to_string());

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Some(Self {
            client,
            base_url,
            model,
            api_key,
        }))
    }

    /// Resolve the chat completions endpoint from the base URL.
    fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.ends_with("/chat/completions") {
            base.to_string()
        } else if base.ends_with("/v1") {
            format!("{}/chat/completions", base)
        } else {
            format!("{}/v1/chat/completions", base)
        }
    }

    /// Non-streaming chat completion with classified failures.
    async fn chat(&self, messages: &[Message]) -> Result<String, GenerationError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": 0.3,
            "max_tokens": 1500,
        });

        let mut req = self.client.post(self.endpoint()).json(&body);
        if let Some(key) = &self.api_key {
            req = req.header("Authorization", format!("Bearer {}", key));
        }

        let resp = req
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(classify_status(status.as_u16(), &text));
        }

        let json: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| GenerationError::Unknown(format!("unparseable response: {}", e)))?;

        // choices[0].message.content, tolerating null
        let content = json["choices"]
            .get(0)
            .and_then(|c| c["message"]["content"].as_str())
            .unwrap_or("");

        if content.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(content.to_string())
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    async fn complete(&self, question: &str, context: &str) -> Result<String, GenerationError> {
        let messages = vec![
            Message {
                role: "system".to_string(),
                content: prompts::system(context),
            },
            Message {
                role: "user".to_string(),
                content: prompts::user(question),
            },
        ];
        self.chat(&messages).await
    }
}

/// Map an HTTP failure onto the error taxonomy. Quota markers in the body
/// win over the status code; providers disagree on which status carries
/// them.
fn classify_status(status: u16, body: &str) -> GenerationError {
    if body.contains("insufficient_quota") {
        return GenerationError::QuotaExceeded;
    }
    match status {
        401 | 403 => GenerationError::Unauthorized,
        429 => GenerationError::QuotaExceeded,
        _ => GenerationError::Unknown(format!(
            "HTTP {}: {}",
            status,
            body.chars().take(200).collect::<String>()
        )),
    }
}
