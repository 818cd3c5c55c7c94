//! Request/response contract for external chat frontends.
//!
//! Any HTTP layer (or other transport) calls `handle` with the decoded
//! JSON payload; only malformed input comes back as a structured failure.
//! Everything downstream of validation degrades inside the agent itself.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::agent::SuperLeeAgent;

#[derive(Debug, Serialize)]
pub struct AskSuccess {
    pub response: String,
    /// ISO-8601 UTC, millisecond precision.
    pub timestamp: String,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct AskFailure {
    pub error: String,
    pub details: String,
    pub success: bool,
}

/// The only error that crosses this boundary as a structured failure.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Message is required and must be a string")]
    InvalidInput,
}

/// Validate an incoming `{ "message": ... }` payload and run the agent.
pub async fn handle(agent: &SuperLeeAgent, payload: &Value) -> Result<AskSuccess, AskFailure> {
    let Some(message) = payload.get("message").and_then(Value::as_str) else {
        let err = RequestError::InvalidInput;
        return Err(AskFailure {
            error: "Invalid request".to_string(),
            details: err.to_string(),
            success: false,
        });
    };

    let answer = agent.answer_question(message.trim()).await;

    Ok(AskSuccess {
        response: answer.text,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        success: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{CorpusStore, Knowledge};
    use chrono::DateTime;
    use serde_json::json;

    fn agent() -> SuperLeeAgent {
        let corpus = CorpusStore::new();
        let knowledge = Knowledge::Synthesized(corpus.combined_text());
        SuperLeeAgent::new(corpus, knowledge, None)
    }

    #[tokio::test]
    async fn test_missing_message_is_invalid_input() {
        let failure = handle(&agent(), &json!({})).await.unwrap_err();
        assert!(!failure.success);
        assert_eq!(failure.details, "Message is required and must be a string");
    }

    #[tokio::test]
    async fn test_non_string_message_is_invalid_input() {
        let failure = handle(&agent(), &json!({ "message": 42 })).await.unwrap_err();
        assert!(!failure.success);
    }

    #[tokio::test]
    async fn test_valid_message_returns_timestamped_answer() {
        let payload = json!({ "message": "What is Story Protocol?" });
        let success = handle(&agent(), &payload).await.unwrap();
        assert!(success.success);
        assert!(success
            .response
            .starts_with("Story Protocol is the world's IP blockchain"));
        assert!(DateTime::parse_from_rfc3339(&success.timestamp).is_ok());
    }
}
