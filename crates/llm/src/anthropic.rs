//! Anthropic Messages API client.
//!
//! Wraps `POST /v1/messages` using [`reqwest`]. One request per
//! completion; the configured timeout bounds the whole call.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::completion::{ChatCompletion, ConversationTurn, TurnRole};
use crate::config::LlmConfig;
use crate::error::LlmError;

/// API version header value sent with every request.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// HTTP client for the Anthropic Messages API.
pub struct AnthropicClient {
    client: reqwest::Client,
    config: LlmConfig,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [ConversationTurn],
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicClient {
    /// Build a client whose requests time out after `config.timeout_secs`.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url)
    }

    /// Ensure the response has a success status code.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, LlmError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

/// The provider requires the conversation to open with a user turn.
fn leading_user_turns(conversation: &[ConversationTurn]) -> &[ConversationTurn] {
    let skip = conversation
        .iter()
        .take_while(|t| t.role == TurnRole::Assistant)
        .count();
    &conversation[skip..]
}

/// Concatenate the text blocks of a reply.
fn reply_text(response: MessagesResponse) -> Result<String, LlmError> {
    let text: String = response
        .content
        .into_iter()
        .filter(|block| block.kind == "text")
        .filter_map(|block| block.text)
        .collect();

    if text.trim().is_empty() {
        return Err(LlmError::EmptyResponse);
    }
    Ok(text)
}

#[async_trait]
impl ChatCompletion for AnthropicClient {
    async fn complete(
        &self,
        system_prompt: &str,
        conversation: &[ConversationTurn],
    ) -> Result<String, LlmError> {
        let api_key = self.config.api_key.as_deref().ok_or(LlmError::NotConfigured)?;

        let body = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            system: system_prompt,
            messages: leading_user_turns(conversation),
        };

        tracing::debug!(
            model = %self.config.model,
            turns = body.messages.len(),
            "Sending completion request",
        );

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let parsed = response.json::<MessagesResponse>().await?;
        reply_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_messages_api_shape() {
        let turns = vec![
            ConversationTurn::user("Hi"),
            ConversationTurn::assistant("Hello!"),
            ConversationTurn::user("How do I plan for tonight?"),
        ];
        let body = MessagesRequest {
            model: "claude-3-5-sonnet-20241022",
            max_tokens: 1024,
            system: "You are Aura.",
            messages: &turns,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "claude-3-5-sonnet-20241022");
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["system"], "You are Aura.");
        assert_eq!(json["messages"][1]["role"], "assistant");
        assert_eq!(json["messages"][2]["content"], "How do I plan for tonight?");
    }

    #[test]
    fn leading_assistant_turns_are_dropped() {
        let turns = vec![
            ConversationTurn::assistant("earlier reply"),
            ConversationTurn::user("question"),
            ConversationTurn::assistant("answer"),
        ];
        let trimmed = leading_user_turns(&turns);
        assert_eq!(trimmed.len(), 2);
        assert_eq!(trimmed[0].role, TurnRole::User);
    }

    #[test]
    fn reply_joins_text_blocks_only() {
        let raw = r#"{
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [
                {"type": "text", "text": "[Alex] I hear you. "},
                {"type": "tool_use", "id": "t1", "name": "x", "input": {}},
                {"type": "text", "text": "You're not alone."}
            ],
            "stop_reason": "end_turn"
        }"#;
        let parsed: MessagesResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            reply_text(parsed).unwrap(),
            "[Alex] I hear you. You're not alone."
        );
    }

    #[test]
    fn blank_reply_is_an_error() {
        let parsed: MessagesResponse =
            serde_json::from_str(r#"{"content": [{"type": "text", "text": "  "}]}"#).unwrap();
        assert!(matches!(reply_text(parsed), Err(LlmError::EmptyResponse)));

        let parsed: MessagesResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(reply_text(parsed), Err(LlmError::EmptyResponse)));
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let client = AnthropicClient::new(LlmConfig {
            api_key: None,
            base_url: "http://127.0.0.1:9".to_string(),
            model: "test".to_string(),
            max_tokens: 16,
            timeout_secs: 1,
        })
        .unwrap();

        let result = client
            .complete("system", &[ConversationTurn::user("hi")])
            .await;
        assert!(matches!(result, Err(LlmError::NotConfigured)));
    }
}
