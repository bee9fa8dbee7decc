use reqwest::Client;
use thiserror::Error;
use tracing::{error, info};

use crate::client::call_completion;
use crate::config::{Config, SYSTEM_PROMPT};
use crate::models::{ChatMessage, CompletionRequest, CompletionResponse};

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 800;

/// Text returned with a 200 when the API answers without any choices.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I'm unable to provide a response at the moment. Please try again shortly.";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("OpenRouter API key not configured")]
    MissingApiKey,

    #[error("no message content provided")]
    EmptyMessage,

    #[error("completion request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Outcome of a successful relay round trip. The fallback is still a 200
/// towards the caller, it is only kept apart for metrics and logging.
#[derive(Debug, PartialEq)]
pub enum Reply {
    Answer(String),
    Fallback,
}

impl Reply {
    pub fn into_text(self) -> String {
        match self {
            Reply::Answer(text) => text,
            Reply::Fallback => FALLBACK_REPLY.to_string(),
        }
    }
}

pub fn build_completion_request(config: &Config, user_message: &str) -> CompletionRequest {

    let messages = vec![
        ChatMessage {
            role: "system".to_string(),
            content: SYSTEM_PROMPT.to_string()
        },
        ChatMessage {
            role: "user".to_string(),
            content: user_message.to_string()
        },
    ];

    CompletionRequest {
        model: config.model.clone(),
        messages,
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS
    }

}

pub fn extract_reply(result: CompletionResponse) -> Reply {
    match result.choices.into_iter().next() {
        Some(choice) => Reply::Answer(choice.message.content),
        None => {
            error!("completion response carried no choices, using fallback reply");
            Reply::Fallback
        }
    }
}

/// Run one chat round trip: validate, call the completion endpoint, extract
/// the assistant text. Validation failures never reach the network.
pub async fn generate_reply(
    client: &Client,
    config: &Config,
    message: Option<&str>
) -> Result<Reply, RelayError> {

    let api_key = config.api_key.as_deref().ok_or(RelayError::MissingApiKey)?;

    let message = match message {
        Some(m) if !m.is_empty() => m,
        _ => return Err(RelayError::EmptyMessage),
    };

    let request = build_completion_request(config, message);

    info!(model = %config.model, "sending completion request");
    let result = call_completion(client, api_key, &config.api_url, &request).await?;
    info!("received completion response");

    Ok(extract_reply(result))

}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::models::Choice;

    fn test_config() -> Config {
        Config {
            api_key: Some("test-key".to_string()),
            model: "test-model".to_string(),
            api_url: "http://127.0.0.1:1/v1/chat/completions".to_string()
        }
    }

    #[test]
    fn test_payload_carries_persona_and_tuning() {

        let request = build_completion_request(&test_config(), "What is suffering?");

        assert_eq!(request.model, "test-model");
        assert_eq!(request.temperature, TEMPERATURE);
        assert_eq!(request.max_tokens, MAX_TOKENS);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.messages[1].content, "What is suffering?");

    }

    #[test]
    fn test_extract_reply_returns_first_choice() {

        let result = CompletionResponse {
            choices: vec![Choice {
                message: ChatMessage {
                    role: "assistant".to_string(),
                    content: "Breathe, and begin again.".to_string()
                }
            }]
        };

        assert_eq!(
            extract_reply(result).into_text(),
            "Breathe, and begin again."
        );

    }

    #[test]
    fn test_extract_reply_falls_back_on_empty_choices() {

        let result = CompletionResponse { choices: vec![] };

        let reply = extract_reply(result);
        assert_eq!(reply, Reply::Fallback);
        assert_eq!(reply.into_text(), FALLBACK_REPLY);

    }

    #[tokio::test]
    async fn test_missing_key_and_empty_message_fail_before_any_network_call() {

        let client = Client::new();

        // api_url is unroutable, so reaching the network would error differently
        let no_key = Config { api_key: None, ..test_config() };
        let err = generate_reply(&client, &no_key, Some("hello")).await.unwrap_err();
        assert!(matches!(err, RelayError::MissingApiKey));

        let config = test_config();
        for message in [None, Some("")] {
            let err = generate_reply(&client, &config, message).await.unwrap_err();
            assert!(matches!(err, RelayError::EmptyMessage));
        }

    }

}
