use serde::{Deserialize, Serialize};

/// Body of an inbound `POST /chat` request.
/// `message` stays optional so that an absent or `null` field reaches the
/// relay as a validation failure instead of a deserialization error.
#[derive(Debug, Deserialize, Serialize)]
pub struct ChatRequest {
    pub message: Option<String>
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatResponse {
    pub response: String
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String
}

/// Payload sent to the completion endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CompletionResponse {
    // a 2xx body without choices is the soft-fallback case, not an error
    #[serde(default)]
    pub choices: Vec<Choice>
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Choice {
    pub message: ChatMessage
}
