//! Chat-completion wire types.
//!
//! Strict serde schema for the request body and the response envelope.
//! Any shape mismatch on receipt is a parse failure; there is no
//! optional-chaining-style tolerance for missing fields.

use serde::{Deserialize, Serialize};

/// One message in a chat-completion conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stream: bool,
}

impl ChatRequest {
    /// The fixed lightweight health-check payload.
    #[must_use]
    pub fn health_check(model: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage::system("You are a helpful assistant."),
                ChatMessage::user("Say 'API connection successful' if you can read this."),
            ],
            temperature: 0.1,
            max_tokens: 50,
            stream: false,
        }
    }

    /// A live analysis request: fixed system instruction plus user text.
    #[must_use]
    pub fn analysis(model: &str, system_prompt: &str, request: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(request),
            ],
            temperature: 0.7,
            max_tokens: 4000,
            stream: false,
        }
    }
}

/// Response envelope: `{ "choices": [{ "message": { "content": ... } }] }`.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

impl ChatResponse {
    /// Extract the first choice's content.
    ///
    /// Returns `None` when there are no choices or the content is empty;
    /// callers classify that as a parse failure.
    #[must_use]
    pub fn into_content(mut self) -> Option<String> {
        if self.choices.is_empty() {
            return None;
        }
        let content = self.choices.remove(0).message.content;
        if content.trim().is_empty() {
            None
        } else {
            Some(content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_expected_shape() {
        let req = ChatRequest::analysis("test-model", "be helpful", "my idea");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "test-model");
        assert_eq!(json["stream"], false);
        assert_eq!(json["max_tokens"], 4000);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "my idea");
    }

    #[test]
    fn health_check_is_bounded() {
        let req = ChatRequest::health_check("m");
        assert_eq!(req.max_tokens, 50);
        assert_eq!(req.messages.len(), 2);
        assert!((req.temperature - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn envelope_with_content_parses() {
        let json = r#"{"choices":[{"message":{"content":"Hello"}}]}"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.into_content().as_deref(), Some("Hello"));
    }

    #[test]
    fn envelope_without_choices_yields_none() {
        let json = r#"{"choices":[]}"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(resp.into_content().is_none());
    }

    #[test]
    fn envelope_with_blank_content_yields_none() {
        let json = r#"{"choices":[{"message":{"content":"   "}}]}"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(resp.into_content().is_none());
    }

    #[test]
    fn envelope_missing_message_is_a_parse_error() {
        let json = r#"{"choices":[{"index":0}]}"#;
        assert!(serde_json::from_str::<ChatResponse>(json).is_err());
    }
}
