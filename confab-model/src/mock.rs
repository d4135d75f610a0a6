//! Canned-response model for testing consumers of the `ChatModel` trait
//! without AWS access.

use confab_core::{ChatModel, ChatRequest, ChatResponse, Message, Result};
use async_trait::async_trait;

pub struct MockChatModel {
    model_id: String,
    response: ChatResponse,
}

impl MockChatModel {
    /// Create a mock that answers every request with `text`.
    pub fn new(model_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            response: ChatResponse::new(Message::assistant(text)),
        }
    }

    /// Replace the canned response, consuming and returning `self`.
    pub fn with_response(mut self, response: ChatResponse) -> Self {
        self.response = response;
        self
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn complete(&self, _request: ChatRequest) -> Result<ChatResponse> {
        Ok(self.response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confab_core::StopReason;
    use std::sync::Arc;

    #[test]
    fn test_mock_model_id() {
        let mock = MockChatModel::new("mock-model", "hi");
        assert_eq!(mock.model_id(), "mock-model");
    }

    #[tokio::test]
    async fn test_mock_complete_through_trait_object() {
        let mock: Arc<dyn ChatModel> = Arc::new(MockChatModel::new("mock-model", "canned answer"));

        let request = ChatRequest::new(vec![Message::user("anything")]);
        let response = mock.complete(request).await.unwrap();
        assert_eq!(response.text(), "canned answer");
        assert_eq!(response.stop_reason, StopReason::EndTurn);
    }

    #[tokio::test]
    async fn test_mock_custom_response() {
        let mut response = ChatResponse::new(Message::assistant("cut short"));
        response.stop_reason = StopReason::MaxTokens;
        let mock = MockChatModel::new("mock-model", "ignored").with_response(response);

        let out = mock.complete(ChatRequest::default()).await.unwrap();
        assert_eq!(out.text(), "cut short");
        assert_eq!(out.stop_reason, StopReason::MaxTokens);
    }
}
