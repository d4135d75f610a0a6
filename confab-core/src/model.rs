use crate::{ChatRequest, ChatResponse, Result};
use async_trait::async_trait;

/// A ready-to-invoke chat model handle.
///
/// Everything the factory hands out sits behind this trait: the Bedrock
/// handle in `confab-model`, and the mock used in consumer tests. Handles
/// are `Send + Sync` so they can be shared as `Arc<dyn ChatModel>` across
/// sessions.
///
/// # Example
///
/// ```rust,ignore
/// use confab_core::{ChatModel, ChatRequest, Message};
///
/// let response = model.complete(ChatRequest::new(vec![Message::user("Hi")])).await?;
/// println!("{}", response.text());
/// ```
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// The provider model id this handle submits prompts to
    /// (e.g., `"anthropic.claude-3-7-sonnet-20250219-v1:0"`).
    fn model_id(&self) -> &str;

    /// Submit a prompt and wait for the complete response.
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;
    use std::sync::Arc;

    struct Echo;

    #[async_trait]
    impl ChatModel for Echo {
        fn model_id(&self) -> &str {
            "echo"
        }

        async fn complete(&self, request: ChatRequest) -> Result<ChatResponse> {
            let text = request.messages.last().map(|m| m.text.clone()).unwrap_or_default();
            Ok(ChatResponse::new(Message::assistant(text)))
        }
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let model: Arc<dyn ChatModel> = Arc::new(Echo);
        assert_eq!(model.model_id(), "echo");

        let request = ChatRequest::new(vec![Message::user("ping")]);
        let response = model.complete(request).await.unwrap();
        assert_eq!(response.text(), "ping");
    }
}
