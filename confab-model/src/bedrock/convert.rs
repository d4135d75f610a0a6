//! Type conversions between Confab and Amazon Bedrock Converse API types.
//!
//! This module handles mapping between `ChatRequest`/`ChatResponse` and the
//! Converse API format used by `aws-sdk-bedrockruntime`, plus the mapping of
//! catalog inference parameters onto the Converse inference configuration.

use crate::catalog::InferenceParams;
use confab_core::{ChatRequest, ChatResponse, Message, Role, StopReason, TokenUsage};
use aws_sdk_bedrockruntime::types::{
    self as bedrock, ContentBlock, ConversationRole, ConverseOutput, InferenceConfiguration,
    SystemContentBlock,
};
use aws_smithy_types::Document;
use serde_json::Value;

/// Result of converting a `ChatRequest` into Converse API inputs.
///
/// System messages are extracted separately since Bedrock's Converse API
/// takes them as a distinct parameter rather than inline with conversation
/// messages.
pub(crate) struct ConverseInput {
    /// Conversation messages (user and assistant turns).
    pub messages: Vec<bedrock::Message>,
    /// System prompt content blocks extracted from system-role messages.
    pub system: Vec<SystemContentBlock>,
}

/// Convert a `ChatRequest` into Converse API inputs.
///
/// Extracts system messages into separate system content blocks; empty-text
/// messages are dropped.
pub(crate) fn chat_request_to_converse(request: &ChatRequest) -> Result<ConverseInput, String> {
    let mut messages = Vec::new();
    let mut system = Vec::new();

    for message in &request.messages {
        if message.text.is_empty() {
            continue;
        }
        match message.role {
            Role::System => {
                system.push(SystemContentBlock::Text(message.text.clone()));
            }
            Role::User | Role::Assistant => {
                let role = match message.role {
                    Role::Assistant => ConversationRole::Assistant,
                    _ => ConversationRole::User,
                };
                let msg = bedrock::Message::builder()
                    .role(role)
                    .content(ContentBlock::Text(message.text.clone()))
                    .build()
                    .map_err(|e| format!("Failed to build Bedrock message: {e}"))?;
                messages.push(msg);
            }
        }
    }

    Ok(ConverseInput { messages, system })
}

/// Map catalog `InferenceParams` to the Converse `InferenceConfiguration`.
///
/// Covers `temperature`, `top_p`, `max_tokens`, and `stop_sequences`. The
/// Converse config has no `top_k` member; that key travels in the
/// additional-model-request-fields document instead (see
/// [`params_to_additional_fields`]).
pub(crate) fn params_to_inference_config(params: &InferenceParams) -> InferenceConfiguration {
    let mut builder = InferenceConfiguration::builder();

    if let Some(temp) = params.temperature {
        builder = builder.temperature(temp);
    }
    if let Some(top_p) = params.top_p {
        builder = builder.top_p(top_p);
    }
    if let Some(max_tokens) = params.max_tokens {
        builder = builder.max_tokens(max_tokens);
    }
    if !params.stop_sequences.is_empty() {
        builder = builder.set_stop_sequences(Some(params.stop_sequences.clone()));
    }

    builder.build()
}

/// Map the parameters the Converse inference config cannot carry (`top_k`)
/// onto an additional-model-request-fields document. Returns `None` when
/// nothing needs the escape hatch.
pub(crate) fn params_to_additional_fields(params: &InferenceParams) -> Option<Document> {
    let top_k = params.top_k?;
    Some(json_value_to_document(&serde_json::json!({ "top_k": top_k })))
}

/// Convert a Converse non-streaming response to a `ChatResponse`.
///
/// Extracts the assistant message text, stop reason, and token usage.
pub(crate) fn converse_output_to_chat(
    output: &ConverseOutput,
    stop_reason: &bedrock::StopReason,
    usage: Option<&bedrock::TokenUsage>,
) -> ChatResponse {
    let text = match output {
        ConverseOutput::Message(message) => message
            .content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text(text) if !text.is_empty() => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(""),
        _ => String::new(),
    };

    let usage = usage.map(|u| TokenUsage {
        input_tokens: u.input_tokens,
        output_tokens: u.output_tokens,
        total_tokens: u.total_tokens,
    });

    ChatResponse {
        message: Message::assistant(text),
        stop_reason: converse_stop_reason(stop_reason),
        usage,
    }
}

/// Map the Converse `StopReason` to the Confab `StopReason`.
fn converse_stop_reason(stop_reason: &bedrock::StopReason) -> StopReason {
    match stop_reason {
        bedrock::StopReason::EndTurn => StopReason::EndTurn,
        bedrock::StopReason::ToolUse => StopReason::EndTurn,
        bedrock::StopReason::MaxTokens => StopReason::MaxTokens,
        bedrock::StopReason::StopSequence => StopReason::StopSequence,
        bedrock::StopReason::ContentFiltered => StopReason::ContentFiltered,
        bedrock::StopReason::GuardrailIntervened => StopReason::ContentFiltered,
        _ => StopReason::Other,
    }
}

/// Convert a `serde_json::Value` to an `aws_smithy_types::Document`.
pub(crate) fn json_value_to_document(value: &Value) -> Document {
    match value {
        Value::Null => Document::Null,
        Value::Bool(b) => Document::Bool(*b),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Document::Number(aws_smithy_types::Number::PosInt(u))
            } else if let Some(i) = n.as_i64() {
                Document::Number(aws_smithy_types::Number::NegInt(i))
            } else if let Some(f) = n.as_f64() {
                Document::Number(aws_smithy_types::Number::Float(f))
            } else {
                Document::Null
            }
        }
        Value::String(s) => Document::String(s.clone()),
        Value::Array(arr) => Document::Array(arr.iter().map(json_value_to_document).collect()),
        Value::Object(obj) => Document::Object(
            obj.iter().map(|(k, v)| (k.clone(), json_value_to_document(v))).collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confab_core::Message as ChatMessage;

    #[test]
    fn test_system_message_extraction() {
        let request = ChatRequest::new(vec![
            ChatMessage::system("You are helpful."),
            ChatMessage::user("Hello"),
            ChatMessage::assistant("Hi, how can I help?"),
        ]);

        let input = chat_request_to_converse(&request).unwrap();
        assert_eq!(input.system.len(), 1);
        assert_eq!(input.messages.len(), 2);
        assert_eq!(input.messages[0].role, ConversationRole::User);
        assert_eq!(input.messages[1].role, ConversationRole::Assistant);
    }

    #[test]
    fn test_empty_text_dropped() {
        let request = ChatRequest::new(vec![
            ChatMessage::user(""),
            ChatMessage::user("real content"),
        ]);

        let input = chat_request_to_converse(&request).unwrap();
        assert_eq!(input.messages.len(), 1);
    }

    #[test]
    fn test_params_map_onto_inference_config() {
        let config = params_to_inference_config(&InferenceParams::anthropic_defaults());
        assert_eq!(config.temperature, Some(0.01));
        assert_eq!(config.top_p, Some(1.0));
        assert_eq!(config.max_tokens, Some(4096));
        assert_eq!(config.stop_sequences, Some(vec!["\n\nHuman".to_string()]));
    }

    #[test]
    fn test_unset_params_stay_unset() {
        let config = params_to_inference_config(&InferenceParams::deterministic());
        assert_eq!(config.temperature, Some(0.01));
        assert!(config.top_p.is_none());
        assert!(config.max_tokens.is_none());
        assert!(config.stop_sequences.is_none());
    }

    #[test]
    fn test_top_k_lands_in_additional_fields() {
        let doc = params_to_additional_fields(&InferenceParams::anthropic_defaults()).unwrap();
        let Document::Object(fields) = doc else { panic!("expected object document") };
        assert_eq!(
            fields.get("top_k"),
            Some(&Document::Number(aws_smithy_types::Number::PosInt(250)))
        );
    }

    #[test]
    fn test_no_top_k_no_additional_fields() {
        assert!(params_to_additional_fields(&InferenceParams::deterministic()).is_none());
    }

    #[test]
    fn test_stop_reason_mapping() {
        assert_eq!(converse_stop_reason(&bedrock::StopReason::EndTurn), StopReason::EndTurn);
        assert_eq!(converse_stop_reason(&bedrock::StopReason::MaxTokens), StopReason::MaxTokens);
        assert_eq!(
            converse_stop_reason(&bedrock::StopReason::StopSequence),
            StopReason::StopSequence
        );
        assert_eq!(
            converse_stop_reason(&bedrock::StopReason::ContentFiltered),
            StopReason::ContentFiltered
        );
        assert_eq!(
            converse_stop_reason(&bedrock::StopReason::GuardrailIntervened),
            StopReason::ContentFiltered
        );
    }

    #[test]
    fn test_converse_output_extraction() {
        let message = bedrock::Message::builder()
            .role(ConversationRole::Assistant)
            .content(ContentBlock::Text("Hello ".to_string()))
            .content(ContentBlock::Text("there".to_string()))
            .build()
            .unwrap();
        let usage = bedrock::TokenUsage::builder()
            .input_tokens(10)
            .output_tokens(5)
            .total_tokens(15)
            .build()
            .unwrap();

        let response = converse_output_to_chat(
            &ConverseOutput::Message(message),
            &bedrock::StopReason::EndTurn,
            Some(&usage),
        );
        assert_eq!(response.text(), "Hello there");
        assert_eq!(response.stop_reason, StopReason::EndTurn);
        assert_eq!(response.usage.unwrap().total_tokens, 15);
    }

    #[test]
    fn test_json_value_to_document_numbers() {
        let doc = json_value_to_document(&serde_json::json!({ "k": 250, "t": 0.01, "n": -3 }));
        let Document::Object(fields) = doc else { panic!("expected object document") };
        assert_eq!(fields.get("k"), Some(&Document::Number(aws_smithy_types::Number::PosInt(250))));
        assert_eq!(fields.get("n"), Some(&Document::Number(aws_smithy_types::Number::NegInt(-3))));
        assert_eq!(fields.get("t"), Some(&Document::Number(aws_smithy_types::Number::Float(0.01))));
    }
}
