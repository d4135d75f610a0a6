//! Amazon Bedrock chat handle.
//!
//! Uses the AWS SDK Converse API for non-streaming inference. The underlying
//! `aws_sdk_bedrockruntime::Client` is built by the factory and shared across
//! every handle it creates; cloning it is cheap and safe for concurrent use.

use super::convert::{
    chat_request_to_converse, converse_output_to_chat, params_to_additional_fields,
    params_to_inference_config,
};
use crate::catalog::InferenceParams;
use confab_core::{ChatModel, ChatRequest, ChatResponse, ConfabError, Result};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// A ready-to-invoke Bedrock model: the shared SDK client, the provider
/// model id, and the inference parameters the catalog attached.
///
/// Obtained from [`ModelFactory::create`](crate::ModelFactory::create);
/// submit prompts through the [`ChatModel`] trait.
#[derive(Debug)]
pub struct BedrockChatModel {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
    params: InferenceParams,
    region: String,
}

impl BedrockChatModel {
    pub(crate) fn from_parts(
        client: aws_sdk_bedrockruntime::Client,
        model_id: String,
        params: InferenceParams,
        region: String,
    ) -> Self {
        Self { client, model_id, params, region }
    }

    /// The inference parameters attached to every request this handle makes.
    pub fn params(&self) -> &InferenceParams {
        &self.params
    }
}

#[async_trait]
impl ChatModel for BedrockChatModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    #[instrument(skip_all, fields(model_id = %self.model_id, region = %self.region))]
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse> {
        let input = chat_request_to_converse(&request).map_err(|e| {
            ConfabError::Model(format!(
                "Bedrock request conversion failed for region={}, model={}: {e}",
                self.region, self.model_id
            ))
        })?;

        debug!("bedrock converse for model={}", self.model_id);

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .set_messages(Some(input.messages))
            .set_system(Some(input.system))
            .inference_config(params_to_inference_config(&self.params))
            .set_additional_model_request_fields(params_to_additional_fields(&self.params))
            .send()
            .await
            .map_err(|e| {
                ConfabError::Model(format!(
                    "Bedrock API error for region={}, model={}: {e}",
                    self.region, self.model_id
                ))
            })?;

        let output = response.output.ok_or_else(|| {
            ConfabError::Model(format!(
                "Bedrock response missing output for model={}",
                self.model_id
            ))
        })?;

        Ok(converse_output_to_chat(&output, &response.stop_reason, response.usage.as_ref()))
    }
}
