//! Amazon Bedrock integration for Confab.
//!
//! Provides the [`BedrockChatModel`] handle the factory hands out, backed by
//! the AWS SDK Converse API with IAM/STS authentication.
//!
//! # Authentication
//!
//! Bedrock uses AWS IAM credentials loaded from the standard credential chain
//! (environment variables, `~/.aws/credentials`, IMDS, etc.). No API key is
//! needed. The credential chain is loaded once, when the factory is built.

mod client;
pub(crate) mod convert;

pub use client::BedrockChatModel;
