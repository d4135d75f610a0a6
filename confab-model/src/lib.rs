//! # confab-model
//!
//! Amazon Bedrock model catalog and client factory for Confab.
//!
//! ## Overview
//!
//! This crate turns a human-readable model display name into a ready-to-invoke
//! Bedrock client:
//!
//! - [`ModelCatalog`] - Ordered display-name → provider-model-id mapping with
//!   per-model inference parameters and a known-supported allow-list
//! - [`ModelFactory`] - Resolves a display name through the catalog and hands
//!   out a [`BedrockChatModel`] sharing one transport handle
//! - [`MockChatModel`] - Canned-response model for testing consumers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use confab_core::{ChatRequest, Message};
//! use confab_model::{ModelCatalog, ModelFactory};
//!
//! let factory = ModelFactory::new(ModelCatalog::builtin()).await?;
//! let model = factory.create("Amazon Nova Pro")?;
//!
//! let request = ChatRequest::new(vec![Message::user("Hello!")]);
//! let response = model.complete(request).await?;
//! println!("{}", response.text());
//! ```
//!
//! ## Supported Models
//!
//! The built-in catalog, all pinned to deterministic output (temperature 0.01):
//!
//! | Display name | Provider model id |
//! |--------------|-------------------|
//! | `Claude 3.7 Sonnet` | `anthropic.claude-3-7-sonnet-20250219-v1:0` |
//! | `Claude 3.5 Sonnet` | `anthropic.claude-3-5-sonnet-20241022-v2:0` |
//! | `Claude 3 Sonnet` | `anthropic.claude-3-sonnet-20240229-v1:0` |
//! | `Claude V2` | `anthropic.claude-v2` |
//! | `Amazon Nova Pro` | `amazon.nova-pro-v1:0` |
//! | `Amazon Nova Lite` | `amazon.nova-lite-v1:0` |
//!
//! Unknown display names (and names resolving to ids outside the supported
//! set) yield `ConfabError::UnsupportedModel`; the factory never hands out a
//! handle for them.

pub mod bedrock;
pub mod catalog;
pub mod factory;
pub mod mock;

pub use bedrock::BedrockChatModel;
pub use catalog::{InferenceParams, ModelCatalog, ModelEntry};
pub use factory::{BedrockSettings, ModelFactory};
pub use mock::MockChatModel;
