//! # confab-core
//!
//! Core traits and types for Confab chat-model clients.
//!
//! ## Overview
//!
//! This crate provides the foundational abstractions shared by every Confab
//! provider crate:
//!
//! - [`ChatModel`] - The prompt-submission trait every model handle implements
//! - [`ChatRequest`] / [`ChatResponse`] - The request/response data model
//! - [`Message`] / [`Role`] - Role-tagged conversation turns
//! - [`ConfabError`] / [`Result`] - Unified error handling
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use confab_core::{ChatModel, ChatRequest, Message};
//! use std::sync::Arc;
//!
//! async fn ask(model: Arc<dyn ChatModel>) -> confab_core::Result<String> {
//!     let request = ChatRequest::new(vec![
//!         Message::system("You are terse."),
//!         Message::user("What is Amazon Bedrock?"),
//!     ]);
//!     let response = model.complete(request).await?;
//!     Ok(response.text().to_string())
//! }
//! ```
//!
//! ## Error Handling
//!
//! [`ConfabError::UnsupportedModel`] is the factory's single rejection kind:
//! it is not retried and not recovered, the caller surfaces it and stops the
//! current request. Provider SDK failures pass through as
//! [`ConfabError::Model`] with the SDK's error text unmodified.

mod chat;
mod error;
mod model;

pub use chat::{ChatRequest, ChatResponse, Message, Role, StopReason, TokenUsage};
pub use error::{ConfabError, Result};
pub use model::ChatModel;
