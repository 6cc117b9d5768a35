//! Input model for chat prompt templates.
//!
//! A [`ChatRequest`] bundles the messages, tools, retrieval documents and
//! plugin data a template renders. Every type maps losslessly to and from a
//! JSON document through [`DocumentCodec`]:
//!
//! ```
//! use serde_json::json;
//! use tokenizer_prompts::{ChatRequest, DocumentCodec, Message};
//!
//! let request = ChatRequest::new(vec![Message::user("What is 2 + 2?")])
//!     .with_plugins(json!({ "date_string": "26 Jul 2024" }));
//!
//! let document = request.to_document();
//! assert_eq!(document["messages"][0]["role"], "user");
//!
//! let decoded = ChatRequest::from_document(&document);
//! assert!(decoded.is_ok());
//! assert_eq!(decoded.value(), &request);
//! ```

#![warn(missing_docs, clippy::pedantic)]

mod blob;
mod chat;
mod codec;
mod error;
mod tool;

/// Multi-modal attachments.
pub use blob::{DEFAULT_MODALITY, MultiModalBlob};
/// Chat turns, retrieval documents and the request aggregate.
pub use chat::{ChatRequest, Document, Message};
/// JSON document mapping shared by every prompt type.
pub use codec::DocumentCodec;
/// Decoding errors and result alias.
pub use error::{PromptResult, SchemaError};
/// Tool declarations.
pub use tool::{FUNCTION_TOOL, OBJECT_SCHEMA, Tool, ToolFunction, ToolParameters, ToolProperty};
