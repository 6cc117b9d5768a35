//! Core shared types for the tokenizer runtime.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod outcome;

/// Error codes shared across the runtime and the code conversion error.
pub use error::{CodeResult, ErrorKind, UnknownErrorCode};
/// Value-or-error container returned by fallible operations.
pub use outcome::Outcome;
