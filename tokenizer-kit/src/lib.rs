//! Tokenizer runtime prompt primitives facade.
//!
//! Bundles the workspace crates behind feature flags so downstream users can
//! depend on the outcome container alone or on the full prompt input model.

#![warn(missing_docs, clippy::pedantic)]

/// Re-export shared primitives for convenience.
pub use tokenizer_primitives as primitives;

/// Chat prompt input model (enabled by `prompts` feature).
#[cfg(feature = "prompts")]
pub use tokenizer_prompts as prompts;

pub use tokenizer_primitives::{ErrorKind, Outcome};
