//! Mapping between the typed prompt model and JSON documents.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokenizer_primitives::Outcome;
use tracing::{debug, trace};

use crate::error::{PromptResult, SchemaError};

/// Lossless conversion between a prompt entity and a [`serde_json::Value`].
///
/// Field names on the wire are fixed snake-case keys and fields holding their
/// default value are still written. Unknown keys in decoded documents are
/// ignored.
pub trait DocumentCodec: Serialize + DeserializeOwned {
    /// Entity name used in log records.
    const NAME: &'static str;

    /// Checks invariants that the document shape alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] describing the first violation.
    fn validate(&self) -> PromptResult<()> {
        Ok(())
    }

    /// Serializes the entity into an object node.
    ///
    /// # Panics
    ///
    /// Panics if the entity cannot be represented as JSON, which the prompt
    /// types never trigger: all map keys are strings and no field is a float.
    #[must_use]
    fn to_document(&self) -> Value {
        serde_json::to_value(self).expect("prompt entities always serialize to JSON")
    }

    /// Decodes a document, returning the detailed error on failure.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] when a required field is missing, a field
    /// has the wrong shape or [`DocumentCodec::validate`] rejects the result.
    fn try_from_document(document: &Value) -> PromptResult<Self> {
        let entity = <Self as Deserialize>::deserialize(document)?;
        entity.validate()?;
        trace!(entity = Self::NAME, "decoded prompt document");
        Ok(entity)
    }

    /// Decodes a document into an [`Outcome`] carrying the entity or the
    /// error code of the failure.
    fn from_document(document: &Value) -> Outcome<Self> {
        Self::try_from_document(document)
            .inspect_err(|err| {
                debug!(entity = Self::NAME, code = %err.kind(), %err, "rejected prompt document");
            })
            .into()
    }

    /// Decodes JSON text. Syntax errors are reported like schema errors.
    fn from_json_str(text: &str) -> Outcome<Self> {
        serde_json::from_str::<Value>(text)
            .map_err(SchemaError::from)
            .and_then(|document| Self::try_from_document(&document))
            .inspect_err(|err| {
                debug!(entity = Self::NAME, code = %err.kind(), %err, "rejected prompt text");
            })
            .into()
    }

    /// Serializes the entity as compact JSON text.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`DocumentCodec::to_document`].
    #[must_use]
    fn to_json_string(&self) -> String {
        self.to_document().to_string()
    }

    /// Serializes the entity as indented JSON text.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`DocumentCodec::to_document`].
    #[must_use]
    fn to_json_string_pretty(&self) -> String {
        format!("{:#}", self.to_document())
    }
}
