//! Error types for prompt document decoding.

use serde_json::Error as SerdeError;
use thiserror::Error;
use tokenizer_primitives::ErrorKind;

/// Prefix used by the blob decoder so base64 failures can be told apart from
/// other shape errors once they surface through `serde_json`.
pub(crate) const INVALID_BASE64: &str = "invalid base64 blob data";

/// Result alias for prompt model operations.
pub type PromptResult<T> = Result<T, SchemaError>;

/// Errors raised while mapping a JSON document onto the prompt model.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document text is not valid JSON.
    #[error("malformed document: {source}")]
    Syntax {
        /// Source parse error.
        #[source]
        source: SerdeError,
    },

    /// A required field is absent.
    #[error("missing field `{field}`")]
    MissingField {
        /// Name of the missing field.
        field: String,
    },

    /// A field is present but has the wrong shape.
    #[error("unexpected document shape: {reason}")]
    Shape {
        /// Human-readable description of the mismatch.
        reason: String,
    },

    /// A multi-modal payload is not valid base64.
    #[error("{reason}")]
    InvalidBlobData {
        /// Decoder message.
        reason: String,
    },

    /// A tool parameter name is listed more than once in `required`.
    #[error("parameter `{name}` is listed as required more than once")]
    DuplicateRequired {
        /// The repeated parameter name.
        name: String,
    },
}

impl SchemaError {
    /// Convenience constructor for shape mismatches.
    #[must_use]
    pub fn shape(reason: impl Into<String>) -> Self {
        Self::Shape {
            reason: reason.into(),
        }
    }

    /// Returns the error code reported through [`tokenizer_primitives::Outcome`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBlobData { .. } => ErrorKind::Base64DecodeFailure,
            Self::Syntax { .. }
            | Self::MissingField { .. }
            | Self::Shape { .. }
            | Self::DuplicateRequired { .. } => ErrorKind::ParseFailure,
        }
    }
}

impl From<SerdeError> for SchemaError {
    fn from(source: SerdeError) -> Self {
        if source.is_syntax() || source.is_eof() || source.is_io() {
            return Self::Syntax { source };
        }

        let message = source.to_string();
        if let Some((field, _)) = message
            .strip_prefix("missing field `")
            .and_then(|rest| rest.split_once('`'))
        {
            return Self::MissingField {
                field: field.to_owned(),
            };
        }
        if message.starts_with(INVALID_BASE64) {
            return Self::InvalidBlobData { reason: message };
        }
        Self::Shape { reason: message }
    }
}

impl From<SchemaError> for ErrorKind {
    fn from(value: SchemaError) -> Self {
        value.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Named {
        name: String,
    }

    #[test]
    fn classifies_missing_fields() {
        let err = Named::deserialize(&json!({})).expect_err("missing name");
        let err = SchemaError::from(err);
        assert!(matches!(&err, SchemaError::MissingField { field } if field == "name"));
        assert_eq!(err.kind(), ErrorKind::ParseFailure);
    }

    #[test]
    fn classifies_shape_errors() {
        let err = Named::deserialize(&json!({ "name": 7 })).expect_err("wrong type");
        assert!(matches!(SchemaError::from(err), SchemaError::Shape { .. }));
    }

    #[test]
    fn classifies_syntax_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{\"name\":").expect_err("eof");
        let err = SchemaError::from(err);
        assert!(matches!(err, SchemaError::Syntax { .. }));
        assert_eq!(ErrorKind::from(err), ErrorKind::ParseFailure);
    }

    #[test]
    fn entity_decoding_errors_keep_their_variant() {
        use crate::codec::DocumentCodec;
        use crate::{MultiModalBlob, ToolParameters};

        let err = ToolParameters::try_from_document(&json!({ "type": "object", "required": [] }))
            .expect_err("missing properties");
        assert!(matches!(&err, SchemaError::MissingField { field } if field == "properties"));

        let err = MultiModalBlob::try_from_document(&json!({ "data": "%%", "modality": "image" }))
            .expect_err("bad base64");
        assert!(matches!(
            &err,
            SchemaError::InvalidBlobData { reason } if reason.starts_with(INVALID_BASE64)
        ));
        assert_eq!(err.kind(), ErrorKind::Base64DecodeFailure);

        let err = MultiModalBlob::try_from_document(&json!({ "data": "", "modality": 3 }))
            .expect_err("numeric modality");
        assert!(matches!(err, SchemaError::Shape { .. }));
    }

    #[test]
    fn blob_errors_map_to_base64_code() {
        let err = SchemaError::InvalidBlobData {
            reason: format!("{INVALID_BASE64}: bad padding"),
        };
        assert_eq!(err.kind(), ErrorKind::Base64DecodeFailure);
    }
}
