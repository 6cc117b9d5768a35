//! Shared error codes for the tokenizer runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used when converting raw error codes.
pub type CodeResult<T> = Result<T, UnknownErrorCode>;

/// Failure categories reported by fallible tokenizer operations.
///
/// [`ErrorKind::Ok`] is the distinguished "no error" member. An
/// [`Outcome`](crate::Outcome) never stores it as a failure code.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum ErrorKind {
    /// No error.
    #[error("ok")]
    Ok = 0x00,

    /// Internal error, also the fallback for malformed failure codes.
    #[error("internal error")]
    Internal = 0x01,

    /// A component was used before it was initialized.
    #[error("component not initialized")]
    Uninitialized = 0x02,

    /// An index or identifier fell outside of the valid range.
    #[error("value out of range")]
    OutOfRange = 0x03,

    /// An artifact could not be loaded.
    #[error("load failure")]
    LoadFailure = 0x04,

    /// Encoding input failed.
    #[error("encode failure")]
    EncodeFailure = 0x05,

    /// A base64 payload could not be decoded.
    #[error("base64 decode failure")]
    Base64DecodeFailure = 0x06,

    /// Structured input could not be parsed or did not match its schema.
    #[error("parse failure")]
    ParseFailure = 0x07,

    /// Decoding output failed.
    #[error("decode failure")]
    DecodeFailure = 0x08,

    /// A regular expression failed to compile or match.
    #[error("regex failure")]
    RegexFailure = 0x09,
}

impl ErrorKind {
    /// Every member, ordered by code.
    pub const ALL: [Self; 10] = [
        Self::Ok,
        Self::Internal,
        Self::Uninitialized,
        Self::OutOfRange,
        Self::LoadFailure,
        Self::EncodeFailure,
        Self::Base64DecodeFailure,
        Self::ParseFailure,
        Self::DecodeFailure,
        Self::RegexFailure,
    ];

    /// Returns the stable numeric code.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Returns `true` for [`ErrorKind::Ok`].
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Raised when a numeric code does not name any [`ErrorKind`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("unknown error code {code:#04x}")]
pub struct UnknownErrorCode {
    /// The rejected code.
    pub code: u32,
}

impl TryFrom<u32> for ErrorKind {
    type Error = UnknownErrorCode;

    fn try_from(code: u32) -> CodeResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or(UnknownErrorCode { code })
    }
}

impl From<ErrorKind> for u32 {
    fn from(value: ErrorKind) -> Self {
        value.code()
    }
}
