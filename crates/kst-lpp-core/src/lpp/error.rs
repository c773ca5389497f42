use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::HeaderRadix;

/// Errors returned by LPP payload decoding.
///
/// # Examples
/// ```
/// use kst_lpp_core::{DecodeError, ErrorKind, HeaderRadix};
///
/// let err = DecodeError::UnknownType {
///     code: 99,
///     radix: HeaderRadix::Decimal,
/// };
/// assert_eq!(err.kind(), ErrorKind::UnknownType);
/// assert!(err.to_string().contains("unknown LPP type tag"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("payload too short: need {needed} hex chars, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("odd payload length: {length} hex chars")]
    OddLength { length: usize },
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidHexDigit { position: usize, found: char },
    #[error("header byte at {offset} is not a decimal value: {text:?}")]
    InvalidHeader { offset: usize, text: String },
    #[error("field {field} is {width} bytes wide, at most {max} allowed")]
    FieldTooWide {
        field: &'static str,
        width: usize,
        max: usize,
    },
    #[error("unknown LPP type tag: {}", display_tag(.code, .radix))]
    UnknownType { code: u8, radix: HeaderRadix },
    #[error("unsupported GPS payload length: {length} hex chars (expected 22 or 40)")]
    UnsupportedLength { length: usize },
}

/// Coarse classification of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MalformedInput,
    UnknownType,
    UnsupportedLength,
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::UnknownType { .. } => ErrorKind::UnknownType,
            DecodeError::UnsupportedLength { .. } => ErrorKind::UnsupportedLength,
            DecodeError::TooShort { .. }
            | DecodeError::OddLength { .. }
            | DecodeError::InvalidHexDigit { .. }
            | DecodeError::InvalidHeader { .. }
            | DecodeError::FieldTooWide { .. } => ErrorKind::MalformedInput,
        }
    }
}

/// Writes a type tag the way it appeared in the payload for that radix.
fn display_tag(code: &u8, radix: &HeaderRadix) -> String {
    match radix {
        HeaderRadix::Decimal => code.to_string(),
        HeaderRadix::Hex => format!("{code:#04x}"),
    }
}
