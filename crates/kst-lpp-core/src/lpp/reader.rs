use std::ops::Range;

use super::error::DecodeError;
use crate::options::HeaderRadix;

/// Bounds-checked access to hex-character fields of a validated payload.
pub struct HexReader<'a> {
    payload: &'a str,
}

impl<'a> HexReader<'a> {
    /// Accepts only whole bytes of ASCII hex digits (either case).
    pub fn new(payload: &'a str) -> Result<Self, DecodeError> {
        let invalid = payload.char_indices().find(|(_, c)| !c.is_ascii_hexdigit());
        if let Some((position, found)) = invalid {
            return Err(DecodeError::InvalidHexDigit { position, found });
        }
        // All ASCII from here, so byte length equals character count.
        if payload.len() % 2 != 0 {
            return Err(DecodeError::OddLength {
                length: payload.len(),
            });
        }
        Ok(Self { payload })
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        if self.payload.len() < needed {
            return Err(DecodeError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_slice(&self, range: Range<usize>) -> Result<&'a str, DecodeError> {
        let needed = range.end;
        self.payload.get(range).ok_or(DecodeError::TooShort {
            needed,
            actual: self.payload.len(),
        })
    }

    /// Reads a big-endian unsigned field of at most four bytes.
    pub fn read_uint(&self, range: Range<usize>, field: &'static str) -> Result<u32, DecodeError> {
        let text = self.read_slice(range)?;
        parse_hex(text, field)
    }

    /// Reads the last field of a payload: exactly `bytes` bytes from `start`
    /// to the end. Missing bytes are `TooShort`, extra bytes `FieldTooWide`.
    pub fn read_tail(
        &self,
        start: usize,
        bytes: usize,
        field: &'static str,
    ) -> Result<u32, DecodeError> {
        let end = start + bytes * 2;
        let value = self.read_uint(start..end, field)?;
        if self.payload.len() > end {
            return Err(DecodeError::FieldTooWide {
                field,
                width: (self.payload.len() - start) / 2,
                max: bytes,
            });
        }
        Ok(value)
    }

    /// Reads a tail field that may be followed by bytes this layout ignores.
    pub fn read_leading(
        &self,
        start: usize,
        max_bytes: usize,
        field: &'static str,
    ) -> Result<u32, DecodeError> {
        self.require_len(start + 2)?;
        let end = self.payload.len().min(start + max_bytes * 2);
        self.read_uint(start..end, field)
    }

    pub fn read_header(&self, range: Range<usize>, radix: HeaderRadix) -> Result<u8, DecodeError> {
        let text = self.read_slice(range.clone())?;
        u8::from_str_radix(text, radix.base()).map_err(|_| DecodeError::InvalidHeader {
            offset: range.start,
            text: text.to_string(),
        })
    }
}

fn parse_hex(text: &str, field: &'static str) -> Result<u32, DecodeError> {
    u32::from_str_radix(text, 16).map_err(|_| DecodeError::FieldTooWide {
        field,
        width: text.len() / 2,
        max: 4,
    })
}
