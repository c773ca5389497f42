//! KST LPP payload decoding.
//!
//! A payload is a hex string: one channel byte, one type tag byte, then a
//! fixed field layout chosen by the tag (and, for GPS, by the total length).
//! Signed fields are stored as raw two's-complement bit patterns and scaled
//! to real units after sign correction.
//!
//! Offsets live in `layout`, bounds-checked hex access in `reader`, the
//! dispatch in `parser`. Every failure is an explicit `DecodeError` value;
//! the decoder never prints and never panics on input.

pub mod error;
pub mod layout;
pub mod message;
pub mod parser;
pub mod reader;

pub use parser::{decode, decode_frame, decode_header};
