//! KST LPP core library for decoding sensor uplink payloads.
//!
//! KST33xx sensors send compact uplinks: a channel byte, a type tag byte and
//! a fixed field layout selected by the tag. This crate turns the hex form
//! of such a payload into a typed message (distance, battery, accelerometer,
//! standard or extended GPS) or a typed decode error. Decoding is pure: no
//! I/O, no shared state, safe to call from any thread.
//!
//! Invariants:
//! - The same payload always decodes to the same value.
//! - Malformed input yields a `DecodeError`, never a panic or partial data.
//! - Header bytes follow the configured `HeaderRadix` (decimal by default).
//!
//! Version française (résumé):
//! Cette crate décode les trames LPP des capteurs KST33xx (hex -> message
//! typé). Le décodage est pur et sans état ; toute entrée invalide produit une
//! `DecodeError` explicite. L'en-tête est lu en base 10 par défaut.
//!
//! # Examples
//! ```
//! use kst_lpp_core::{DecodedMessage, decode};
//!
//! let message = decode("017863")?;
//! assert!(matches!(message, DecodedMessage::Battery(_)));
//! # Ok::<(), kst_lpp_core::DecodeError>(())
//! ```

use serde::{Deserialize, Serialize};

mod lpp;
mod options;
pub mod samples;
mod signed;

pub use lpp::error::{DecodeError, ErrorKind};
pub use lpp::message::{
    Accelerometer, Battery, DecodeFailure, DecodedMessage, Distance, Frame, GpsExtended,
    GpsStandard, Header, MessageType, Outcome,
};
pub use lpp::{decode, decode_frame, decode_header};
pub use options::{DecodeOptions, HeaderRadix};
pub use signed::signed_int;

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when the caller does not stamp the report.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";
/// Tool name embedded in reports.
pub const TOOL_NAME: &str = "kst-lpp";

/// Versioned envelope around one decode outcome.
///
/// # Examples
/// ```
/// use kst_lpp_core::{DecodeOptions, decode_report};
///
/// let report = decode_report("01820036", &DecodeOptions::default());
/// assert!(report.result.is_decoded());
/// assert_eq!(report.header.map(|h| h.channel), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeReport {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,
    /// Payload as given to the decoder.
    pub input: InputInfo,
    /// Header values, when the header could be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,
    /// Decoded message or failure.
    pub result: Outcome,
}

/// Tool metadata embedded in reports.
///
/// # Examples
/// ```
/// use kst_lpp_core::ToolInfo;
///
/// let tool = ToolInfo {
///     name: "kst-lpp".to_string(),
///     version: "0.1.0".to_string(),
/// };
/// assert_eq!(tool.name, "kst-lpp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "kst-lpp").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input payload metadata embedded in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputInfo {
    /// Hex payload exactly as decoded.
    pub payload: String,
    /// Payload length in hex characters.
    pub length: usize,
}

/// Decode `payload` and wrap the outcome in a report. Never fails: decode
/// errors become the report's `result`.
pub fn decode_report(payload: &str, options: &DecodeOptions) -> DecodeReport {
    let (header, result) = match decode_frame(payload, options) {
        Ok(frame) => (Some(frame.header), Outcome::Decoded(frame.message)),
        Err(err) => (
            decode_header(payload, options).ok(),
            Outcome::Failed(DecodeFailure::from(&err)),
        ),
    };

    DecodeReport {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            payload: payload.to_string(),
            length: payload.len(),
        },
        header,
        result,
    }
}
