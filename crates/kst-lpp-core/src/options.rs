use serde::{Deserialize, Serialize};

/// Numeric base used to read the two header bytes (channel and type tag).
///
/// Payload fields are always base-16. The reference decoder reads the header
/// as base-10 text, which is preserved as the default until the firmware
/// documentation settles which base the header uses. `Hex` reads the header
/// as the raw wire bytes instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderRadix {
    #[default]
    Decimal,
    Hex,
}

impl HeaderRadix {
    pub fn base(self) -> u32 {
        match self {
            HeaderRadix::Decimal => 10,
            HeaderRadix::Hex => 16,
        }
    }
}

/// Decoder configuration.
///
/// # Examples
/// ```
/// use kst_lpp_core::{DecodeOptions, HeaderRadix};
///
/// let options = DecodeOptions::default();
/// assert_eq!(options.header_radix, HeaderRadix::Decimal);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub header_radix: HeaderRadix,
}

impl DecodeOptions {
    pub fn with_header_radix(header_radix: HeaderRadix) -> Self {
        Self { header_radix }
    }
}
