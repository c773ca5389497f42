use serde::{Deserialize, Serialize};

use super::error::{DecodeError, ErrorKind};
use super::layout;
use crate::options::HeaderRadix;

/// Message kinds selected by the type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    Distance,
    Battery,
    Accelerometer,
    Gps,
}

impl MessageType {
    pub const ALL: [MessageType; 4] = [
        MessageType::Distance,
        MessageType::Battery,
        MessageType::Accelerometer,
        MessageType::Gps,
    ];

    /// Tag value as read from the header under `radix`.
    pub fn code(self, radix: HeaderRadix) -> u8 {
        match (self, radix) {
            (MessageType::Distance, HeaderRadix::Decimal) => layout::TYPE_DISTANCE,
            (MessageType::Battery, HeaderRadix::Decimal) => layout::TYPE_BATTERY,
            (MessageType::Accelerometer, HeaderRadix::Decimal) => layout::TYPE_ACCELEROMETER,
            (MessageType::Gps, HeaderRadix::Decimal) => layout::TYPE_GPS,
            (MessageType::Distance, HeaderRadix::Hex) => layout::TYPE_DISTANCE_WIRE,
            (MessageType::Battery, HeaderRadix::Hex) => layout::TYPE_BATTERY_WIRE,
            (MessageType::Accelerometer, HeaderRadix::Hex) => layout::TYPE_ACCELEROMETER_WIRE,
            (MessageType::Gps, HeaderRadix::Hex) => layout::TYPE_GPS_WIRE,
        }
    }

    pub fn from_code(code: u8, radix: HeaderRadix) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code(radix) == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            MessageType::Distance => "distance",
            MessageType::Battery => "battery",
            MessageType::Accelerometer => "accelerometer",
            MessageType::Gps => "gps",
        }
    }
}

/// Range to target in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub distance: u16,
}

/// Remaining battery in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    pub battery: u16,
}

/// Acceleration per axis in g.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accelerometer {
    pub accel_x: f64,
    pub accel_y: f64,
    pub accel_z: f64,
}

/// Position fix: degrees and metres above sea level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsStandard {
    pub lat: f64,
    pub lng: f64,
    pub alt: f64,
}

/// Position fix with horizontal/vertical accuracy (metres) and satellite count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsExtended {
    pub lat: f64,
    pub lng: f64,
    pub alt: f64,
    pub hacc: f64,
    pub vacc: f64,
    pub sat: u8,
}

/// A successfully decoded LPP message.
///
/// Serialized without a tag so only the variant's fields appear, matching
/// the field names downstream dashboards expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DecodedMessage {
    Distance(Distance),
    Battery(Battery),
    Accelerometer(Accelerometer),
    // Extended first so deserialization does not stop at the shorter form.
    GpsExtended(GpsExtended),
    GpsStandard(GpsStandard),
}

impl DecodedMessage {
    pub fn message_type(&self) -> MessageType {
        match self {
            DecodedMessage::Distance(_) => MessageType::Distance,
            DecodedMessage::Battery(_) => MessageType::Battery,
            DecodedMessage::Accelerometer(_) => MessageType::Accelerometer,
            DecodedMessage::GpsStandard(_) | DecodedMessage::GpsExtended(_) => MessageType::Gps,
        }
    }
}

/// Header bytes as read under the configured radix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub channel: u8,
    pub type_tag: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub header: Header,
    pub message: DecodedMessage,
}

/// Failure rendered for display: the message plus its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeFailure {
    pub error: String,
    pub kind: ErrorKind,
}

impl From<&DecodeError> for DecodeFailure {
    fn from(err: &DecodeError) -> Self {
        Self {
            error: err.to_string(),
            kind: err.kind(),
        }
    }
}

/// Either a decoded message or the failure that prevented it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    Decoded(DecodedMessage),
    Failed(DecodeFailure),
}

impl Outcome {
    pub fn is_decoded(&self) -> bool {
        matches!(self, Outcome::Decoded(_))
    }
}

impl From<Result<DecodedMessage, DecodeError>> for Outcome {
    fn from(result: Result<DecodedMessage, DecodeError>) -> Self {
        match result {
            Ok(message) => Outcome::Decoded(message),
            Err(err) => Outcome::Failed(DecodeFailure::from(&err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn type_codes_round_trip_for_both_radices() {
        for radix in [HeaderRadix::Decimal, HeaderRadix::Hex] {
            for kind in MessageType::ALL {
                assert_eq!(MessageType::from_code(kind.code(radix), radix), Some(kind));
            }
        }
        assert_eq!(MessageType::from_code(0x82, HeaderRadix::Decimal), None);
        assert_eq!(MessageType::from_code(82, HeaderRadix::Hex), None);
    }

    #[test]
    fn accelerometer_uses_camel_case_fields() {
        let message = DecodedMessage::Accelerometer(Accelerometer {
            accel_x: 0.0,
            accel_y: -0.003,
            accel_z: 1.003,
        });
        let value = serde_json::to_value(message).expect("message json");
        assert_eq!(
            value,
            json!({ "accelX": 0.0, "accelY": -0.003, "accelZ": 1.003 })
        );
    }

    #[test]
    fn failure_serializes_error_and_kind() {
        let outcome = Outcome::from(Err::<DecodedMessage, _>(DecodeError::UnknownType {
            code: 12,
            radix: HeaderRadix::Decimal,
        }));
        assert!(!outcome.is_decoded());
        let value = serde_json::to_value(&outcome).expect("outcome json");
        assert_eq!(value["kind"], "unknown_type");
        assert_eq!(value["error"], "unknown LPP type tag: 12");
    }

    #[test]
    fn gps_variants_deserialize_to_the_right_shape() {
        let standard: DecodedMessage =
            serde_json::from_value(json!({ "lat": 1.0, "lng": 2.0, "alt": 3.0 }))
                .expect("standard gps");
        assert!(matches!(standard, DecodedMessage::GpsStandard(_)));

        let extended: DecodedMessage = serde_json::from_value(json!({
            "lat": 1.0, "lng": 2.0, "alt": 3.0, "hacc": 4.0, "vacc": 5.0, "sat": 6
        }))
        .expect("extended gps");
        assert!(matches!(extended, DecodedMessage::GpsExtended(_)));
        assert_eq!(extended.message_type(), MessageType::Gps);
    }
}
