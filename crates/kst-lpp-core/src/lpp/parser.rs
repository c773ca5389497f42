use tracing::{debug, trace};

use super::error::DecodeError;
use super::layout;
use super::message::{
    Accelerometer, Battery, DecodedMessage, Distance, Frame, GpsExtended, GpsStandard, Header,
    MessageType,
};
use super::reader::HexReader;
use crate::options::{DecodeOptions, HeaderRadix};
use crate::signed::signed_int;

/// Decode one hex payload with the default options.
///
/// # Examples
/// ```
/// use kst_lpp_core::{DecodedMessage, Distance, decode};
///
/// let message = decode("01820036")?;
/// assert_eq!(message, DecodedMessage::Distance(Distance { distance: 54 }));
/// # Ok::<(), kst_lpp_core::DecodeError>(())
/// ```
pub fn decode(payload: &str) -> Result<DecodedMessage, DecodeError> {
    decode_frame(payload, &DecodeOptions::default()).map(|frame| frame.message)
}

/// Decode one hex payload, keeping the header values.
pub fn decode_frame(payload: &str, options: &DecodeOptions) -> Result<Frame, DecodeError> {
    debug!(payload, "decoding LPP payload");
    let reader = HexReader::new(payload)?;
    let header = read_header(&reader, options.header_radix)?;
    let message_type = MessageType::from_code(header.type_tag, options.header_radix).ok_or(
        DecodeError::UnknownType {
            code: header.type_tag,
            radix: options.header_radix,
        },
    )?;
    trace!(
        channel = header.channel,
        message_type = message_type.name(),
        length = reader.len(),
        "dispatching LPP payload"
    );

    let message = match message_type {
        MessageType::Distance => DecodedMessage::Distance(parse_distance(&reader)?),
        MessageType::Battery => DecodedMessage::Battery(parse_battery(&reader)?),
        MessageType::Accelerometer => {
            DecodedMessage::Accelerometer(parse_accelerometer(&reader)?)
        }
        MessageType::Gps => match reader.len() {
            layout::GPS_STANDARD_LEN => {
                DecodedMessage::GpsStandard(parse_gps_standard(&reader)?)
            }
            layout::GPS_EXTENDED_LEN => {
                DecodedMessage::GpsExtended(parse_gps_extended(&reader)?)
            }
            length => return Err(DecodeError::UnsupportedLength { length }),
        },
    };

    Ok(Frame { header, message })
}

/// Read only the channel and type tag.
pub fn decode_header(payload: &str, options: &DecodeOptions) -> Result<Header, DecodeError> {
    let reader = HexReader::new(payload)?;
    read_header(&reader, options.header_radix)
}

fn read_header(reader: &HexReader<'_>, radix: HeaderRadix) -> Result<Header, DecodeError> {
    reader.require_len(layout::HEADER_LEN)?;
    let channel = reader.read_header(layout::CHANNEL_RANGE, radix)?;
    let type_tag = reader.read_header(layout::TYPE_RANGE, radix)?;
    Ok(Header { channel, type_tag })
}

fn parse_distance(reader: &HexReader<'_>) -> Result<Distance, DecodeError> {
    let distance = reader.read_uint(layout::DISTANCE_RANGE, "distance")?;
    Ok(Distance {
        distance: distance as u16,
    })
}

fn parse_battery(reader: &HexReader<'_>) -> Result<Battery, DecodeError> {
    let battery =
        reader.read_leading(layout::BATTERY_OFFSET, layout::BATTERY_MAX_BYTES, "battery")?;
    Ok(Battery {
        battery: battery as u16,
    })
}

fn parse_accelerometer(reader: &HexReader<'_>) -> Result<Accelerometer, DecodeError> {
    let x = reader.read_uint(layout::ACCEL_X_RANGE, "accelX")?;
    let y = reader.read_uint(layout::ACCEL_Y_RANGE, "accelY")?;
    let z = reader.read_tail(layout::ACCEL_Z_OFFSET, layout::ACCEL_AXIS_BYTES, "accelZ")?;
    Ok(Accelerometer {
        accel_x: scaled_axis(x),
        accel_y: scaled_axis(y),
        accel_z: scaled_axis(z),
    })
}

fn parse_gps_standard(reader: &HexReader<'_>) -> Result<GpsStandard, DecodeError> {
    let lat = reader.read_uint(layout::GPS_LAT_RANGE, "lat")?;
    let lng = reader.read_uint(layout::GPS_LNG_RANGE, "lng")?;
    let alt = reader.read_uint(layout::GPS_ALT_RANGE, "alt")?;
    Ok(GpsStandard {
        lat: scaled_coordinate(lat),
        lng: scaled_coordinate(lng),
        alt: f64::from(alt) / layout::ALT_SCALE,
    })
}

fn parse_gps_extended(reader: &HexReader<'_>) -> Result<GpsExtended, DecodeError> {
    let position = parse_gps_standard(reader)?;
    let hacc = reader.read_uint(layout::GPS_HACC_RANGE, "hacc")?;
    let vacc = reader.read_uint(layout::GPS_VACC_RANGE, "vacc")?;
    let sat = reader.read_uint(layout::GPS_SAT_RANGE, "sat")?;
    Ok(GpsExtended {
        lat: position.lat,
        lng: position.lng,
        alt: position.alt,
        hacc: f64::from(hacc) / layout::ACC_SCALE,
        vacc: f64::from(vacc) / layout::ACC_SCALE,
        sat: sat as u8,
    })
}

fn scaled_axis(raw: u32) -> f64 {
    signed_int(raw, layout::ACCEL_AXIS_BYTES as u32) as f64 / layout::ACC_SCALE
}

fn scaled_coordinate(raw: u32) -> f64 {
    signed_int(raw, layout::GPS_COORD_BYTES as u32) as f64 / layout::GPS_SCALE
}
