//! Hex-character offsets of every LPP field. Two characters make one byte.

use std::ops::Range;

pub const CHANNEL_RANGE: Range<usize> = 0..2;
pub const TYPE_RANGE: Range<usize> = 2..4;
pub const HEADER_LEN: usize = 4;

pub const DISTANCE_RANGE: Range<usize> = 4..8;

pub const BATTERY_OFFSET: usize = 4;
pub const BATTERY_MAX_BYTES: usize = 2;

pub const ACCEL_X_RANGE: Range<usize> = 4..8;
pub const ACCEL_Y_RANGE: Range<usize> = 8..12;
pub const ACCEL_Z_OFFSET: usize = 12;
pub const ACCEL_AXIS_BYTES: usize = 2;

pub const GPS_LAT_RANGE: Range<usize> = 4..10;
pub const GPS_LNG_RANGE: Range<usize> = 10..16;
pub const GPS_ALT_RANGE: Range<usize> = 16..22;
pub const GPS_HACC_RANGE: Range<usize> = 22..30;
pub const GPS_VACC_RANGE: Range<usize> = 30..38;
pub const GPS_SAT_RANGE: Range<usize> = 38..40;
pub const GPS_COORD_BYTES: usize = 3;

pub const GPS_STANDARD_LEN: usize = 22;
pub const GPS_EXTENDED_LEN: usize = 40;

// Type tags as the reference reads them (base-10 header text).
pub const TYPE_DISTANCE: u8 = 82;
pub const TYPE_BATTERY: u8 = 78;
pub const TYPE_ACCELEROMETER: u8 = 71;
pub const TYPE_GPS: u8 = 88;

// The same tags read as raw wire bytes.
pub const TYPE_DISTANCE_WIRE: u8 = 0x82;
pub const TYPE_BATTERY_WIRE: u8 = 0x78;
pub const TYPE_ACCELEROMETER_WIRE: u8 = 0x71;
pub const TYPE_GPS_WIRE: u8 = 0x88;

pub const GPS_SCALE: f64 = 10_000.0;
pub const ALT_SCALE: f64 = 100.0;
pub const ACC_SCALE: f64 = 1_000.0;
