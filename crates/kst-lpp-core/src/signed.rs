/// Reinterpret a `bytes`-wide unsigned wire value as two's complement.
///
/// The wire format stores signed quantities as raw unsigned bit patterns of
/// a fixed width (2 bytes for accelerometer axes, 3 bytes for GPS
/// coordinates). `num` must already fit in `bytes` bytes; larger values
/// produce a meaningless result.
///
/// # Panics
/// Panics if `bytes` is not in `1..=4`.
///
/// # Examples
/// ```
/// use kst_lpp_core::signed_int;
///
/// assert_eq!(signed_int(0xFFFD, 2), -3);
/// assert_eq!(signed_int(0x05F371, 3), 390_001);
/// ```
pub fn signed_int(num: u32, bytes: u32) -> i64 {
    assert!((1..=4).contains(&bytes), "unsupported field width: {bytes}");
    let bits = bytes * 8;
    let mask = 1u64 << (bits - 1);
    let max = 1u64 << bits;
    let num = u64::from(num);

    if num & mask == mask {
        -((max - num) as i64)
    } else {
        num as i64
    }
}
