use std::thread;

use kst_lpp_core::samples::SAMPLES;
use kst_lpp_core::{
    DecodeError, DecodeOptions, DecodedMessage, ErrorKind, HeaderRadix, MessageType, Outcome,
    decode, decode_frame, decode_report,
};

const BODY: &str = "05F371F006170372EE00018D800000FA3604";

fn payload(tag: &str, body_len: usize) -> String {
    format!("01{tag}{}", &BODY[..body_len])
}

#[test]
fn dispatch_matrix_matches_table() {
    let cases: &[(&str, usize, Option<MessageType>)] = &[
        ("82", 4, Some(MessageType::Distance)),
        ("82", 36, Some(MessageType::Distance)),
        ("78", 2, Some(MessageType::Battery)),
        ("78", 4, Some(MessageType::Battery)),
        ("78", 20, Some(MessageType::Battery)),
        ("71", 12, Some(MessageType::Accelerometer)),
        ("88", 18, Some(MessageType::Gps)),
        ("88", 36, Some(MessageType::Gps)),
    ];
    for (tag, body_len, expected) in cases {
        let input = payload(tag, *body_len);
        let message = decode(&input).unwrap_or_else(|err| panic!("{input}: {err}"));
        assert_eq!(Some(message.message_type()), *expected, "{input}");
    }
}

#[test]
fn gps_shape_follows_length() {
    assert!(matches!(
        decode(&payload("88", 18)).unwrap(),
        DecodedMessage::GpsStandard(_)
    ));
    assert!(matches!(
        decode(&payload("88", 36)).unwrap(),
        DecodedMessage::GpsExtended(_)
    ));
}

#[test]
fn every_other_gps_length_is_unsupported() {
    for body_len in (0..=BODY.len()).step_by(2) {
        if body_len == 18 || body_len == 36 {
            continue;
        }
        let err = decode(&payload("88", body_len)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedLength, "body {body_len}");
        assert!(!err.to_string().is_empty());
    }
}

#[test]
fn every_unrecognized_tag_is_unknown() {
    for tag in 0..=99u8 {
        if [82, 78, 71, 88].contains(&tag) {
            continue;
        }
        let input = format!("01{tag:02}0036");
        let err = decode(&input).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownType {
                code: tag,
                radix: HeaderRadix::Decimal
            }
        );
        assert!(!err.to_string().is_empty());
    }
}

#[test]
fn malformed_inputs_are_typed_errors() {
    for input in ["", "0", "018", "0182003", "01", "0182", "01820G36", "01 820036", "é1820036"] {
        let err = decode(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput, "{input:?}");
    }
}

#[test]
fn short_accelerometer_tail_is_rejected() {
    for body_len in [8, 10] {
        let err = decode(&format!("0171{}", &"0000FFFD03EB"[..body_len])).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TooShort {
                needed: 16,
                actual: body_len + 4
            }
        );
    }
}

#[test]
fn overwide_accelerometer_tail_is_rejected() {
    let err = decode("01710000FFFD03EB00").unwrap_err();
    assert!(matches!(err, DecodeError::FieldTooWide { field: "accelZ", .. }));
}

#[test]
fn lowercase_payload_decodes_the_same() {
    for sample in SAMPLES {
        let upper = decode(sample.payload).unwrap();
        let lower = decode(&sample.payload.to_ascii_lowercase()).unwrap();
        assert_eq!(upper, lower, "{}", sample.label);
    }
}

#[test]
fn decoding_is_idempotent() {
    let options = DecodeOptions::default();
    for sample in SAMPLES {
        assert_eq!(
            decode_report(sample.payload, &options),
            decode_report(sample.payload, &options)
        );
    }
    for input in ["", "0199", "018805"] {
        assert_eq!(decode(input), decode(input));
    }
}

#[test]
fn hex_radix_accepts_the_same_samples() {
    let options = DecodeOptions::with_header_radix(HeaderRadix::Hex);
    for sample in SAMPLES {
        let decimal = decode(sample.payload).unwrap();
        let frame = decode_frame(sample.payload, &options).unwrap();
        assert_eq!(frame.message, decimal, "{}", sample.label);
        assert_eq!(
            frame.header.type_tag,
            decimal.message_type().code(HeaderRadix::Hex)
        );
    }
}

#[test]
fn concurrent_decoding_needs_no_synchronization() {
    let expected: Vec<Outcome> = SAMPLES
        .iter()
        .map(|sample| Outcome::from(decode(sample.payload)))
        .collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    SAMPLES
                        .iter()
                        .map(|sample| Outcome::from(decode(sample.payload)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("decoder thread"), expected);
        }
    });
}
