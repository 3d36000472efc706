use codec::{
    decode_zoned, decode_zoned_with, encode_zoned, encode_zoned_into, CodecOptions, DecimalError,
    DecimalFormat,
};

#[test]
fn encode_known_values() {
    let cases: [(i64, &[u8]); 4] = [
        (0, &[0x30]),
        (-1, &[0x71]),
        (123, &[0x31, 0x32, 0x33]),
        (-123, &[0x31, 0x32, 0x73]),
    ];
    for (value, expected) in cases {
        assert_eq!(encode_zoned(value), expected, "encode {value}");
        assert_eq!(decode_zoned(expected).unwrap(), value, "decode {value}");
    }
}

#[test]
fn rejects_bad_zone() {
    let err = decode_zoned(&[0x31, 0x42, 0x33]).unwrap_err();
    assert!(matches!(err, DecimalError::InvalidZonePart { index: 1, .. }));
    assert!(err.to_string().ends_with("314233"));
}

#[test]
fn rejects_bad_sign() {
    let err = decode_zoned(&[0x31, 0x32, 0x43]).unwrap_err();
    assert_eq!(
        err,
        DecimalError::InvalidSignPart {
            format: DecimalFormat::Zoned,
            input: vec![0x31, 0x32, 0x43]
        }
    );
}

#[test]
fn rejects_bad_digit() {
    for bytes in [[0x31, 0x3A, 0x33], [0x31, 0x3A, 0x3B]] {
        let err = decode_zoned(&bytes).unwrap_err();
        assert!(
            matches!(err, DecimalError::InvalidDigitPart { index: 3, .. }),
            "unexpected {err:?}"
        );
        assert!(err.is_malformed());
    }
}

#[test]
fn twenty_nines_overflow() {
    let bytes = [0x39u8; 20];
    let err = decode_zoned(&bytes).unwrap_err();
    assert_eq!(
        err,
        DecimalError::Overflow {
            format: DecimalFormat::Zoned,
            input: bytes.to_vec()
        }
    );
    assert!(!err.is_malformed());
    assert!(err.to_string().contains(&"39".repeat(20)));
}

#[test]
fn malformed_beats_overflow() {
    let mut bytes = [0x39u8; 20];
    bytes[19] = 0x4A;
    assert!(matches!(
        decode_zoned(&bytes),
        Err(DecimalError::InvalidSignPart { .. })
    ));
}

#[test]
fn boundary_values() {
    let max = encode_zoned(i64::MAX);
    assert_eq!(max.len(), 19);
    assert_eq!(decode_zoned(&max).unwrap(), i64::MAX);

    let min = encode_zoned(i64::MIN);
    assert_eq!(*min.last().unwrap(), 0x78);
    assert_eq!(decode_zoned(&min).unwrap(), i64::MIN);

    // i64::MAX + 1 as a positive zoned number.
    let mut past_max = min;
    *past_max.last_mut().unwrap() = 0x38;
    assert!(matches!(
        decode_zoned(&past_max),
        Err(DecimalError::Overflow { .. })
    ));
}

#[test]
fn fixed_width_record_field() {
    let options = CodecOptions::ebcdic();
    let mut record = [0x40u8; 12];
    encode_zoned_into(-98_765, &mut record[2..9], &options).unwrap();
    assert_eq!(
        &record[2..9],
        &[0xF0, 0xF0, 0xF9, 0xF8, 0xF7, 0xF6, 0xD5]
    );
    assert_eq!(record[..2], [0x40, 0x40]);
    assert_eq!(record[9..], [0x40, 0x40, 0x40]);
    assert_eq!(decode_zoned_with(&record[2..9], &options).unwrap(), -98_765);
}
