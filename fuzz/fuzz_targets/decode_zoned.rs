#![no_main]

use codec::{decode_zoned_with, encode_zoned_with, CodecOptions, DecimalError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the options, the rest is the field.
    let Some((&selector, field)) = data.split_first() else {
        return;
    };
    let options = match selector % 4 {
        0 => CodecOptions::new(),
        1 => CodecOptions::ebcdic(),
        2 => CodecOptions::lenient(),
        _ => CodecOptions::ebcdic().with_lenient_signs(true),
    };

    match decode_zoned_with(field, &options) {
        Ok(value) => {
            let encoded = encode_zoned_with(value, &options);
            assert!(encoded.len() <= field.len());
            assert_eq!(decode_zoned_with(&encoded, &options), Ok(value));
        }
        Err(DecimalError::EmptyInput { .. }) => assert!(field.is_empty()),
        Err(err) => assert_eq!(err.input(), Some(field)),
    }
});
