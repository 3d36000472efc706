#![no_main]

use codec::{decode_packed, decode_packed_with, encode_packed, CodecOptions, DecimalError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let strict = decode_packed(data);
    let lenient = decode_packed_with(data, &CodecOptions::lenient());

    if let Ok(value) = strict {
        assert_eq!(lenient, Ok(value));
    }

    match lenient {
        Ok(value) => {
            let encoded = encode_packed(value);
            assert!(encoded.len() <= data.len());
            assert_eq!(decode_packed(&encoded), Ok(value));
        }
        Err(DecimalError::EmptyInput { .. }) => assert!(data.is_empty()),
        Err(err) => assert_eq!(err.input(), Some(data)),
    }
});
