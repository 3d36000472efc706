use nibble::{parse_hex, HexDump, NibbleReader, NibbleWriter};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_nibble_roundtrip(nibbles in prop::collection::vec(0u8..=0x0F, 0..64)) {
        let mut writer = NibbleWriter::new();
        for nibble in &nibbles {
            writer.write_nibble(*nibble);
        }
        prop_assert_eq!(writer.nibbles_written(), nibbles.len());
        let bytes = writer.finish();
        prop_assert_eq!(bytes.len(), nibbles.len().div_ceil(2));

        let mut reader = NibbleReader::new(&bytes);
        for nibble in &nibbles {
            prop_assert_eq!(reader.read_nibble().unwrap(), *nibble);
        }
        if nibbles.len() % 2 == 1 {
            prop_assert_eq!(reader.read_nibble().unwrap(), 0);
        }
        prop_assert!(reader.is_empty());
        prop_assert!(reader.read_nibble().is_err());
    }

    #[test]
    fn prop_iterator_matches_reads(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let collected: Vec<u8> = NibbleReader::new(&bytes).collect();
        prop_assert_eq!(collected.len(), bytes.len() * 2);
        for (idx, byte) in bytes.iter().enumerate() {
            prop_assert_eq!(nibble::join(collected[idx * 2], collected[idx * 2 + 1]), *byte);
        }
    }

    #[test]
    fn prop_hex_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let text = HexDump(&bytes).to_string();
        prop_assert_eq!(text.len(), bytes.len() * 2);
        prop_assert_eq!(parse_hex(&text).unwrap(), bytes.clone());
        prop_assert_eq!(parse_hex(&text.to_lowercase()).unwrap(), bytes);
    }

    #[test]
    fn prop_parse_hex_never_panics(input in ".{0,32}") {
        let _ = parse_hex(&input);
    }
}
