use nibble::{parse_hex, HexDump, NibbleError, NibbleReader, NibbleWriter};

#[test]
fn writer_reader_roundtrip_mixed() {
    let mut writer = NibbleWriter::new();
    for nibble in [0x3, 0x1, 0x3, 0x2, 0x7, 0x3] {
        writer.write_nibble(nibble);
    }
    let bytes = writer.finish();
    assert_eq!(bytes, vec![0x31, 0x32, 0x73]);

    let mut reader = NibbleReader::new(&bytes);
    assert_eq!(reader.by_ref().take(2).collect::<Vec<_>>(), vec![0x3, 0x1]);
    assert_eq!(reader.read_nibble().unwrap(), 0x3);
    assert_eq!(reader.read_nibble().unwrap(), 0x2);
    assert_eq!(reader.read_nibble().unwrap(), 0x7);
    assert_eq!(reader.read_nibble().unwrap(), 0x3);
    assert!(reader.is_empty());
}

#[test]
fn reader_stops_at_end() {
    let bytes = [0x1D];
    let mut reader = NibbleReader::new(&bytes);
    reader.read_nibble().unwrap();
    reader.read_nibble().unwrap();
    assert_eq!(
        reader.read_nibble().unwrap_err(),
        NibbleError::UnexpectedEof {
            requested: 1,
            available: 0
        }
    );
}

#[test]
fn hex_dump_matches_parse() {
    let bytes = parse_hex("0x99 99 99 99 99 99 99 99 99 9D").unwrap();
    assert_eq!(bytes.len(), 10);
    assert_eq!(HexDump(&bytes).to_string(), "9999999999999999999D");
}
