#![no_main]

use libfuzzer_sys::fuzz_target;
use nibble::{NibbleReader, NibbleWriter};

fuzz_target!(|data: &[u8]| {
    let mut reader = NibbleReader::new(data);
    let mut writer = NibbleWriter::with_capacity(data.len());

    // Alternate single reads and iterator steps until the reader runs dry.
    while !reader.is_empty() {
        let nibble = if reader.nibble_position() % 3 == 0 {
            reader.read_nibble().ok()
        } else {
            reader.next()
        };
        match nibble {
            Some(nibble) => writer.write_nibble(nibble),
            None => unreachable!("reader reported nibbles remaining"),
        }
    }

    assert!(reader.read_nibble().is_err());
    assert_eq!(writer.finish(), data);
});
