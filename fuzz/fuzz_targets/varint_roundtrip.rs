#![no_main]

use libfuzzer_sys::fuzz_target;

use godump_wire::varint::{MAX_UVARINT_BYTES, encode_uvarint};
use godump_wire::WireReader;

// Fuzz target: varint encode -> streaming decode roundtrip.
//
// Takes 8 bytes of fuzz input, interprets as a u64, encodes it as a
// LEB128 varint, then reads it back and asserts the value and the
// consumed length both match.
fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let value = u64::from_le_bytes(data[..8].try_into().unwrap());

    let mut buf = [0u8; MAX_UVARINT_BYTES];
    let encoded_len = encode_uvarint(value, &mut buf);

    let mut reader = WireReader::new(&buf[..encoded_len]);
    assert_eq!(reader.read_uvarint().unwrap(), value);
    assert_eq!(reader.offset() as usize, encoded_len);
});
