#![no_main]

use libfuzzer_sys::fuzz_target;

use godump_wire::WireReader;

// Fuzz target: streaming uvarint reads.
//
// Drains arbitrary bytes through `try_read_uvarint` until a clean
// boundary or an error. Catches bugs in:
// - VarintTooLong (>10 continuation bytes)
// - Mid-varint truncation vs clean-boundary EOF
// - Offset accounting across consecutive reads
fuzz_target!(|data: &[u8]| {
    let mut reader = WireReader::new(data);
    while let Ok(Some(_)) = reader.try_read_uvarint() {}
    assert!(reader.offset() as usize <= data.len());
});
