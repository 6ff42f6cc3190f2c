#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full dump decoder entry point.
//
// Calls `DumpDecoder::decode(data)` on arbitrary input bytes.
// Catches bugs in:
// - Header line scanning (missing newline, CR stripping)
// - Tag dispatch (unknown tags, undefined-layout tags)
// - Per-record field sequences (truncation at every position)
// - Byte-string length handling (oversized length claims)
// - Field list sentinel detection
// - EOF record vs natural end-of-stream
fuzz_target!(|data: &[u8]| {
    let _ = godump_decoder::DumpDecoder::decode(data);
});
