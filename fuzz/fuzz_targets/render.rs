#![no_main]

use libfuzzer_sys::fuzz_target;

use godump_driver::DumpDriver;

// Fuzz target: decode + render end to end.
//
// Rendering must be total over every dump the decoder accepts, and a
// pure function of the input: two passes over the same bytes produce
// identical text.
fuzz_target!(|data: &[u8]| {
    if let Ok(first) = DumpDriver::render_to_string(data) {
        let second = DumpDriver::render_to_string(data).unwrap();
        assert_eq!(first, second);
    }
});
