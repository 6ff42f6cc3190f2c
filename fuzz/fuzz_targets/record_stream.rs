#![no_main]

use libfuzzer_sys::fuzz_target;

use godump_decoder::RecordStream;
use godump_wire::WireReader;

// Fuzz target: incremental record stream.
//
// Drives `RecordStream` record by record over arbitrary bytes (no
// header line; the stream layer starts at the first tag). Asserts the
// stream is fused: after the first `Err` or `None` it must keep
// returning `None`.
fuzz_target!(|data: &[u8]| {
    let mut stream = RecordStream::new(WireReader::new(data));

    loop {
        match stream.next_record() {
            Ok(Some(_)) => {}
            Ok(None) => break,
            Err(_) => {
                assert!(matches!(stream.next_record(), Ok(None)));
                break;
            }
        }
    }
    assert!(matches!(stream.next_record(), Ok(None)));
});
