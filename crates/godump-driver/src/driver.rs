use std::io::{Read, Write};

use godump_decoder::RecordStream;
use godump_wire::WireReader;

use crate::error::DriverError;
use crate::render::TextRenderer;

/// Drives one decoding pass end to end.
///
/// The driver owns the input stream for the whole pass: it reads the
/// one-line version header, emits it, then pulls records from the
/// [`RecordStream`] to exhaustion, writing a blank line and the
/// rendered block for each. The stream is released on every exit path
/// — normal termination and first fatal error alike.
pub struct DumpDriver;

impl DumpDriver {
    /// Decode `input` and write the textual rendering to `out`.
    ///
    /// File-backed callers should pass a `BufReader`; the wire layer
    /// reads a byte at a time.
    ///
    /// # Errors
    ///
    /// The first fatal [`DecodeError`], or an I/O error from `out`.
    /// Output written before the failure is not rolled back — the
    /// error is reported instead of continuing with best-effort text.
    ///
    /// [`DecodeError`]: godump_decoder::DecodeError
    pub fn run<R: Read, W: Write>(input: R, out: &mut W) -> Result<(), DriverError> {
        let mut reader = WireReader::new(input);

        let header = reader.read_header_line()?;
        writeln!(out, "{header}")?;

        let mut stream = RecordStream::new(reader);
        while let Some(record) = stream.next_record()? {
            writeln!(out)?;
            out.write_all(TextRenderer::render_record(&record).as_bytes())?;
        }

        Ok(())
    }

    /// Render a whole in-memory dump to a `String`.
    ///
    /// Decoding is a pure function of the input bytes: the same slice
    /// always renders to the identical string.
    pub fn render_to_string(bytes: &[u8]) -> Result<String, DriverError> {
        let mut out = Vec::new();
        Self::run(bytes, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}
