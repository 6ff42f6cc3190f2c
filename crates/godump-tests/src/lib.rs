//! Test-support dump builder.
//!
//! Synthesises heap dump byte streams for the integration tests and
//! benchmarks: a header line, then raw varints, length-prefixed
//! strings, and field lists, appended in exactly the order the caller
//! asks for — including deliberately malformed sequences.

use godump_wire::varint::{MAX_UVARINT_BYTES, encode_uvarint};

/// Byte-level builder for heap dump streams.
///
/// The builder is format-unaware on purpose: it writes whatever
/// primitives it is told to, so tests can express both well-formed
/// records and truncated or malformed streams with the same API.
///
/// ```
/// use godump_tests::DumpBuilder;
///
/// let bytes = DumpBuilder::new("go1.5 heap dump")
///     .tag(8)        // itab
///     .uvarint(0x10) // addr
///     .uvarint(0x20) // type addr
///     .eof()
///     .build();
/// assert_eq!(bytes, b"go1.5 heap dump\n\x08\x10\x20\x00");
/// ```
pub struct DumpBuilder {
    buf: Vec<u8>,
}

impl DumpBuilder {
    /// Start a dump with the given version header line.
    pub fn new(header: &str) -> Self {
        let mut buf = Vec::from(header.as_bytes());
        buf.push(b'\n');
        Self { buf }
    }

    /// Append one unsigned varint.
    pub fn uvarint(mut self, value: u64) -> Self {
        let mut scratch = [0u8; MAX_UVARINT_BYTES];
        let len = encode_uvarint(value, &mut scratch);
        self.buf.extend_from_slice(&scratch[..len]);
        self
    }

    /// Append one record tag (just a varint, named for readability).
    pub fn tag(self, tag: u64) -> Self {
        self.uvarint(tag)
    }

    /// Append one length-prefixed byte string.
    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self = self.uvarint(bytes.len() as u64);
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Append one length-prefixed text string.
    pub fn string(self, s: &str) -> Self {
        self.bytes(s.as_bytes())
    }

    /// Append one field list entry.
    pub fn field(self, kind: u64, offset: u64) -> Self {
        self.uvarint(kind).uvarint(offset)
    }

    /// Terminate a field list with the zero-kind sentinel.
    pub fn end_fields(self) -> Self {
        self.uvarint(0)
    }

    /// Append the explicit end-of-stream tag.
    pub fn eof(self) -> Self {
        self.uvarint(0)
    }

    /// Append raw bytes verbatim (for malformed-input tests).
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}
