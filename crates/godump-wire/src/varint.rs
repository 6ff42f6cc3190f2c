/// Longest possible LEB128 encoding of a `u64`: ceil(64 / 7) bytes.
pub const MAX_UVARINT_BYTES: usize = 10;

/// Write `value` as an unsigned LEB128 varint into `buf`, returning the
/// number of bytes written (1 to [`MAX_UVARINT_BYTES`]).
///
/// This workspace only ever reads dumps, so encoding is not a
/// production path: it exists for the tests, benchmarks, and fuzz
/// harnesses that synthesise tag and length bytes for [`WireReader`]
/// to consume. Decoding lives on the reader itself.
///
/// # Panics
///
/// Panics if `buf` cannot hold the encoding; a [`MAX_UVARINT_BYTES`]
/// buffer always can.
///
/// [`WireReader`]: crate::WireReader
pub fn encode_uvarint(mut value: u64, buf: &mut [u8]) -> usize {
    let mut len = 0;
    while value >= 0x80 {
        buf[len] = (value as u8) | 0x80;
        value >>= 7;
        len += 1;
    }
    buf[len] = value as u8;
    len + 1
}
