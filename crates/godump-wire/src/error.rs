#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Varint encoding exceeded 10 bytes without terminating.
    #[error("varint too long: exceeded 10-byte limit")]
    VarintTooLong,

    /// Input ended before a complete varint, byte string, or header
    /// line could be read. The offset is the byte position from the
    /// start of the stream where the read gave out.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: u64 },

    /// I/O error from the underlying reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
