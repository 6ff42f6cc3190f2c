use std::io::Read;

use crate::error::WireError;
use crate::varint::MAX_UVARINT_BYTES;

/// Forward-only primitive reader over a byte stream.
///
/// `WireReader` owns the stream position for an entire decoding pass:
/// every read advances it, nothing is ever re-read, and the current
/// byte offset is available for error reporting. Callers that read
/// from a file should wrap it in a `BufReader` first — the reader
/// consumes one byte at a time.
///
/// Three primitives cover the whole dump grammar:
///
/// ```text
///   read_uvarint()      unsigned LEB128 integer
///   read_bytes()        varint length L, then exactly L raw bytes
///   read_header_line()  raw bytes up to and excluding '\n' (used once)
/// ```
pub struct WireReader<R> {
    inner: R,
    offset: u64,
}

impl<R: Read> WireReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    /// Byte offset from the start of the stream (bytes consumed so far).
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Read one byte, or `None` if the stream is exhausted.
    fn next_byte(&mut self) -> Result<Option<u8>, WireError> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.offset += 1;
                    return Ok(Some(byte[0]));
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(WireError::Io(e)),
            }
        }
    }

    /// Decode one unsigned LEB128 varint from the stream.
    ///
    /// # Errors
    ///
    /// - [`WireError::UnexpectedEof`] if the stream ends before a
    ///   terminating (non-continuation) byte is seen.
    /// - [`WireError::VarintTooLong`] past the 10-byte limit.
    pub fn read_uvarint(&mut self) -> Result<u64, WireError> {
        match self.try_read_uvarint()? {
            Some(value) => Ok(value),
            None => Err(WireError::UnexpectedEof {
                offset: self.offset,
            }),
        }
    }

    /// Decode one varint, or `Ok(None)` if the stream is already
    /// exhausted before the first byte.
    ///
    /// This is the record dispatcher's tag read: a stream that ends
    /// exactly at a record boundary is normal end-of-input, while a
    /// stream that ends mid-varint is still
    /// [`WireError::UnexpectedEof`].
    pub fn try_read_uvarint(&mut self) -> Result<Option<u64>, WireError> {
        let Some(first) = self.next_byte()? else {
            return Ok(None);
        };

        let mut result = u64::from(first & 0x7F);
        let mut shift: u32 = 7;
        let mut byte = first;
        let mut len = 1;

        while byte & 0x80 != 0 {
            if len >= MAX_UVARINT_BYTES {
                return Err(WireError::VarintTooLong);
            }
            byte = self.next_byte()?.ok_or(WireError::UnexpectedEof {
                offset: self.offset,
            })?;
            result |= u64::from(byte & 0x7F) << shift;
            shift += 7;
            len += 1;
        }

        Ok(Some(result))
    }

    /// Read one length-prefixed byte string: a varint length L followed
    /// by exactly L raw bytes.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than L bytes remain. The
    /// read is incremental, so a truncated stream with a bogus huge
    /// length prefix fails without allocating the claimed size.
    pub fn read_bytes(&mut self) -> Result<Vec<u8>, WireError> {
        let len = self.read_uvarint()?;

        let mut buf = Vec::new();
        let got = (&mut self.inner).take(len).read_to_end(&mut buf)? as u64;
        self.offset += got;

        if got < len {
            return Err(WireError::UnexpectedEof {
                offset: self.offset,
            });
        }
        Ok(buf)
    }

    /// Read one length-prefixed byte string and decode it as text.
    ///
    /// The producer is trusted to emit UTF-8; decoding is lossy so a
    /// stray byte degrades one character rather than failing the pass.
    pub fn read_string(&mut self) -> Result<String, WireError> {
        Ok(String::from_utf8_lossy(&self.read_bytes()?).into_owned())
    }

    /// Read raw bytes up to and excluding a line terminator, decoded as
    /// text. A trailing `'\r'` is stripped. Used exactly once per dump,
    /// for the version header line.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if the stream ends before a
    /// terminator is seen — a dump without a header line is not a dump.
    pub fn read_header_line(&mut self) -> Result<String, WireError> {
        let mut line = Vec::new();
        loop {
            match self.next_byte()? {
                None => {
                    return Err(WireError::UnexpectedEof {
                        offset: self.offset,
                    });
                }
                Some(b'\n') => break,
                Some(byte) => line.push(byte),
            }
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}
