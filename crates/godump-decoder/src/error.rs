use godump_types::tag::RecordTag;
use godump_wire::WireError;

/// Errors that abort a decoding pass.
///
/// Every variant is fatal: the pass stops at the first error, nothing
/// decoded so far is returned alongside it, and no retry or
/// resynchronisation is attempted. The only non-error terminations are
/// the explicit EOF record (tag 0) and a stream that is exhausted
/// exactly at a record boundary.
///
/// ```text
///   DecodeError
///   ├── Truncated          ← varint/byte-string read ran out of stream
///   ├── UnknownTag         ← leading tag outside the closed set 0..=17
///   ├── Unimplemented      ← tag is named in the type table but has
///   │                        no defined layout (2, 11, 14, 15)
///   ├── FieldListTruncated ← stream ended on a field list's kind read
///   └── Wire               ← varint over 10 bytes, I/O failure
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The stream ended in the middle of a record's field sequence.
    #[error("truncated dump: unexpected end of stream at offset {offset}")]
    Truncated { offset: u64 },

    /// A leading tag value outside the closed set of defined records.
    /// Reports the offending raw value and where it was read.
    #[error("unknown record tag {tag} at offset {offset}")]
    UnknownTag { tag: u64, offset: u64 },

    /// The tag is one of the four kinds named in the type table with no
    /// defined field layout. Deliberately distinct from [`UnknownTag`]:
    /// the tag is valid, this decoder just has nothing to decode it with.
    ///
    /// [`UnknownTag`]: Self::UnknownTag
    #[error("record kind {} (tag {}) has no defined layout", .kind.name(), .kind.wire_id())]
    Unimplemented { kind: RecordTag },

    /// The stream ended while reading a nested field list's kind value.
    ///
    /// Kept separate from [`Truncated`] so the hard-error policy for
    /// this position (the original tooling silently stopped the list
    /// here) stays visible in diagnostics. Carries the kind of the
    /// record that owns the list, so a failure on a real dump says
    /// which record's list died.
    ///
    /// [`Truncated`]: Self::Truncated
    #[error("truncated field list in {} record: unexpected end of stream at offset {offset}", .owner.name())]
    FieldListTruncated { owner: RecordTag, offset: u64 },

    /// A wire-level failure other than plain truncation.
    #[error(transparent)]
    Wire(WireError),
}

impl From<WireError> for DecodeError {
    fn from(e: WireError) -> Self {
        match e {
            WireError::UnexpectedEof { offset } => Self::Truncated { offset },
            other => Self::Wire(other),
        }
    }
}
