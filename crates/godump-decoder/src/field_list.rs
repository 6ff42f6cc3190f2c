use std::io::Read;

use godump_types::record::Field;
use godump_types::tag::RecordTag;
use godump_wire::{WireError, WireReader};

use crate::error::DecodeError;

/// Decode one field list: repeated `(kind, offset)` varint pairs until
/// a sentinel pair whose kind is zero. The sentinel is consumed but not
/// emitted. `owner` is the kind of the record the list belongs to, used
/// only for diagnostics.
///
/// # Errors
///
/// - [`DecodeError::FieldListTruncated`] if the stream ends on a kind
///   read. This position gets its own error kind: a list that just
///   stops is indistinguishable on the wire from a list whose
///   terminator was cut off, and the error must say which record's
///   list died.
/// - [`DecodeError::Truncated`] if the stream ends on an offset read,
///   like any other mid-record truncation.
pub fn read_field_list<R: Read>(
    reader: &mut WireReader<R>,
    owner: RecordTag,
) -> Result<Vec<Field>, DecodeError> {
    let mut fields = Vec::new();
    loop {
        let kind = reader.read_uvarint().map_err(|e| match e {
            WireError::UnexpectedEof { offset } => DecodeError::FieldListTruncated { owner, offset },
            other => other.into(),
        })?;
        if kind == 0 {
            return Ok(fields);
        }

        let offset = reader.read_uvarint()?;
        fields.push(Field { kind, offset });
    }
}
