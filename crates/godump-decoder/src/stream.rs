use std::io::Read;

use godump_types::record::Record;
use godump_types::tag::RecordTag;
use godump_wire::WireReader;

use crate::error::DecodeError;
use crate::records;

/// Lazy, finite, non-restartable sequence of records from one stream.
///
/// Each iteration reads one leading tag varint and dispatches it:
///
/// ```text
///   stream exhausted at the boundary → natural end (Ok(None))
///   tag 0                            → Record::Eof, then fused
///   tag in 1..=17 with a layout      → decode and yield the record
///   tag 2 / 11 / 14 / 15             → Unimplemented, fatal
///   anything else                    → UnknownTag, fatal
/// ```
///
/// The stream is fused: after the EOF record, natural end, or the first
/// error, every further call returns `Ok(None)`. The caller reads the
/// version header line before constructing the stream — the reader is
/// taken positioned at the first tag byte.
pub struct RecordStream<R> {
    reader: WireReader<R>,
    done: bool,
}

impl<R: Read> RecordStream<R> {
    pub fn new(reader: WireReader<R>) -> Self {
        Self {
            reader,
            done: false,
        }
    }

    /// Byte offset of the underlying stream (for diagnostics).
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.reader.offset()
    }

    /// Decode the next record.
    ///
    /// Returns `Ok(Some(record))` for each decoded record (the explicit
    /// end marker included, as [`Record::Eof`]), `Ok(None)` once the
    /// sequence has terminated, or the first fatal [`DecodeError`].
    pub fn next_record(&mut self) -> Result<Option<Record>, DecodeError> {
        if self.done {
            return Ok(None);
        }

        let tag_offset = self.reader.offset();
        let tag = match self.reader.try_read_uvarint() {
            // Stream exhausted exactly at a record boundary: the
            // expected way for a dump without an explicit EOF to end.
            Ok(None) => {
                self.done = true;
                return Ok(None);
            }
            Ok(Some(tag)) => tag,
            Err(e) => {
                self.done = true;
                return Err(e.into());
            }
        };

        let Some(kind) = RecordTag::from_wire(tag) else {
            self.done = true;
            return Err(DecodeError::UnknownTag {
                tag,
                offset: tag_offset,
            });
        };

        match self.decode_record(kind) {
            Ok(record) => {
                if matches!(record, Record::Eof) {
                    self.done = true;
                }
                Ok(Some(record))
            }
            Err(e) => {
                self.done = true;
                Err(e)
            }
        }
    }

    /// Fixed tag → decoder dispatch.
    fn decode_record(&mut self, kind: RecordTag) -> Result<Record, DecodeError> {
        let r = &mut self.reader;
        match kind {
            RecordTag::Eof => Ok(Record::Eof),
            RecordTag::Object => Ok(Record::Object(records::object(r)?)),
            RecordTag::Type => Ok(Record::Type(records::type_descriptor(r)?)),
            RecordTag::Goroutine => Ok(Record::Goroutine(records::goroutine(r)?)),
            RecordTag::StackFrame => Ok(Record::StackFrame(records::stack_frame(r)?)),
            RecordTag::DumpParams => Ok(Record::DumpParams(records::dump_params(r)?)),
            RecordTag::RegisteredFinalizer => Ok(Record::Finalizer(records::finalizer(r)?)),
            RecordTag::Itab => Ok(Record::Itab(records::itab(r)?)),
            RecordTag::OsThread => Ok(Record::OsThread(records::os_thread(r)?)),
            RecordTag::MemStats => Ok(Record::MemStats(records::mem_stats(r)?)),
            RecordTag::DataSegment => {
                Ok(Record::DataSegment(records::segment(r, RecordTag::DataSegment)?))
            }
            RecordTag::BssSegment => {
                Ok(Record::BssSegment(records::segment(r, RecordTag::BssSegment)?))
            }
            RecordTag::AllocProfile => Ok(Record::AllocProfile(records::alloc_profile(r)?)),
            RecordTag::AllocSample => Ok(Record::AllocSample(records::alloc_sample(r)?)),

            RecordTag::OtherRoot
            | RecordTag::QueuedFinalizer
            | RecordTag::DeferRecord
            | RecordTag::PanicRecord => Err(DecodeError::Unimplemented { kind }),
        }
    }
}

impl<R: Read> Iterator for RecordStream<R> {
    type Item = Result<Record, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(bytes: &[u8]) -> RecordStream<&[u8]> {
        RecordStream::new(WireReader::new(bytes))
    }

    #[test]
    fn natural_end_at_boundary_is_success() {
        let mut s = stream(&[]);
        assert!(s.next_record().unwrap().is_none());
        // Fused
        assert!(s.next_record().unwrap().is_none());
    }

    #[test]
    fn explicit_eof_yields_marker_then_fuses() {
        // EOF tag, then trailing garbage that must never be read
        let mut s = stream(&[0x00, 0xFF, 0xFF]);
        assert_eq!(s.next_record().unwrap(), Some(Record::Eof));
        assert!(s.next_record().unwrap().is_none());
        assert_eq!(s.offset(), 1);
    }

    #[test]
    fn unknown_tag_reports_raw_value_and_offset() {
        let mut s = stream(&[0x12]); // 18
        assert!(matches!(
            s.next_record(),
            Err(DecodeError::UnknownTag { tag: 18, offset: 0 })
        ));
        // Fused after the error
        assert!(s.next_record().unwrap().is_none());
    }

    #[test]
    fn unimplemented_kinds_are_distinct_from_unknown() {
        for tag in [2u8, 11, 14, 15] {
            let buf = [tag];
            let mut s = stream(&buf);
            match s.next_record() {
                Err(DecodeError::Unimplemented { kind }) => {
                    assert_eq!(kind.wire_id(), u64::from(tag));
                }
                other => panic!("tag {tag}: expected Unimplemented, got {other:?}"),
            }
        }
    }

    #[test]
    fn decodes_records_until_eof() {
        // itab, itab, EOF
        let mut s = stream(&[0x08, 0x01, 0x02, 0x08, 0x03, 0x04, 0x00]);
        let records: Vec<_> = (&mut s).collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2], Record::Eof);
    }

    #[test]
    fn truncation_mid_record_is_fatal() {
        // itab with only one of two addresses
        let mut s = stream(&[0x08, 0x01]);
        assert!(matches!(
            s.next_record(),
            Err(DecodeError::Truncated { offset: 2 })
        ));
    }

    #[test]
    fn iterator_yields_error_once() {
        let s = stream(&[0x12]);
        let items: Vec<_> = s.collect();
        assert_eq!(items.len(), 1);
        assert!(items[0].is_err());
    }
}
