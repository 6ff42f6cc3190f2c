use crate::memstats::MemStatsRecord;
use crate::tag::RecordTag;

/// One pointer-bearing location inside the raw content of the record
/// that owns the list: a `(type-tag, byte-offset)` pair.
///
/// On the wire a field list is a repeated sequence of these pairs,
/// terminated by a sentinel whose kind is zero. The sentinel is not
/// part of the decoded sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub kind: u64,
    pub offset: u64,
}

/// A heap object: address, raw contents, and its pointer field list.
///
/// Only the length of `contents` is meaningful to consumers; the
/// renderer never prints the bytes themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectRecord {
    pub addr: u64,
    pub contents: Vec<u8>,
    pub fields: Vec<Field>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeRecord {
    pub addr: u64,
    pub size: u64,
    pub name: String,
    /// Non-zero when an interface holding this type points at an itab
    /// rather than directly at the type descriptor.
    pub type_to_itab: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoroutineRecord {
    pub addr: u64,
    pub stack_top: u64,
    pub goid: u64,
    pub creation_pc: u64,
    pub status: u64,
    pub created_by_system: u64,
    pub background: u64,
    pub last_start_waiting_ns: u64,
    pub wait_reason: String,
    pub frame_context: u64,
    pub os_thread: u64,
    pub top_defer: u64,
    pub top_panic: u64,
}

impl GoroutineRecord {
    /// Resolve a goroutine status value against the scheduler's status
    /// table. Values outside the table (including the unused 2) have no
    /// resolved name and render as their bare number.
    pub fn status_name(status: u64) -> Option<&'static str> {
        match status {
            0 => Some("idle"),
            1 => Some("runnable"),
            3 => Some("syscall"),
            4 => Some("waiting"),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackFrameRecord {
    pub stack_ptr: u64,
    pub depth: u64,
    pub child_stack_ptr: u64,
    /// Raw frame bytes; length meaningful only.
    pub contents: Vec<u8>,
    pub entry_pc: u64,
    pub current_pc: u64,
    pub continuation_pc: u64,
    pub function_name: String,
    pub fields: Vec<Field>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpParamsRecord {
    pub big_endian: u64,
    pub pointer_size: u64,
    pub heap_start: u64,
    pub heap_end: u64,
    pub command_line: String,
    pub environment: String,
    pub cpu_count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalizerRecord {
    pub object_addr: u64,
    pub funcval: u64,
    pub pc: u64,
    pub arg_type: u64,
    pub object_type: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItabRecord {
    pub addr: u64,
    pub type_addr: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OsThreadRecord {
    pub descriptor_addr: u64,
    pub internal_id: u64,
    pub os_id: u64,
}

/// A data or bss segment: both kinds share one layout and differ only
/// in their tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentRecord {
    pub start_addr: u64,
    /// Raw segment bytes; length meaningful only.
    pub contents: Vec<u8>,
    pub fields: Vec<Field>,
}

/// One stack frame of an allocation profile's call trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileFrame {
    pub function_name: String,
    pub file_name: String,
    pub line: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocProfileRecord {
    pub record_id: u64,
    pub object_size: u64,
    pub frames: Vec<ProfileFrame>,
    pub alloc_count: u64,
    pub free_count: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocSampleRecord {
    pub object_addr: u64,
    pub profile_id: u64,
}

/// One decoded record from the dump stream.
///
/// The four kinds with no defined layout (OtherRoot, QueuedFinalizer,
/// DeferRecord, PanicRecord) have no variant here: encountering one of
/// their tags fails the pass before any record is constructed, so a
/// `Record` value always holds a fully decoded layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    /// The explicit end-of-stream marker (tag 0).
    Eof,
    Object(ObjectRecord),
    Type(TypeRecord),
    Goroutine(GoroutineRecord),
    StackFrame(StackFrameRecord),
    DumpParams(DumpParamsRecord),
    Finalizer(FinalizerRecord),
    Itab(ItabRecord),
    OsThread(OsThreadRecord),
    MemStats(MemStatsRecord),
    DataSegment(SegmentRecord),
    BssSegment(SegmentRecord),
    AllocProfile(AllocProfileRecord),
    AllocSample(AllocSampleRecord),
}

impl Record {
    /// The tag this record was decoded from.
    pub fn tag(&self) -> RecordTag {
        match self {
            Self::Eof => RecordTag::Eof,
            Self::Object(_) => RecordTag::Object,
            Self::Type(_) => RecordTag::Type,
            Self::Goroutine(_) => RecordTag::Goroutine,
            Self::StackFrame(_) => RecordTag::StackFrame,
            Self::DumpParams(_) => RecordTag::DumpParams,
            Self::Finalizer(_) => RecordTag::RegisteredFinalizer,
            Self::Itab(_) => RecordTag::Itab,
            Self::OsThread(_) => RecordTag::OsThread,
            Self::MemStats(_) => RecordTag::MemStats,
            Self::DataSegment(_) => RecordTag::DataSegment,
            Self::BssSegment(_) => RecordTag::BssSegment,
            Self::AllocProfile(_) => RecordTag::AllocProfile,
            Self::AllocSample(_) => RecordTag::AllocSample,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_table_resolves_defined_values() {
        assert_eq!(GoroutineRecord::status_name(0), Some("idle"));
        assert_eq!(GoroutineRecord::status_name(1), Some("runnable"));
        assert_eq!(GoroutineRecord::status_name(3), Some("syscall"));
        assert_eq!(GoroutineRecord::status_name(4), Some("waiting"));
    }

    #[test]
    fn status_table_gaps_have_no_name() {
        assert_eq!(GoroutineRecord::status_name(2), None);
        assert_eq!(GoroutineRecord::status_name(5), None);
        assert_eq!(GoroutineRecord::status_name(u64::MAX), None);
    }

    #[test]
    fn record_tag_projection() {
        let record = Record::Itab(ItabRecord {
            addr: 0x10,
            type_addr: 0x20,
        });
        assert_eq!(record.tag(), RecordTag::Itab);
        assert_eq!(Record::Eof.tag(), RecordTag::Eof);
    }
}
