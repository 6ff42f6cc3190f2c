/// Record kind identifiers.
///
/// Each variant maps to the leading varint tag of one record in the
/// `heapdump15`–`heapdump17` stream. The set is closed: a tag outside
/// 0..=17 is a fatal decode error, never a skippable unknown. Four of
/// the named kinds (OtherRoot, QueuedFinalizer, DeferRecord,
/// PanicRecord) appear in the format's type table but have no defined
/// field layout in this revision — they parse as tags but cannot be
/// decoded.
///
/// ```text
/// ┌─────┬─────────────────────┬─────────┬─────────────────────────────┐
/// │ Tag │ Variant             │ Layout? │ Rendering name              │
/// ├─────┼─────────────────────┼─────────┼─────────────────────────────┤
/// │  0  │ Eof                 │ yes     │ EOF                         │
/// │  1  │ Object              │ yes     │ object                      │
/// │  2  │ OtherRoot           │ no      │ otherroot                   │
/// │  3  │ Type                │ yes     │ type                        │
/// │  4  │ Goroutine           │ yes     │ goroutine                   │
/// │  5  │ StackFrame          │ yes     │ stack frame                 │
/// │  6  │ DumpParams          │ yes     │ dump params                 │
/// │  7  │ RegisteredFinalizer │ yes     │ registered finalizer        │
/// │  8  │ Itab                │ yes     │ itab                        │
/// │  9  │ OsThread            │ yes     │ OS thread                   │
/// │ 10  │ MemStats            │ yes     │ mem stats                   │
/// │ 11  │ QueuedFinalizer     │ no      │ queued finalizer            │
/// │ 12  │ DataSegment         │ yes     │ data segment                │
/// │ 13  │ BssSegment          │ yes     │ bss segment                 │
/// │ 14  │ DeferRecord         │ no      │ defer record                │
/// │ 15  │ PanicRecord         │ no      │ panic record                │
/// │ 16  │ AllocProfile        │ yes     │ alloc/free profile record   │
/// │ 17  │ AllocSample         │ yes     │ alloc stack trace sample    │
/// └─────┴─────────────────────┴─────────┴─────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordTag {
    Eof,
    Object,
    OtherRoot,
    Type,
    Goroutine,
    StackFrame,
    DumpParams,
    RegisteredFinalizer,
    Itab,
    OsThread,
    MemStats,
    QueuedFinalizer,
    DataSegment,
    BssSegment,
    DeferRecord,
    PanicRecord,
    AllocProfile,
    AllocSample,
}

impl RecordTag {
    /// Parse a leading tag varint into a [`RecordTag`].
    ///
    /// Returns `None` for any value outside the closed set 0..=17 —
    /// the caller reports that as an unknown-tag failure, it is never
    /// carried forward.
    pub fn from_wire(tag: u64) -> Option<Self> {
        match tag {
            0 => Some(Self::Eof),
            1 => Some(Self::Object),
            2 => Some(Self::OtherRoot),
            3 => Some(Self::Type),
            4 => Some(Self::Goroutine),
            5 => Some(Self::StackFrame),
            6 => Some(Self::DumpParams),
            7 => Some(Self::RegisteredFinalizer),
            8 => Some(Self::Itab),
            9 => Some(Self::OsThread),
            10 => Some(Self::MemStats),
            11 => Some(Self::QueuedFinalizer),
            12 => Some(Self::DataSegment),
            13 => Some(Self::BssSegment),
            14 => Some(Self::DeferRecord),
            15 => Some(Self::PanicRecord),
            16 => Some(Self::AllocProfile),
            17 => Some(Self::AllocSample),
            _ => None,
        }
    }

    /// Return the wire tag value for this record kind.
    pub fn wire_id(self) -> u64 {
        match self {
            Self::Eof => 0,
            Self::Object => 1,
            Self::OtherRoot => 2,
            Self::Type => 3,
            Self::Goroutine => 4,
            Self::StackFrame => 5,
            Self::DumpParams => 6,
            Self::RegisteredFinalizer => 7,
            Self::Itab => 8,
            Self::OsThread => 9,
            Self::MemStats => 10,
            Self::QueuedFinalizer => 11,
            Self::DataSegment => 12,
            Self::BssSegment => 13,
            Self::DeferRecord => 14,
            Self::PanicRecord => 15,
            Self::AllocProfile => 16,
            Self::AllocSample => 17,
        }
    }

    /// Human-readable kind name, as used in the `Type: <name>` marker
    /// of the textual rendering.
    pub fn name(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Object => "object",
            Self::OtherRoot => "otherroot",
            Self::Type => "type",
            Self::Goroutine => "goroutine",
            Self::StackFrame => "stack frame",
            Self::DumpParams => "dump params",
            Self::RegisteredFinalizer => "registered finalizer",
            Self::Itab => "itab",
            Self::OsThread => "OS thread",
            Self::MemStats => "mem stats",
            Self::QueuedFinalizer => "queued finalizer",
            Self::DataSegment => "data segment",
            Self::BssSegment => "bss segment",
            Self::DeferRecord => "defer record",
            Self::PanicRecord => "panic record",
            Self::AllocProfile => "alloc/free profile record",
            Self::AllocSample => "alloc stack trace sample",
        }
    }

    /// Whether this kind has a defined field layout in this format
    /// revision. The four kinds where this is `false` are named in the
    /// type table but cannot be decoded — encountering one is a
    /// distinct, loud failure.
    pub fn has_layout(self) -> bool {
        !matches!(
            self,
            Self::OtherRoot | Self::QueuedFinalizer | Self::DeferRecord | Self::PanicRecord
        )
    }
}
