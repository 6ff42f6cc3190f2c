//! Per-record field decoders.
//!
//! One function per decodable record kind. Each consumes exactly the
//! documented field sequence for its kind, in order, with no optional
//! or skippable fields — the format has no framing below the record
//! tag, so the only way to stay in sync is to read every field.
//!
//! All functions propagate the first primitive read failure; a partial
//! record is never returned.

use std::io::Read;

use godump_types::memstats::{MemStatsRecord, PAUSE_SAMPLES};
use godump_types::record::{
    AllocProfileRecord, AllocSampleRecord, DumpParamsRecord, FinalizerRecord, GoroutineRecord,
    ItabRecord, ObjectRecord, OsThreadRecord, ProfileFrame, SegmentRecord, StackFrameRecord,
    TypeRecord,
};
use godump_types::tag::RecordTag;
use godump_wire::WireReader;

use crate::error::DecodeError;
use crate::field_list::read_field_list;

/// Tag 1: a heap object.
pub fn object<R: Read>(r: &mut WireReader<R>) -> Result<ObjectRecord, DecodeError> {
    Ok(ObjectRecord {
        addr: r.read_uvarint()?,
        contents: r.read_bytes()?,
        fields: read_field_list(r, RecordTag::Object)?,
    })
}

/// Tag 3: a type descriptor.
pub fn type_descriptor<R: Read>(r: &mut WireReader<R>) -> Result<TypeRecord, DecodeError> {
    Ok(TypeRecord {
        addr: r.read_uvarint()?,
        size: r.read_uvarint()?,
        name: r.read_string()?,
        type_to_itab: r.read_uvarint()?,
    })
}

/// Tag 4: a goroutine descriptor.
pub fn goroutine<R: Read>(r: &mut WireReader<R>) -> Result<GoroutineRecord, DecodeError> {
    Ok(GoroutineRecord {
        addr: r.read_uvarint()?,
        stack_top: r.read_uvarint()?,
        goid: r.read_uvarint()?,
        creation_pc: r.read_uvarint()?,
        status: r.read_uvarint()?,
        created_by_system: r.read_uvarint()?,
        background: r.read_uvarint()?,
        last_start_waiting_ns: r.read_uvarint()?,
        wait_reason: r.read_string()?,
        frame_context: r.read_uvarint()?,
        os_thread: r.read_uvarint()?,
        top_defer: r.read_uvarint()?,
        top_panic: r.read_uvarint()?,
    })
}

/// Tag 5: one stack frame of a goroutine.
pub fn stack_frame<R: Read>(r: &mut WireReader<R>) -> Result<StackFrameRecord, DecodeError> {
    Ok(StackFrameRecord {
        stack_ptr: r.read_uvarint()?,
        depth: r.read_uvarint()?,
        child_stack_ptr: r.read_uvarint()?,
        contents: r.read_bytes()?,
        entry_pc: r.read_uvarint()?,
        current_pc: r.read_uvarint()?,
        continuation_pc: r.read_uvarint()?,
        function_name: r.read_string()?,
        fields: read_field_list(r, RecordTag::StackFrame)?,
    })
}

/// Tag 6: global parameters of the dump.
pub fn dump_params<R: Read>(r: &mut WireReader<R>) -> Result<DumpParamsRecord, DecodeError> {
    Ok(DumpParamsRecord {
        big_endian: r.read_uvarint()?,
        pointer_size: r.read_uvarint()?,
        heap_start: r.read_uvarint()?,
        heap_end: r.read_uvarint()?,
        command_line: r.read_string()?,
        environment: r.read_string()?,
        cpu_count: r.read_uvarint()?,
    })
}

/// Tag 7: a finalizer registered with `runtime.SetFinalizer`.
pub fn finalizer<R: Read>(r: &mut WireReader<R>) -> Result<FinalizerRecord, DecodeError> {
    Ok(FinalizerRecord {
        object_addr: r.read_uvarint()?,
        funcval: r.read_uvarint()?,
        pc: r.read_uvarint()?,
        arg_type: r.read_uvarint()?,
        object_type: r.read_uvarint()?,
    })
}

/// Tag 8: an interface table entry.
pub fn itab<R: Read>(r: &mut WireReader<R>) -> Result<ItabRecord, DecodeError> {
    Ok(ItabRecord {
        addr: r.read_uvarint()?,
        type_addr: r.read_uvarint()?,
    })
}

/// Tag 9: an OS thread (an M, in runtime terms).
pub fn os_thread<R: Read>(r: &mut WireReader<R>) -> Result<OsThreadRecord, DecodeError> {
    Ok(OsThreadRecord {
        descriptor_addr: r.read_uvarint()?,
        internal_id: r.read_uvarint()?,
        os_id: r.read_uvarint()?,
    })
}

/// Tag 10: the runtime's memory statistics snapshot.
///
/// 280 varints, position-significant: 23 scalars, 256 pause samples,
/// then the GC cycle count. Reading a different number here desyncs
/// the rest of the stream.
pub fn mem_stats<R: Read>(r: &mut WireReader<R>) -> Result<MemStatsRecord, DecodeError> {
    let alloc = r.read_uvarint()?;
    let total_alloc = r.read_uvarint()?;
    let sys = r.read_uvarint()?;
    let lookups = r.read_uvarint()?;
    let mallocs = r.read_uvarint()?;
    let frees = r.read_uvarint()?;
    let heap_alloc = r.read_uvarint()?;
    let heap_sys = r.read_uvarint()?;
    let heap_idle = r.read_uvarint()?;
    let heap_inuse = r.read_uvarint()?;
    let heap_released = r.read_uvarint()?;
    let heap_objects = r.read_uvarint()?;
    let stack_inuse = r.read_uvarint()?;
    let stack_sys = r.read_uvarint()?;
    let mspan_inuse = r.read_uvarint()?;
    let mspan_sys = r.read_uvarint()?;
    let mcache_inuse = r.read_uvarint()?;
    let mcache_sys = r.read_uvarint()?;
    let buck_hash_sys = r.read_uvarint()?;
    let gc_sys = r.read_uvarint()?;
    let other_sys = r.read_uvarint()?;
    let next_gc = r.read_uvarint()?;
    let pause_total_ns = r.read_uvarint()?;

    let mut pause_ns = Box::new([0u64; PAUSE_SAMPLES]);
    for slot in pause_ns.iter_mut() {
        *slot = r.read_uvarint()?;
    }

    let num_gc = r.read_uvarint()?;

    Ok(MemStatsRecord {
        alloc,
        total_alloc,
        sys,
        lookups,
        mallocs,
        frees,
        heap_alloc,
        heap_sys,
        heap_idle,
        heap_inuse,
        heap_released,
        heap_objects,
        stack_inuse,
        stack_sys,
        mspan_inuse,
        mspan_sys,
        mcache_inuse,
        mcache_sys,
        buck_hash_sys,
        gc_sys,
        other_sys,
        next_gc,
        pause_total_ns,
        pause_ns,
        num_gc,
    })
}

/// Tags 12 and 13: a data or bss segment. The two kinds share one
/// layout; `kind` says which one this is, for diagnostics.
pub fn segment<R: Read>(
    r: &mut WireReader<R>,
    kind: RecordTag,
) -> Result<SegmentRecord, DecodeError> {
    Ok(SegmentRecord {
        start_addr: r.read_uvarint()?,
        contents: r.read_bytes()?,
        fields: read_field_list(r, kind)?,
    })
}

/// Tag 16: an alloc/free profile record with its call trace.
///
/// The frame count is itself a decoded field; exactly that many
/// (function, file, line) groups follow before the trailing counters.
pub fn alloc_profile<R: Read>(r: &mut WireReader<R>) -> Result<AllocProfileRecord, DecodeError> {
    let record_id = r.read_uvarint()?;
    let object_size = r.read_uvarint()?;
    let frame_count = r.read_uvarint()?;

    let mut frames = Vec::with_capacity(frame_count.min(1024) as usize);
    for _ in 0..frame_count {
        frames.push(ProfileFrame {
            function_name: r.read_string()?,
            file_name: r.read_string()?,
            line: r.read_uvarint()?,
        });
    }

    Ok(AllocProfileRecord {
        record_id,
        object_size,
        frames,
        alloc_count: r.read_uvarint()?,
        free_count: r.read_uvarint()?,
    })
}

/// Tag 17: one sampled allocation pointing back at a profile record.
pub fn alloc_sample<R: Read>(r: &mut WireReader<R>) -> Result<AllocSampleRecord, DecodeError> {
    Ok(AllocSampleRecord {
        object_addr: r.read_uvarint()?,
        profile_id: r.read_uvarint()?,
    })
}
