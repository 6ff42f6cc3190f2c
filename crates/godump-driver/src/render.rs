use std::fmt::Write as _;

use godump_types::record::{GoroutineRecord, Record, SegmentRecord};

/// Pure projection of decoded records into labeled text lines.
///
/// Rendering has no effect on decoding and reflects no decoding state:
/// the same record always produces the same text. Per record, one
/// `Type: <name>` marker followed by one `label: value` line per field.
///
/// Conventions:
///
///   - addresses and pc values: `0x`-prefixed lowercase hex
///   - byte-content fields (object/frame/segment): length only, never
///     the raw bytes — dumps carry whole heaps
///   - text fields (names, params, environment, wait reason): in full
///   - field lists: one `field: kind=K offset=O` line per entry
pub struct TextRenderer;

impl TextRenderer {
    /// Render one record as a block of text, trailing newline included.
    pub fn render_record(record: &Record) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Type: {}", record.tag().name());

        match record {
            Record::Eof => {}

            Record::Object(o) => {
                let _ = writeln!(out, "addr: {:#x}", o.addr);
                let _ = writeln!(out, "content length: {}", o.contents.len());
                Self::render_fields(&mut out, &o.fields);
            }

            Record::Type(t) => {
                let _ = writeln!(out, "addr: {:#x}", t.addr);
                let _ = writeln!(out, "size: {}", t.size);
                let _ = writeln!(out, "name: {}", t.name);
                let _ = writeln!(out, "type to itab: {}", t.type_to_itab);
            }

            Record::Goroutine(g) => {
                let _ = writeln!(out, "addr: {:#x}", g.addr);
                let _ = writeln!(out, "stack top: {:#x}", g.stack_top);
                let _ = writeln!(out, "goid: {}", g.goid);
                let _ = writeln!(out, "creation pc: {:#x}", g.creation_pc);
                match GoroutineRecord::status_name(g.status) {
                    Some(name) => {
                        let _ = writeln!(out, "status: {} ({name})", g.status);
                    }
                    None => {
                        let _ = writeln!(out, "status: {}", g.status);
                    }
                }
                let _ = writeln!(out, "created by system: {}", g.created_by_system);
                let _ = writeln!(out, "background: {}", g.background);
                let _ = writeln!(out, "last start waiting (ns): {}", g.last_start_waiting_ns);
                let _ = writeln!(out, "wait reason: {}", g.wait_reason);
                let _ = writeln!(out, "frame context: {:#x}", g.frame_context);
                let _ = writeln!(out, "os thread: {:#x}", g.os_thread);
                let _ = writeln!(out, "top defer: {}", g.top_defer);
                let _ = writeln!(out, "top panic: {}", g.top_panic);
            }

            Record::StackFrame(f) => {
                let _ = writeln!(out, "stack pointer: {:#x}", f.stack_ptr);
                let _ = writeln!(out, "depth: {}", f.depth);
                let _ = writeln!(out, "child stack pointer: {:#x}", f.child_stack_ptr);
                let _ = writeln!(out, "content length: {}", f.contents.len());
                let _ = writeln!(out, "entry pc: {:#x}", f.entry_pc);
                let _ = writeln!(out, "current pc: {:#x}", f.current_pc);
                let _ = writeln!(out, "continuation pc: {:#x}", f.continuation_pc);
                let _ = writeln!(out, "function name: {}", f.function_name);
                Self::render_fields(&mut out, &f.fields);
            }

            Record::DumpParams(p) => {
                let _ = writeln!(out, "big endian: {}", p.big_endian);
                let _ = writeln!(out, "pointer size: {}", p.pointer_size);
                let _ = writeln!(out, "heap start: {:#x}", p.heap_start);
                let _ = writeln!(out, "heap end: {:#x}", p.heap_end);
                let _ = writeln!(out, "command line: {}", p.command_line);
                let _ = writeln!(out, "environment: {}", p.environment);
                let _ = writeln!(out, "cpu count: {}", p.cpu_count);
            }

            Record::Finalizer(f) => {
                let _ = writeln!(out, "object addr: {:#x}", f.object_addr);
                let _ = writeln!(out, "funcval: {:#x}", f.funcval);
                let _ = writeln!(out, "pc: {:#x}", f.pc);
                let _ = writeln!(out, "argument type: {}", f.arg_type);
                let _ = writeln!(out, "object type: {}", f.object_type);
            }

            Record::Itab(i) => {
                let _ = writeln!(out, "addr: {:#x}", i.addr);
                let _ = writeln!(out, "type addr: {:#x}", i.type_addr);
            }

            Record::OsThread(t) => {
                let _ = writeln!(out, "descriptor addr: {:#x}", t.descriptor_addr);
                let _ = writeln!(out, "internal id: {}", t.internal_id);
                let _ = writeln!(out, "os id: {}", t.os_id);
            }

            Record::MemStats(m) => {
                for (label, value) in m.scalars() {
                    let _ = writeln!(out, "{label}: {value}");
                }
                for sample in m.pause_ns.iter() {
                    let _ = writeln!(out, "PauseNs: {sample}");
                }
                let _ = writeln!(out, "NumGC: {}", m.num_gc);
            }

            Record::DataSegment(s) | Record::BssSegment(s) => {
                Self::render_segment(&mut out, s);
            }

            Record::AllocProfile(p) => {
                let _ = writeln!(out, "record id: {}", p.record_id);
                let _ = writeln!(out, "object size: {}", p.object_size);
                let _ = writeln!(out, "frame count: {}", p.frames.len());
                for frame in &p.frames {
                    let _ = writeln!(
                        out,
                        "frame: {} ({}:{})",
                        frame.function_name, frame.file_name, frame.line
                    );
                }
                let _ = writeln!(out, "allocs: {}", p.alloc_count);
                let _ = writeln!(out, "frees: {}", p.free_count);
            }

            Record::AllocSample(s) => {
                let _ = writeln!(out, "object addr: {:#x}", s.object_addr);
                let _ = writeln!(out, "profile record id: {:#x}", s.profile_id);
            }
        }

        out
    }

    fn render_segment(out: &mut String, s: &SegmentRecord) {
        let _ = writeln!(out, "start addr: {:#x}", s.start_addr);
        let _ = writeln!(out, "content length: {}", s.contents.len());
        Self::render_fields(out, &s.fields);
    }

    fn render_fields(out: &mut String, fields: &[godump_types::record::Field]) {
        for field in fields {
            let _ = writeln!(out, "field: kind={} offset={}", field.kind, field.offset);
        }
    }
}
