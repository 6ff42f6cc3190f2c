//! Wire-level conformance tests for the dump decoder.
//!
//! These pin the externally observable contract: the closed tag set,
//! exact field ordering and counts per record kind, the two legal
//! terminations, and the all-or-nothing failure policy.

use godump_decoder::{DecodeError, DumpDecoder};
use godump_tests::DumpBuilder;
use godump_types::record::{Field, ItabRecord, Record};
use godump_types::tag::RecordTag;

const HEADER: &str = "go1.5 heap dump";

#[test]
fn header_plus_end_tag_decodes_to_zero_records() {
    let bytes = DumpBuilder::new(HEADER).eof().build();
    let dump = DumpDecoder::decode(&bytes).unwrap();
    assert_eq!(dump.header, HEADER);
    assert!(dump.records.is_empty());
}

#[test]
fn header_alone_is_a_clean_natural_end() {
    let bytes = DumpBuilder::new(HEADER).build();
    let dump = DumpDecoder::decode(&bytes).unwrap();
    assert!(dump.records.is_empty());
}

#[test]
fn tag_18_fails_with_unknown_tag_and_zero_records() {
    let bytes = DumpBuilder::new(HEADER).tag(18).build();
    match DumpDecoder::decode(&bytes) {
        Err(DecodeError::UnknownTag { tag: 18, offset }) => {
            // The tag sits right after the header line
            assert_eq!(offset, HEADER.len() as u64 + 1);
        }
        other => panic!("expected UnknownTag(18), got {other:?}"),
    }
}

#[test]
fn single_itab_record_scenario() {
    // header; tag=8 (itab); addr=0x10; contained type=0x20; tag=0
    let bytes = DumpBuilder::new(HEADER)
        .tag(8)
        .uvarint(0x10)
        .uvarint(0x20)
        .eof()
        .build();

    let dump = DumpDecoder::decode(&bytes).unwrap();
    assert_eq!(
        dump.records,
        vec![Record::Itab(ItabRecord {
            addr: 0x10,
            type_addr: 0x20,
        })]
    );
}

#[test]
fn every_defined_tag_resolves_every_other_fails() {
    for tag in 0..=20u64 {
        let kind = RecordTag::from_wire(tag);
        assert_eq!(kind.is_some(), tag <= 17, "tag {tag}");
        if let Some(kind) = kind {
            assert_eq!(kind.wire_id(), tag);
        }
    }
}

#[test]
fn object_field_list_decodes_in_order() {
    let bytes = DumpBuilder::new(HEADER)
        .tag(1) // object
        .uvarint(0x1000) // addr
        .bytes(&[0xAB; 16]) // contents
        .field(1, 0)
        .field(2, 8)
        .end_fields()
        .eof()
        .build();

    let dump = DumpDecoder::decode(&bytes).unwrap();
    let Record::Object(object) = &dump.records[0] else {
        panic!("expected object, got {:?}", dump.records[0]);
    };
    assert_eq!(object.addr, 0x1000);
    assert_eq!(object.contents.len(), 16);
    assert_eq!(
        object.fields,
        vec![Field { kind: 1, offset: 0 }, Field { kind: 2, offset: 8 }]
    );
}

#[test]
fn goroutine_field_sequence() {
    let bytes = DumpBuilder::new(HEADER)
        .tag(4)
        .uvarint(0xc0000) // addr
        .uvarint(0xc0ff0) // stack top
        .uvarint(19) // goid
        .uvarint(0x4010) // creation pc
        .uvarint(4) // status: waiting
        .uvarint(0) // created by system
        .uvarint(1) // background
        .uvarint(123_456) // last start waiting (ns)
        .string("chan receive")
        .uvarint(0xdead) // frame context
        .uvarint(0xbeef) // os thread
        .uvarint(2) // top defer
        .uvarint(0) // top panic
        .eof()
        .build();

    let dump = DumpDecoder::decode(&bytes).unwrap();
    let Record::Goroutine(g) = &dump.records[0] else {
        panic!("expected goroutine");
    };
    assert_eq!(g.goid, 19);
    assert_eq!(g.status, 4);
    assert_eq!(g.wait_reason, "chan receive");
    assert_eq!(g.last_start_waiting_ns, 123_456);
    assert_eq!(g.top_defer, 2);
}

#[test]
fn dump_params_field_sequence() {
    let bytes = DumpBuilder::new(HEADER)
        .tag(6)
        .uvarint(0) // little endian
        .uvarint(8) // pointer size
        .uvarint(0xc000000000) // heap start
        .uvarint(0xc000100000) // heap end
        .string("./app -v")
        .string("HOME=/root")
        .uvarint(4) // cpus
        .eof()
        .build();

    let dump = DumpDecoder::decode(&bytes).unwrap();
    let Record::DumpParams(p) = &dump.records[0] else {
        panic!("expected dump params");
    };
    assert_eq!(p.pointer_size, 8);
    assert_eq!(p.heap_start, 0xc000000000);
    assert_eq!(p.command_line, "./app -v");
    assert_eq!(p.environment, "HOME=/root");
    assert_eq!(p.cpu_count, 4);
}

#[test]
fn alloc_profile_with_stack_trace() {
    let bytes = DumpBuilder::new(HEADER)
        .tag(16)
        .uvarint(7) // record id
        .uvarint(64) // object size
        .uvarint(2) // frame count
        .string("main.alloc")
        .string("main.go")
        .uvarint(42)
        .string("runtime.newobject")
        .string("malloc.go")
        .uvarint(1085)
        .uvarint(100) // allocs
        .uvarint(99) // frees
        .tag(17) // alloc stack trace sample referencing it
        .uvarint(0xc0000a0000)
        .uvarint(7)
        .eof()
        .build();

    let dump = DumpDecoder::decode(&bytes).unwrap();
    assert_eq!(dump.records.len(), 2);

    let Record::AllocProfile(p) = &dump.records[0] else {
        panic!("expected alloc profile");
    };
    assert_eq!(p.record_id, 7);
    assert_eq!(p.frames.len(), 2);
    assert_eq!(p.frames[0].function_name, "main.alloc");
    assert_eq!(p.frames[1].line, 1085);
    assert_eq!(p.alloc_count, 100);
    assert_eq!(p.free_count, 99);

    let Record::AllocSample(s) = &dump.records[1] else {
        panic!("expected alloc sample");
    };
    assert_eq!(s.profile_id, 7);
}

// ── MemStats exact consumption ────────────────────────────────────────────────

/// Build a mem stats record whose 280 varints are all
/// position-identifiable: scalars 1..=23, pause samples 1000..=1255,
/// NumGC 9999.
fn mem_stats_body(builder: DumpBuilder) -> DumpBuilder {
    let mut b = builder.tag(10);
    for value in 1..=23u64 {
        b = b.uvarint(value);
    }
    for i in 0..256u64 {
        b = b.uvarint(1000 + i);
    }
    b.uvarint(9999)
}

#[test]
fn mem_stats_consumes_exactly_280_varints_in_order() {
    // A following itab record proves the decoder stopped at exactly the
    // right byte: one varint short or long and the itab tag misparses.
    let bytes = mem_stats_body(DumpBuilder::new(HEADER))
        .tag(8)
        .uvarint(0x10)
        .uvarint(0x20)
        .eof()
        .build();

    let dump = DumpDecoder::decode(&bytes).unwrap();
    assert_eq!(dump.records.len(), 2);

    let Record::MemStats(m) = &dump.records[0] else {
        panic!("expected mem stats");
    };
    assert_eq!(m.alloc, 1);
    assert_eq!(m.total_alloc, 2);
    assert_eq!(m.next_gc, 22);
    assert_eq!(m.pause_total_ns, 23); // 23rd and last scalar
    assert_eq!(m.pause_ns[0], 1000); // samples start at the 24th varint
    assert_eq!(m.pause_ns[255], 1255);
    assert_eq!(m.num_gc, 9999); // single final field

    assert_eq!(
        dump.records[1],
        Record::Itab(ItabRecord {
            addr: 0x10,
            type_addr: 0x20,
        })
    );
}

#[test]
fn mem_stats_with_279_varints_is_truncated() {
    let mut builder = DumpBuilder::new(HEADER).tag(10);
    for value in 0..279u64 {
        builder = builder.uvarint(value % 100);
    }
    let bytes = builder.build();
    assert!(matches!(
        DumpDecoder::decode(&bytes),
        Err(DecodeError::Truncated { .. })
    ));
}
