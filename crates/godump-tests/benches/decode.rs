use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use godump_decoder::DumpDecoder;
use godump_driver::DumpDriver;
use godump_tests::DumpBuilder;

const HEADER: &str = "go1.5 heap dump";

fn object_dump(object_count: usize, content_len: usize) -> Vec<u8> {
    let contents = vec![0u8; content_len];
    let mut builder = DumpBuilder::new(HEADER);
    for i in 0..object_count {
        builder = builder
            .tag(1)
            .uvarint(0xc000000000 + (i as u64) * 64)
            .bytes(&contents)
            .field(1, 0)
            .field(1, 8)
            .end_fields();
    }
    builder.eof().build()
}

fn bench_decode_small(c: &mut Criterion) {
    let bytes = DumpBuilder::new(HEADER)
        .tag(8)
        .uvarint(0x10)
        .uvarint(0x20)
        .eof()
        .build();

    c.bench_function("decode_small", |b| {
        b.iter(|| DumpDecoder::decode(&bytes).unwrap());
    });
}

fn bench_decode_mem_stats(c: &mut Criterion) {
    let mut builder = DumpBuilder::new(HEADER).tag(10);
    for i in 0..280u64 {
        builder = builder.uvarint(i * 1000);
    }
    let bytes = builder.eof().build();

    c.bench_function("decode_mem_stats", |b| {
        b.iter(|| DumpDecoder::decode(&bytes).unwrap());
    });
}

fn bench_decode_objects_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_objects");

    for object_count in [100, 1_000, 10_000] {
        let bytes = object_dump(object_count, 64);

        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("decode", object_count),
            &bytes,
            |b, bytes| b.iter(|| DumpDecoder::decode(bytes).unwrap()),
        );
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let bytes = object_dump(1_000, 64);

    c.bench_function("render_1000_objects", |b| {
        b.iter(|| DumpDriver::render_to_string(&bytes).unwrap());
    });
}

criterion_group!(
    benches,
    bench_decode_small,
    bench_decode_mem_stats,
    bench_decode_objects_throughput,
    bench_render
);
criterion_main!(benches);
