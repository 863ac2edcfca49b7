use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use punchhole::testing::{ZeroReader, ZeroWriter};

pub fn zero_reader_copy_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("zero_reader_copy_to");
    for size_power in [12, 20, 24, 30] {
        let len: u64 = 1 << size_power;
        group.throughput(Throughput::Bytes(len));
        group.bench_with_input(
            BenchmarkId::from_parameter(bytesize::ByteSize(len).to_string_as(true)),
            &len,
            |b, &len| {
                b.iter(|| {
                    let mut zw = ZeroWriter::new(std::io::sink());
                    let n = ZeroReader::new(len).copy_to(&mut zw).unwrap();
                    assert_eq!(n, len);
                    assert_eq!(zw.written(), len);
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, zero_reader_copy_to);
criterion_main!(benches);
