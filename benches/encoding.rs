use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use radix64::{Alphabet, AlphabetRegistry, StreamingDecoder, StreamingEncoder, decode_with, encode_with};
use std::hint::black_box;
use std::io::Cursor;

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn get_alphabet(name: &str) -> Alphabet {
    let config = AlphabetRegistry::load_default().unwrap();
    config.get_alphabet(name).unwrap().build().unwrap()
}

fn sample(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    let alphabet = get_alphabet("base64");
    let mut group = c.benchmark_group("encode_base64");

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let data = sample(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode_with(black_box(data), black_box(&alphabet)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let alphabet = get_alphabet("base64");
    let mut group = c.benchmark_group("decode_base64");

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let encoded = encode_with(&sample(size), &alphabet);

        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode_with(black_box(encoded), black_box(&alphabet)).unwrap());
        });
    }
    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let alphabet = get_alphabet("base64");
    let mut group = c.benchmark_group("streaming_base64");
    let size = 1 << 20;
    let data = sample(size);
    let encoded = encode_with(&data, &alphabet);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("encode", |b| {
        b.iter(|| {
            let mut encoder = StreamingEncoder::new(&alphabet, Vec::with_capacity(encoded.len()));
            encoder.encode(&mut Cursor::new(black_box(&data))).unwrap();
            encoder.finish().unwrap()
        });
    });

    group.bench_function("decode", |b| {
        b.iter(|| {
            let mut decoder = StreamingDecoder::new(&alphabet, Vec::with_capacity(size));
            decoder
                .decode(&mut Cursor::new(black_box(encoded.as_bytes())))
                .unwrap();
            decoder.into_inner()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_streaming);
criterion_main!(benches);
