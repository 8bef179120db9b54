use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huffman_rs::{BaselineMode, CodeMap, Evaluator, FrequencyTable, HuffmanTree};

/// Generate repetitive English-like text
fn generate_repetitive_text(size: usize) -> String {
    let pattern = "the quick brown fox jumps over the lazy dog ";
    pattern.repeat(size / pattern.len())
}

/// Generate text over a wide alphabet (simulating base64 with accents)
fn generate_wide_alphabet(size: usize) -> String {
    let chars: Vec<char> =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/éèàçüöß"
            .chars()
            .collect();
    let mut result = String::with_capacity(size);
    let mut seed = 12345u64;

    for _ in 0..size {
        // Simple LCG random
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        let idx = (seed % chars.len() as u64) as usize;
        result.push(chars[idx]);
    }
    result
}

fn bench_code_map(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("code_map");

    for size in sizes.iter() {
        let repetitive = generate_repetitive_text(*size);
        let wide = generate_wide_alphabet(*size);

        group.bench_with_input(
            BenchmarkId::new("repetitive", size),
            &repetitive,
            |b, data| b.iter(|| black_box(CodeMap::from_text(black_box(data)))),
        );

        group.bench_with_input(BenchmarkId::new("wide", size), &wide, |b, data| {
            b.iter(|| black_box(CodeMap::from_text(black_box(data))))
        });
    }

    group.finish();
}

fn bench_tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_build");

    let table = FrequencyTable::from_text(&generate_wide_alphabet(100_000));
    group.bench_function("wide_alphabet", |b| {
        b.iter(|| black_box(HuffmanTree::build(black_box(&table))))
    });

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("evaluate");

    let trained = CodeMap::from_text(&generate_repetitive_text(10_000)).expect("non-empty text");

    for size in sizes.iter() {
        let data = generate_repetitive_text(*size);

        group.bench_with_input(BenchmarkId::new("fresh", size), &data, |b, data| {
            let evaluator = Evaluator::new(BaselineMode::MinimumFixedWidth);
            b.iter(|| black_box(evaluator.evaluate(black_box(data))))
        });

        group.bench_with_input(BenchmarkId::new("supplied", size), &data, |b, data| {
            let evaluator = Evaluator::new(BaselineMode::MinimumFixedWidth);
            b.iter(|| {
                let evaluation = evaluator.evaluate_with(black_box(data), &trained);
                black_box(evaluation.huffman_bits)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_code_map, bench_tree_build, bench_evaluate);
criterion_main!(benches);
