use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use partition_sort::patterns;

#[inline(never)]
fn bench_sort(
    c: &mut Criterion,
    test_len: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    sort_func: impl Fn(&mut [i32]),
) {
    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("{bench_name}-i32-{pattern_name}-{test_len}"), |b| {
        b.iter_batched(
            || pattern_provider(test_len),
            |mut test_data| sort_func(black_box(test_data.as_mut_slice())),
            batch_size,
        )
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    // The adversarial patterns (ascending, descending, all_equal) hit the quadratic
    // worst case, so the grid stops well short of the random-pattern sizes the
    // algorithm could otherwise handle.
    let test_lens = [16, 256, 4096];

    let pattern_providers: Vec<(&str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_binary", |len| patterns::random_uniform(len, 0..=1)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("all_equal", patterns::all_equal),
        ("saw_mixed", |len| {
            patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for test_len in test_lens {
        for (pattern_name, pattern_provider) in &pattern_providers {
            bench_sort(
                c,
                test_len,
                pattern_name,
                pattern_provider,
                "partition_sort",
                |v| partition_sort::sort(v),
            );

            bench_sort(
                c,
                test_len,
                pattern_name,
                pattern_provider,
                "rust_std_unstable",
                |v| v.sort_unstable(),
            );
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
