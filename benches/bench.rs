use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use sort_kit_rs::radix::{self, GroupWidth};
use sort_kit_rs::stable::{insertion_sort, merge_sort};
use sort_kit_rs::unstable::{bubble_sort, heapsort, quicksort, selection_sort};
use sort_test_tools::patterns;

const FAST_SIZES: [usize; 4] = [20, 1_000, 10_000, 100_000];

// Quadratic sorts would take minutes on the larger sizes.
const QUADRATIC_SIZES: [usize; 3] = [20, 200, 1_000];

fn bench_sort(c: &mut Criterion, name: &str, sizes: &[usize], sort: fn(&mut [i32])) {
    let mut group = c.benchmark_group(name);

    for &size in sizes {
        let input = patterns::random(size);
        group.bench_with_input(BenchmarkId::new("random", size), &input, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |v| sort(black_box(v.as_mut_slice())),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn comparison_sorts(c: &mut Criterion) {
    bench_sort(c, "merge_sort", &FAST_SIZES, merge_sort::sort);
    bench_sort(c, "heapsort", &FAST_SIZES, heapsort::sort);
    bench_sort(c, "quicksort", &FAST_SIZES, quicksort::sort);
    bench_sort(c, "insertion_sort", &QUADRATIC_SIZES, insertion_sort::sort);
    bench_sort(c, "bubble_sort", &QUADRATIC_SIZES, bubble_sort::sort);
    bench_sort(c, "selection_sort", &QUADRATIC_SIZES, selection_sort::sort);
}

fn radix_sorts(c: &mut Criterion) {
    bench_sort(c, "radix_sort_4", &FAST_SIZES, |v| {
        radix::sort_with_width(v, GroupWidth::Four)
    });
    bench_sort(c, "radix_sort_8", &FAST_SIZES, |v| {
        radix::sort_with_width(v, GroupWidth::Eight)
    });
    bench_sort(c, "radix_sort_16", &FAST_SIZES, |v| {
        radix::sort_with_width(v, GroupWidth::Sixteen)
    });
    bench_sort(c, "radix_sort_32", &FAST_SIZES, |v| {
        radix::sort_with_width(v, GroupWidth::ThirtyTwo)
    });
}

criterion_group!(benches, comparison_sorts, radix_sorts);
criterion_main!(benches);
