// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use stride::prelude::*;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_input(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..len as u64)).collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for len in SIZES {
        let input = random_input(len, 42);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("quicksort", len), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                sort(black_box(&mut v));
                v
            })
        });

        group.bench_with_input(BenchmarkId::new("std_unstable", len), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                black_box(&mut v).sort_unstable();
                v
            })
        });
    }
    group.finish();
}

fn bench_stable_sort(c: &mut Criterion) {
    let buffered = AlgorithmConfig::default();
    let in_place = AlgorithmConfig::builder().scratch(ScratchPolicy::Disabled).build();

    let mut group = c.benchmark_group("stable_sort");
    for len in SIZES {
        let input = random_input(len, 7);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("buffered", len), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                stride::stride_algo::stable::stable_sort_with(black_box(&mut v), &buffered);
                v
            })
        });

        group.bench_with_input(BenchmarkId::new("in_place", len), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                stride::stride_algo::stable::stable_sort_with(black_box(&mut v), &in_place);
                v
            })
        });
    }
    group.finish();
}

fn bench_heap_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_sort");
    for len in SIZES {
        let input = random_input(len, 11);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                make_heap(&mut v);
                sort_heap(black_box(&mut v));
                v
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sort, bench_stable_sort, bench_heap_sort);
criterion_main!(benches);
