// ============================================================================
// This code is part of Rusty-MST.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mst::common::random::random_weight_matrix;
use mst::{build, construct, convert, WeightMatrix};

const SIZES: [usize; 3] = [100, 500, 1000];

fn dense(n: usize) -> WeightMatrix<f64> {
    random_weight_matrix(n, 100, 1_000_000, n as u64)
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    for n in SIZES {
        let g = dense(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &g, |b, g| {
            b.iter(|| convert(black_box(g)))
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for n in SIZES {
        let Ok(nm) = convert(&dense(n)) else { continue };
        group.bench_with_input(BenchmarkId::from_parameter(n), &nm, |b, nm| {
            b.iter(|| build(black_box(nm)))
        });
    }
    group.finish();
}

fn bench_construct(c: &mut Criterion) {
    let g = dense(500);
    c.bench_function("construct_500", |b| b.iter(|| construct(black_box(&g))));
}

criterion_group!(benches, bench_convert, bench_build, bench_construct);
criterion_main!(benches);
