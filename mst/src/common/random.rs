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

use num_traits::{Float, NumCast};

use crate::common::graph::WeightMatrix;

#[inline(always)]
pub fn hash64(u: u64) -> u64 {
    let mut v = u.wrapping_mul(3_935_559_000_370_003_845);
    v = v.wrapping_add(2_691_343_689_449_507_681);
    v ^= v >> 21;
    v ^= v << 37;
    v ^= v >> 4;
    v = v.wrapping_mul(4_768_777_513_237_032_717);
    v ^= v << 20;
    v ^= v >> 41;
    v ^= v << 5;
    v
}

/// Counter-based generator: the i-th value depends only on the seed and `i`.
#[derive(Clone, Copy)]
pub struct Random {
    state: u64,
}

impl Random {
    pub fn new(seed: u64) -> Self { Self { state: seed } }

    pub fn fork(&self, i: u64) -> Self {
        Self::new(hash64(hash64(i.wrapping_add(self.state))))
    }

    pub fn ith_rand(&self, i: u64) -> u64 {
        hash64(i.wrapping_add(self.state))
    }
}

/// Builds a symmetric `n x n` matrix where each pair `i < j` carries an
/// edge with probability `percent / 100` and an integer weight in
/// `1..=max_weight`. Integer weights make equal-weight ties common.
pub fn random_weight_matrix<T: Float>(
    n: usize,
    percent: u64,
    max_weight: u64,
    seed: u64,
) -> WeightMatrix<T> {
    let presence = Random::new(seed).fork(0);
    let weights = Random::new(seed).fork(1);
    let max_weight = max_weight.max(1);

    let mut rows = vec![vec![T::zero(); n]; n];
    for i in 0..n {
        for j in i+1..n {
            let k = (i * n + j) as u64;
            if presence.ith_rand(k) % 100 >= percent { continue; }
            let w = 1 + weights.ith_rand(k) % max_weight;
            let w = <T as NumCast>::from(w).unwrap_or_else(T::one);
            rows[i][j] = w;
            rows[j][i] = w;
        }
    }
    WeightMatrix::new(rows)
}
