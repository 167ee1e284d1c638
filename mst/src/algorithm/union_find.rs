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

use std::mem::swap;

/// Serial union-find over `0..n`.
///
/// A root stores the negated size of its set, any other vertex stores its
/// parent. `find` halves paths as it walks them.
pub struct UnionFind {
    parents: Vec<isize>,
    num_sets: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self { parents: vec![-1; n], num_sets: n }
    }

    fn is_root(&self, u: usize) -> bool {
        self.parents[u] < 0
    }

    pub fn find(&mut self, mut u: usize) -> usize {
        if self.is_root(u) { return u; }
        let mut p = self.parents[u] as usize;
        if self.is_root(p) { return p; }

        loop {
            let gp = self.parents[p];
            self.parents[u] = gp;
            u = p;
            p = gp as usize;
            if self.is_root(p) { return p; }
        }
    }

    /// Joins two distinct roots, hanging the smaller set under the larger.
    pub fn union_roots(&mut self, u: usize, v: usize) {
        debug_assert!(u != v && self.is_root(u) && self.is_root(v));
        let (mut u, mut v) = (u, v);
        if self.parents[u] > self.parents[v] {
            swap(&mut u, &mut v);
        }
        self.parents[u] += self.parents[v];
        self.parents[v] = u as isize;
        self.num_sets -= 1;
    }

    /// Joins the sets of `u` and `v`; returns false if they were already joined.
    pub fn union(&mut self, u: usize, v: usize) -> bool {
        let (ru, rv) = (self.find(u), self.find(v));
        if ru == rv { return false; }
        self.union_roots(ru, rv);
        true
    }

    pub fn num_sets(&self) -> usize { self.num_sets }
}
