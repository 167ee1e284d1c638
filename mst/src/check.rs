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

//! Verification of spanning tree results against the input graph.

use num_traits::Float;
use thiserror::Error;

use crate::algorithm::union_find::UnionFind;
use crate::common::graph::{MstMatrix, WeightMatrix};

#[derive(Error, Debug, PartialEq)]
pub enum CheckError {
    #[error("tree is {found}x{found} but the graph has {expected} vertices")]
    WrongDimension { expected: usize, found: usize },

    #[error("tree weight {found} differs from the expected {expected}")]
    WrongWeight { expected: f64, found: f64 },

    #[error("tree is not symmetric at ({0}, {1})")]
    NotSymmetric(usize, usize),

    #[error("wrong edge count: tree has {found} edges, expected {expected}")]
    WrongEdgeCount { expected: usize, found: usize },

    #[error("edge ({0}, {1}) does not carry the graph's weight")]
    InventedWeight(usize, usize),

    #[error("edge ({0}, {1}) closes a cycle")]
    Cycle(usize, usize),
}

/// Minimum spanning tree weight by Kruskal's algorithm over the upper
/// triangle of `matrix`, or `None` if the graph is disconnected.
///
/// Independent of the Prim builder; meant as a test oracle.
pub fn reference_weight<T: Float>(matrix: &WeightMatrix<T>) -> Option<T> {
    let n = matrix.num_rows();
    let mut es: Vec<(T, usize, usize)> = (0..n)
        .flat_map(|i| (i+1..n).map(move |j| (i, j)))
        .map(|(i, j)| (matrix[(i, j)], i, j))
        .filter(|(w, _, _)| !w.is_zero())
        .collect();
    es.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut uf = UnionFind::new(n);
    let mut total = T::zero();
    for (w, u, v) in es {
        if uf.union(u, v) { total = total + w; }
    }
    if uf.num_sets() <= 1 { Some(total) } else { None }
}

/// Checks that `mst` is a spanning tree of `graph` whose weight is
/// `expected_weight` up to `allowed_error`.
pub fn check<T: Float>(
    graph: &WeightMatrix<T>,
    mst: &MstMatrix<T>,
    expected_weight: T,
    allowed_error: T,
) -> Result<(), CheckError> {
    let n = graph.num_rows();
    if mst.n() != n {
        return Err(CheckError::WrongDimension { expected: n, found: mst.n() });
    }

    let total = mst.total_weight();
    if (total - expected_weight).abs() >= allowed_error {
        return Err(CheckError::WrongWeight {
            expected: expected_weight.to_f64().unwrap_or(f64::NAN),
            found: total.to_f64().unwrap_or(f64::NAN),
        });
    }

    for i in 0..n {
        for j in i+1..n {
            if mst[(i, j)] != mst[(j, i)] {
                return Err(CheckError::NotSymmetric(i, j));
            }
        }
    }

    let m = mst.num_edges();
    let expected_edges = n.saturating_sub(1);
    if m != expected_edges {
        return Err(CheckError::WrongEdgeCount { expected: expected_edges, found: m });
    }

    let mut uf = UnionFind::new(n);
    for (u, v, w) in mst.edges() {
        if graph[(u, v)] != w { return Err(CheckError::InventedWeight(u, v)); }
        if !uf.union(u, v) { return Err(CheckError::Cycle(u, v)); }
    }
    Ok(())
}
