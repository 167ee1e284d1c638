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

use std::path::Path;
use std::str::FromStr;
use num_traits::Float;
use rayon::prelude::*;

use crate::algorithm::adjacency::{convert_with_tolerance, default_tolerance};
use crate::algorithm::frontier::{Frontier, FrontierEntry};
use crate::common::error::{MstError, MstResult};
use crate::common::get_time::Timer;
use crate::common::graph::{MstMatrix, NeighborMapping, WeightMatrix};
use crate::common::macros::verbose_println;
use crate::common::matrix_io::read_weight_matrix_from_file;

/// Knobs for [`construct_with`].
#[derive(Clone, Copy, Debug)]
pub struct MstOptions<T> {
    /// Vertex the tree is grown from.
    pub start: usize,
    /// Relative tolerance of the symmetry check.
    pub tolerance: T,
}

impl<T: Float> Default for MstOptions<T> {
    fn default() -> Self {
        Self { start: 0, tolerance: default_tolerance() }
    }
}

/// Minimum spanning tree of `mapping`, grown from vertex 0.
pub fn build<T: Float>(mapping: &NeighborMapping<T>) -> MstResult<MstMatrix<T>> {
    build_from(mapping, 0)
}

/// Prim's algorithm with a lazily cleaned binary heap.
///
/// Every tree edge is chosen as the lightest `(w, from, to)` entry whose
/// target is still unvisited, so equal-weight ties always resolve the same
/// way. Fails with `DisconnectedGraph` if the frontier empties before all
/// vertices are reached.
pub fn build_from<T: Float>(
    mapping: &NeighborMapping<T>,
    start: usize,
) -> MstResult<MstMatrix<T>> {
    let n = mapping.num_vertices();
    if start >= n {
        return Err(MstError::InvalidInput(format!(
            "start vertex {start} is out of range for {n} vertices"
        )));
    }

    let mut t = Timer::new("prim");
    let mut mst = MstMatrix::zeros(n);
    let mut visited = vec![false; n];
    let mut num_visited = 1;
    visited[start] = true;

    let mut frontier = Frontier::with_capacity(mapping.index(start).len());
    for nb in mapping.index(start) {
        frontier.push(FrontierEntry::new(nb.w, start, nb.v));
    }
    t.next("init");

    while let Some(FrontierEntry { w, from, to }) = frontier.pop() {
        if visited[to] { continue; }
        visited[to] = true;
        num_visited += 1;
        mst.add_undirected_edge(from, to, w);

        for nb in mapping.index(to) {
            if !visited[nb.v] {
                frontier.push(FrontierEntry::new(nb.w, to, nb.v));
            }
        }
    }
    t.next("grow");

    if num_visited < n {
        verbose_println!("prim: frontier emptied after {num_visited} of {n} vertices");
        return Err(MstError::DisconnectedGraph { visited: num_visited, n });
    }
    Ok(mst)
}

pub fn construct<T>(matrix: &WeightMatrix<T>) -> MstResult<MstMatrix<T>>
where
    T: Float + Send + Sync,
{
    construct_with(matrix, &MstOptions::default())
}

pub fn construct_with<T>(
    matrix: &WeightMatrix<T>,
    opts: &MstOptions<T>,
) -> MstResult<MstMatrix<T>>
where
    T: Float + Send + Sync,
{
    let mapping = convert_with_tolerance(matrix, opts.tolerance)?;
    build_from(&mapping, opts.start)
}

/// Loads a comma-separated matrix from `fname` and builds its tree.
pub fn construct_from_file<T, P>(fname: P) -> MstResult<MstMatrix<T>>
where
    T: Float + FromStr + Send + Sync,
    P: AsRef<Path>,
{
    let matrix = read_weight_matrix_from_file(fname)?;
    construct(&matrix)
}

/// Builds the trees of independent graphs in parallel; the i-th result
/// belongs to the i-th matrix.
pub fn construct_many<T>(matrices: &[WeightMatrix<T>]) -> Vec<MstResult<MstMatrix<T>>>
where
    T: Float + Send + Sync,
{
    matrices.par_iter().map(construct).collect()
}
