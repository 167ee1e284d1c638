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

use std::ops::Index;
use num_traits::Float;

use crate::common::error::{MstError, MstResult};

// **************************************************************
//    DENSE WEIGHT MATRIX
// **************************************************************

/// A dense matrix of edge weights; `0` means "no edge".
///
/// Rows are stored as given and may be ragged; `convert` validates
/// the shape before anything reads the matrix as a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightMatrix<T> {
    rows: Vec<Vec<T>>,
}

impl<T: Float> WeightMatrix<T> {
    pub fn new(rows: Vec<Vec<T>>) -> Self { Self { rows } }

    /// Builds an `n x n` matrix from row-major data.
    pub fn from_flat(data: &[T], n: usize) -> MstResult<Self> {
        if data.len() != n * n {
            return Err(MstError::InvalidInput(format!(
                "flat data has {} values, expected {n}x{n}", data.len()
            )));
        }
        let rows = data.chunks(n.max(1)).map(<[T]>::to_vec).collect();
        Ok(Self { rows })
    }

    pub fn num_rows(&self) -> usize { self.rows.len() }

    pub fn rows(&self) -> &[Vec<T>] { &self.rows }
}

impl<T> Index<(usize, usize)> for WeightMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.rows[i][j]
    }
}

// **************************************************************
//    NEIGHBOR MAPPING (SPARSE ADJACENCY)
// **************************************************************

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor<T> {
    pub v: usize,
    pub w: T,
}

impl<T> Neighbor<T> {
    pub fn new(v: usize, w: T) -> Self { Self { v, w } }
}

/// Non-zero neighbors of every vertex, each list sorted by neighbor index.
#[derive(Clone, Debug, PartialEq)]
pub struct NeighborMapping<T> {
    neighbors: Vec<Vec<Neighbor<T>>>,
}

impl<T: Float> NeighborMapping<T> {
    pub(crate) fn new(neighbors: Vec<Vec<Neighbor<T>>>) -> Self {
        Self { neighbors }
    }

    pub fn num_vertices(&self) -> usize { self.neighbors.len() }

    /// Number of undirected edges, self-loops counted once.
    pub fn num_edges(&self) -> usize {
        self.neighbors
            .iter()
            .enumerate()
            .map(|(u, ns)| ns.iter().filter(|nb| nb.v >= u).count())
            .sum()
    }

    #[inline(always)]
    pub fn index(&self, u: usize) -> &[Neighbor<T>] {
        debug_assert!(u < self.num_vertices());
        &self.neighbors[u]
    }

    pub fn weight(&self, u: usize, v: usize) -> Option<T> {
        let ns = self.neighbors.get(u)?;
        ns.binary_search_by_key(&v, |nb| nb.v)
            .ok()
            .map(|k| ns[k].w)
    }
}

// **************************************************************
//    MST RESULT
// **************************************************************

/// Dense symmetric adjacency matrix of a spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MstMatrix<T> {
    data: Vec<T>,
    n: usize,
}

impl<T: Float> MstMatrix<T> {
    pub fn zeros(n: usize) -> Self {
        Self { data: vec![T::zero(); n * n], n }
    }

    pub const fn n(&self) -> usize { self.n }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> T { self.data[i * self.n + j] }

    /// Records the undirected edge `{u, v}`; both triangles are written together.
    pub fn add_undirected_edge(&mut self, u: usize, v: usize, w: T) {
        debug_assert!(u < self.n && v < self.n);
        self.data[u * self.n + v] = w;
        self.data[v * self.n + u] = w;
    }

    /// Non-zero entries strictly above the diagonal as `(u, v, w)`, `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.n).flat_map(move |i| {
            (i+1..self.n)
                .map(move |j| (i, j, self.get(i, j)))
                .filter(|&(_, _, w)| w != T::zero())
        })
    }

    pub fn num_edges(&self) -> usize { self.edges().count() }

    pub fn total_weight(&self) -> T {
        self.edges().fold(T::zero(), |acc, (_, _, w)| acc + w)
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data
            .chunks(self.n.max(1))
            .take(self.n)
            .map(<[T]>::to_vec)
            .collect()
    }
}

impl<T> Index<(usize, usize)> for MstMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i * self.n + j]
    }
}
