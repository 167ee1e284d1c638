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

use num_traits::Float;
use rayon::prelude::*;

use crate::common::error::{MstError, MstResult};
use crate::common::graph::{Neighbor, NeighborMapping, WeightMatrix};

/// Default symmetry tolerance: `sqrt(epsilon)`, relative to the larger weight.
pub fn default_tolerance<T: Float>() -> T { T::epsilon().sqrt() }

// A zero on one side only is an edge that exists in one direction; no
// tolerance makes that symmetric.
#[inline(always)]
fn approx_eq<T: Float>(a: T, b: T, tol: T) -> bool {
    a.is_zero() == b.is_zero()
        && (a - b).abs() <= tol * T::one().max(a.abs()).max(b.abs())
}

fn validate<T>(matrix: &WeightMatrix<T>, tol: T) -> MstResult<()>
where
    T: Float + Send + Sync,
{
    let n = matrix.num_rows();
    if n == 0 {
        return Err(MstError::InvalidInput("weight matrix is empty".to_string()));
    }
    if let Some((i, r)) = matrix.rows().iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(MstError::InvalidInput(format!(
            "matrix is not square: row {i} has {} columns, expected {n}", r.len()
        )));
    }

    let non_finite = matrix.rows().par_iter().enumerate().find_map_first(|(i, row)| {
        row.iter()
            .position(|w| !w.is_finite())
            .map(|j| format!("non-finite weight at ({i}, {j})"))
    });
    let bad = non_finite.or_else(|| {
        (0..n).into_par_iter().find_map_first(|i| {
            (i+1..n)
                .find(|&j| !approx_eq(matrix[(i, j)], matrix[(j, i)], tol))
                .map(|j| format!("matrix is not symmetric at ({i}, {j})"))
        })
    });
    match bad {
        Some(reason) => Err(MstError::InvalidInput(reason)),
        None => Ok(()),
    }
}

/// Converts a dense weight matrix into per-vertex neighbor lists,
/// keeping only non-zero weights.
pub fn convert<T>(matrix: &WeightMatrix<T>) -> MstResult<NeighborMapping<T>>
where
    T: Float + Send + Sync,
{
    convert_with_tolerance(matrix, default_tolerance())
}

/// Like [`convert`], with an explicit relative tolerance for the symmetry check.
pub fn convert_with_tolerance<T>(
    matrix: &WeightMatrix<T>,
    tol: T,
) -> MstResult<NeighborMapping<T>>
where
    T: Float + Send + Sync,
{
    validate(matrix, tol)?;

    let neighbors: Vec<Vec<Neighbor<T>>> = matrix
        .rows()
        .par_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(_, w)| !w.is_zero())
                .map(|(v, &w)| Neighbor::new(v, w))
                .collect()
        })
        .collect();
    Ok(NeighborMapping::new(neighbors))
}
