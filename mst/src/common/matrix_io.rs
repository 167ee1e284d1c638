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

use std::fs;
use std::path::Path;
use std::str::FromStr;
use num_traits::Float;
use rayon::prelude::*;

use crate::common::error::{MstError, MstResult};
use crate::common::get_time::Timer;
use crate::common::graph::WeightMatrix;
use crate::common::macros::verbose_println;

const DELIMITER: char = ',';
const COMMENT: char = '#';

fn parse_row<T>(line_no: usize, line: &str) -> MstResult<Vec<T>>
where
    T: Float + FromStr,
{
    line
        .split(DELIMITER)
        .enumerate()
        .map(|(col, cell)| {
            let cell = cell.trim();
            cell.parse::<T>().map_err(|_| MstError::Parse {
                line: line_no,
                reason: format!("column {}: cannot parse {cell:?} as a number", col + 1),
            })
        })
        .collect()
}

/// Parses comma-separated rows into a square weight matrix.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_weight_matrix<T>(s: &str) -> MstResult<WeightMatrix<T>>
where
    T: Float + FromStr + Send,
{
    let lines: Vec<(usize, &str)> = s
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with(COMMENT))
        .collect();

    // parse in parallel, report the first bad line in file order
    let parsed: Vec<MstResult<Vec<T>>> = lines
        .par_iter()
        .map(|&(line_no, l)| parse_row(line_no, l))
        .collect();
    let rows: Vec<Vec<T>> = parsed.into_iter().collect::<MstResult<_>>()?;

    let Some(first) = rows.first() else {
        return Err(MstError::Parse { line: 1, reason: "no matrix rows".to_string() });
    };
    let cols = first.len();
    if let Some((k, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(MstError::Parse {
            line: lines[k].0,
            reason: format!("expected {cols} columns, found {}", r.len()),
        });
    }
    if rows.len() != cols {
        return Err(MstError::Parse {
            line: lines[lines.len() - 1].0,
            reason: format!("matrix is {}x{cols}, expected a square matrix", rows.len()),
        });
    }

    verbose_println!("parsed a {cols}x{cols} weight matrix");
    Ok(WeightMatrix::new(rows))
}

pub fn read_weight_matrix_from_file<T, P>(fname: P) -> MstResult<WeightMatrix<T>>
where
    T: Float + FromStr + Send,
    P: AsRef<Path>,
{
    let mut t = Timer::new("read_matrix");
    let s = fs::read_to_string(fname)?;
    t.next("reading file");
    let m = parse_weight_matrix(&s)?;
    t.next("parsing");
    Ok(m)
}
