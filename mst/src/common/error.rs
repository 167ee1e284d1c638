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

use thiserror::Error;

/// Failures surfaced by matrix loading, conversion and tree construction.
#[derive(Error, Debug)]
pub enum MstError {
    /// The weight matrix is empty, not square, asymmetric or holds a
    /// non-finite weight. Also raised for an out-of-range start node.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Prim's frontier ran dry before every vertex was reached.
    #[error("graph is disconnected: reached {visited} of {n} vertices")]
    DisconnectedGraph { visited: usize, n: usize },

    /// A delimited matrix file could not be parsed. `line` is 1-based.
    #[error("parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MstResult<T> = Result<T, MstError>;
