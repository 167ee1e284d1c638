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

use mst::{parse_weight_matrix, read_weight_matrix_from_file, MstError, WeightMatrix};

fn data(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn reads_small() {
    let m: WeightMatrix<f64> = read_weight_matrix_from_file(data("small.csv")).unwrap();
    assert_eq!(m.num_rows(), 5);
    assert_eq!(m[(0, 4)], 9.0);
    assert_eq!(m[(4, 3)], 1.0);
}

#[test]
fn skips_comments_and_blank_lines() {
    let m: WeightMatrix<f64> = read_weight_matrix_from_file(data("cycle4.csv")).unwrap();
    assert_eq!(m.num_rows(), 4);
    assert_eq!(m.rows()[0], vec![0.0, 2.0, 0.0, 4.0]);

    let m: WeightMatrix<f32> = parse_weight_matrix("\n# header\n 0, 1.5 \n\n1.5,0\n").unwrap();
    assert_eq!(m.rows(), &[vec![0.0, 1.5], vec![1.5, 0.0]]);
}

#[test]
fn missing_file() {
    let r: Result<WeightMatrix<f64>, _> = read_weight_matrix_from_file(data("nope.csv"));
    assert!(matches!(r, Err(MstError::Io(_))));
}

#[test]
fn ragged_rows() {
    let r: Result<WeightMatrix<f64>, _> = read_weight_matrix_from_file(data("ragged.csv"));
    match r {
        Err(MstError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn bad_number() {
    let r = parse_weight_matrix::<f64>("0,1\n1,x\n");
    match r {
        Err(MstError::Parse { line, reason }) => {
            assert_eq!(line, 2);
            assert!(reason.contains("column 2"), "{reason}");
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn not_square() {
    let r = parse_weight_matrix::<f64>("0,1,2\n1,0,3\n");
    assert!(matches!(r, Err(MstError::Parse { line: 2, .. })));
}

#[test]
fn empty_input() {
    assert!(matches!(
        parse_weight_matrix::<f64>("# nothing here\n\n"),
        Err(MstError::Parse { .. })
    ));
}

#[test]
fn reports_first_bad_line() {
    let mut s = String::from("0,1,1,1\n1,0,y,1\n");
    for _ in 0..200 { s.push_str("1,x,0,1\n"); }
    for _ in 0..20 {
        match parse_weight_matrix::<f64>(&s) {
            Err(MstError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }
}
