// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Straightforward nested-`Vec` formulation of the 2D transform, used as
//! ground truth in tests: with `C[i][j] = cos((j + 0.5) * i * PI / n)`,
//! the result is `transpose(A * C) * C`.

use std::f64::consts::PI;

pub fn coefficients(n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| ((j as f64 + 0.5) * i as f64 * (PI / n as f64)).cos())
                .collect()
        })
        .collect()
}

pub fn matmul(a: &[Vec<f64>], b: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let inner = b.len();
    let cols = if inner == 0 { 0 } else { b[0].len() };
    a.iter()
        .map(|row| {
            assert_eq!(row.len(), inner);
            (0..cols)
                .map(|c| (0..inner).fold(0.0, |sum, k| sum + row[k] * b[k][c]))
                .collect()
        })
        .collect()
}

pub fn transpose(m: &[Vec<f64>]) -> Vec<Vec<f64>> {
    if m.is_empty() {
        return Vec::new();
    }
    (0..m[0].len())
        .map(|c| m.iter().map(|row| row[c]).collect())
        .collect()
}

pub fn dct2d(input: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let coef = coefficients(input.len());
    let temp = matmul(input, &coef);
    matmul(&transpose(&temp), &coef)
}
