// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::fmt::Debug;
use std::ops::{Index, IndexMut};

use crate::{
    error::{Error, Result},
    util::tracing_wrappers::*,
};

/// Square `size` x `size` matrix of `f64`, stored row-major.
#[derive(Clone, PartialEq)]
pub struct Matrix {
    size: usize,
    data: Vec<f64>,
}

impl Debug for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Matrix {}x{}", self.size, self.size)
    }
}

impl Matrix {
    /// Allocates a zero-filled matrix.
    pub fn new(size: usize) -> Result<Matrix> {
        // Keeps every row offset computation below overflow.
        if size as u64 >= i64::MAX as u64 / 4 {
            return Err(Error::MatrixSizeTooLarge(size));
        }
        let total_size = size
            .checked_mul(size)
            .ok_or(Error::MatrixSizeTooLarge(size))?;
        if size == 0 {
            return Err(Error::InvalidMatrixSize(size));
        }
        trace!("allocating {size}x{size} matrix");
        let mut data = vec![];
        data.try_reserve_exact(total_size)?;
        data.resize(total_size, 0.0);
        Ok(Matrix { size, data })
    }

    /// Builds a matrix whose entry at `(row, col)` is `f(row, col)`. Entries
    /// are produced in row-major order.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> f64) -> Result<Matrix> {
        let mut matrix = Self::new(size)?;
        for (row, values) in matrix.data.chunks_exact_mut(size).enumerate() {
            for (col, v) in values.iter_mut().enumerate() {
                *v = f(row, col);
            }
        }
        Ok(matrix)
    }

    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Matrix> {
        let size = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(Error::NotSquare {
                row,
                len: r.len(),
                expected: size,
            });
        }
        let mut matrix = Self::new(size)?;
        for (dst, src) in matrix.data.chunks_exact_mut(size).zip(rows) {
            dst.copy_from_slice(src);
        }
        Ok(matrix)
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn row(&self, row: usize) -> &[f64] {
        debug_assert!(row < self.size);
        let start = row * self.size;
        &self.data[start..start + self.size]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        debug_assert!(row < self.size);
        let start = row * self.size;
        &mut self.data[start..start + self.size]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.size)
    }

    pub fn rows_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [f64]> + '_ {
        self.data.chunks_exact_mut(self.size)
    }

    /// All entries in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.row(row)[col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.row_mut(row)[col]
    }
}
