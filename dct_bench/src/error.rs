// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
    #[error("Invalid matrix size: {0}x{0}")]
    InvalidMatrixSize(usize),
    #[error("Matrix size too large: {0}x{0}")]
    MatrixSizeTooLarge(usize),
    #[error("Matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("Size mismatch: input is {0}x{0}, coefficients are {1}x{1}")]
    SizeMismatch(usize, usize),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
