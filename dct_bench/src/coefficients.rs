// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::{error::Result, matrix::Matrix, util::tracing_wrappers::*};

/// Cosine basis for a transform of size `size`: entry `(i, j)` is
/// `cos((j + 0.5) * i * PI / size)`. Row 0 is all ones.
pub fn dct_coefficients(size: usize) -> Result<Matrix> {
    let fact = PI / size as f64;
    let mut coef = Matrix::new(size)?;
    for (i, row) in coef.rows_mut().enumerate() {
        let mult = i as f64 * fact;
        for (j, c) in row.iter_mut().enumerate() {
            *c = ((j as f64 + 0.5) * mult).cos();
        }
    }
    Ok(coef)
}

/// Memoizes [`dct_coefficients`] per transform size.
#[derive(Debug, Default)]
pub struct CoefficientCache {
    entries: HashMap<usize, Matrix>,
}

impl CoefficientCache {
    pub fn new() -> CoefficientCache {
        CoefficientCache::default()
    }

    pub fn get_or_compute(&mut self, size: usize) -> Result<&Matrix> {
        if !self.entries.contains_key(&size) {
            debug!("computing {size}x{size} DCT coefficients");
            let coef = dct_coefficients(size)?;
            self.entries.insert(size, coef);
        }
        Ok(&self.entries[&size])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
