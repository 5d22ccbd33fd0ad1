// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Direct (non-fast) separable 2D DCT over square `f64` matrices, plus the
//! driver that times it.

pub mod coefficients;
pub mod dct2d;
pub mod driver;
pub mod error;
pub mod matrix;
mod util;

pub use coefficients::{CoefficientCache, dct_coefficients};
pub use dct2d::{Dct2d, dct2d, dct2d_with_coefficients};
pub use matrix::Matrix;
