// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Separable 2D DCT evaluated directly from the cosine basis.
//!
//! Both passes are plain O(N^3) weighted sums. Every sum starts at 0.0 and
//! accumulates terms in increasing `j`, so results are reproducible bit for
//! bit across calls and between the cached and uncached entry points.

use crate::{
    coefficients::{CoefficientCache, dct_coefficients},
    error::{Error, Result},
    matrix::Matrix,
    util::tracing_wrappers::*,
};

/// `temp[x][i] = sum_j input[x][j] * coef[j][i]`
fn row_pass(input: &Matrix, coef: &Matrix, temp: &mut Matrix) {
    let size = input.size();
    for (src, dst) in input.rows().zip(temp.rows_mut()) {
        for i in 0..size {
            let mut sum = 0.0;
            for (a, c) in src.iter().zip(coef.rows()) {
                sum += a * c[i];
            }
            dst[i] = sum;
        }
    }
}

/// `result[y][i] = sum_j temp[j][y] * coef[j][i]`, i.e. the row pass applied
/// to the transpose of `temp`.
fn column_pass(temp: &Matrix, coef: &Matrix, result: &mut Matrix) {
    let size = temp.size();
    for (y, dst) in result.rows_mut().enumerate() {
        for i in 0..size {
            let mut sum = 0.0;
            for (t, c) in temp.rows().zip(coef.rows()) {
                sum += t[y] * c[i];
            }
            dst[i] = sum;
        }
    }
}

/// Transforms `input` using a precomputed coefficient matrix, which must
/// have the same size as `input`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip_all, fields(size = input.size()), err)
)]
pub fn dct2d_with_coefficients(input: &Matrix, coef: &Matrix) -> Result<Matrix> {
    let size = input.size();
    if coef.size() != size {
        return Err(Error::SizeMismatch(size, coef.size()));
    }
    let mut temp = Matrix::new(size)?;
    row_pass(input, coef, &mut temp);
    trace!("row pass done");
    let mut result = Matrix::new(size)?;
    column_pass(&temp, coef, &mut result);
    Ok(result)
}

/// Transforms `input`, computing the coefficient matrix for its size from
/// scratch.
pub fn dct2d(input: &Matrix) -> Result<Matrix> {
    let coef = dct_coefficients(input.size())?;
    dct2d_with_coefficients(input, &coef)
}

/// Transform that keeps the coefficient matrices of previously seen sizes.
///
/// Produces exactly the same output as [`dct2d`]; only the cost of building
/// the basis is amortized.
#[derive(Debug, Default)]
pub struct Dct2d {
    cache: CoefficientCache,
}

impl Dct2d {
    pub fn new() -> Dct2d {
        Dct2d::default()
    }

    pub fn transform(&mut self, input: &Matrix) -> Result<Matrix> {
        let coef = self.cache.get_or_compute(input.size())?;
        dct2d_with_coefficients(input, coef)
    }

    pub fn cache(&self) -> &CoefficientCache {
        &self.cache
    }
}

#[cfg(test)]
mod test {
    use std::f64::consts::FRAC_1_SQRT_2;

    use dct_bench_test_utils::{assert_all_almost_eq, reference};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha12Rng;
    use test_log::test;

    use super::*;

    fn random_matrix(size: usize, seed: u64) -> Matrix {
        let mut rng = ChaCha12Rng::seed_from_u64(seed);
        Matrix::from_fn(size, |_, _| rng.random_range(0.0..256.0)).unwrap()
    }

    #[test]
    fn single_element_is_identity() -> Result<()> {
        for v in [0.0, 1.0, -3.5, 255.75, 1e300] {
            let input = Matrix::from_rows(&[vec![v]])?;
            let output = dct2d(&input)?;
            assert_eq!(output.size(), 1);
            assert_eq!(output[(0, 0)], v);
        }
        Ok(())
    }

    #[test]
    fn two_by_two_golden() -> Result<()> {
        let s = FRAC_1_SQRT_2;
        let input = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]])?;
        let output = dct2d(&input)?;
        let expected = [3.0 + 5.0 * s, -1.0 - s, -1.0 + s, 3.0 - 5.0 * s];
        assert_all_almost_eq!(output.as_slice(), expected, 1e-12);

        let slow = reference::dct2d(&input.to_rows());
        assert_all_almost_eq!(output.as_slice(), slow.concat(), 1e-12);
        Ok(())
    }

    #[test]
    fn linear_in_input() {
        arbtest::arbtest(|u| {
            let size = u.int_in_range(1..=12)?;
            let scale = u.int_in_range(-8i32..=8)? as f64;
            let x = random_matrix(size, u.arbitrary()?);
            let y = random_matrix(size, u.arbitrary()?);
            let combined = Matrix::from_fn(size, |r, c| scale * x[(r, c)] + y[(r, c)]).unwrap();

            let tx = dct2d(&x).unwrap();
            let ty = dct2d(&y).unwrap();
            let expected: Vec<f64> = tx.iter().zip(ty.iter()).map(|(a, b)| scale * a + b).collect();
            let actual = dct2d(&combined).unwrap();
            let max_abs = expected.iter().fold(1.0, |m: f64, v| m.max(v.abs()));
            assert_all_almost_eq!(actual.as_slice(), expected, 1e-12 * max_abs);
            Ok(())
        });
    }

    #[test]
    fn matches_reference() {
        arbtest::arbtest(|u| {
            let size = u.int_in_range(1..=24)?;
            let seed = u.arbitrary()?;
            let input = random_matrix(size, seed);
            let output = dct2d(&input).unwrap();
            let slow = reference::dct2d(&input.to_rows());
            assert_all_almost_eq!(output.as_slice(), slow.concat(), 1e-9);
            Ok(())
        });
    }

    #[test]
    fn bit_exact_summation_order() -> Result<()> {
        for (size, seed) in [(2, 0), (7, 1), (32, 2), (61, 3)] {
            let input = random_matrix(size, seed);
            let coef = dct_coefficients(size)?.to_rows();
            let temp = reference::matmul(&input.to_rows(), &coef);
            let expected = reference::matmul(&reference::transpose(&temp), &coef);
            assert_eq!(dct2d(&input)?.to_rows(), expected);
        }
        Ok(())
    }

    #[test]
    fn applying_twice_is_not_identity() -> Result<()> {
        let input = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]])?;
        let twice = dct2d(&dct2d(&input)?)?;
        let max_diff = twice
            .iter()
            .zip(input.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        assert!(max_diff > 1.0);
        Ok(())
    }

    #[test]
    fn input_is_not_modified() -> Result<()> {
        let input = random_matrix(16, 3);
        let copy = input.clone();
        dct2d(&input)?;
        assert_eq!(input, copy);
        Ok(())
    }

    #[test]
    fn cached_is_bit_identical() -> Result<()> {
        let mut dct = Dct2d::new();
        for (size, seed) in [(5, 0), (16, 1), (5, 2), (33, 3)] {
            let input = random_matrix(size, seed);
            assert_eq!(dct.transform(&input)?, dct2d(&input)?);
        }
        assert_eq!(dct.cache().len(), 3);
        Ok(())
    }

    #[test]
    fn size_mismatch() -> Result<()> {
        let input = random_matrix(4, 0);
        let coef = dct_coefficients(8)?;
        assert!(matches!(
            dct2d_with_coefficients(&input, &coef),
            Err(Error::SizeMismatch(4, 8))
        ));
        Ok(())
    }

    #[test]
    fn full_size_is_finite() -> Result<()> {
        let input = random_matrix(256, 42);
        let output = dct2d(&input)?;
        assert_eq!(output.size(), 256);
        assert!(output.iter().all(f64::is_finite));
        Ok(())
    }
}
