// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use num_traits::Float;

pub mod reference;

/// True if `a` and `b` are within `max_error` of each other, either in
/// absolute terms or relative to the larger magnitude. NaN is never close.
pub fn is_close<T: Float>(a: T, b: T, max_error: T) -> bool {
    let abs = (a - b).abs();
    abs <= max_error || abs / a.abs().max(b.abs()) <= max_error
}

#[macro_export]
macro_rules! assert_almost_eq {
    ($left:expr, $right:expr, $max_error:expr $(,)?) => {
        match (&$left, &$right, &$max_error) {
            (left_val, right_val, max_error) => {
                if !$crate::is_close(*left_val, *right_val, *max_error) {
                    panic!(
                        "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n max_error: `{:?}`",
                        left_val, right_val, max_error
                    );
                }
            }
        }
    };
}

#[macro_export]
macro_rules! assert_all_almost_eq {
    ($left:expr, $right:expr, $max_error:expr $(,)?) => {
        match (&$left, &$right, &$max_error) {
            (left_val, right_val, max_error) => {
                if left_val.len() != right_val.len() {
                    panic!(
                        "assertion failed: `(left ≈ right)`\n left.len(): `{}`,\n right.len(): `{}`",
                        left_val.len(),
                        right_val.len()
                    );
                }
                for index in 0..left_val.len() {
                    if !$crate::is_close(left_val[index], right_val[index], *max_error) {
                        panic!(
                            "assertion failed: `(left ≈ right)`\n max_error: `{:?}`,\n left[{}]: `{:?}`,\n right[{}]: `{:?}`",
                            max_error, index, left_val[index], index, right_val[index]
                        );
                    }
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_floats() {
        assert_almost_eq!(1.0000001f64, 1.0000002, 0.000001);
        assert_almost_eq!(1.0, 1.1, 0.2);
        assert_almost_eq!(0.0f32, -0.0, 0.0);
    }

    #[test]
    fn test_relative() {
        assert_almost_eq!(1e12f64, 1e12 + 1.0, 1e-9);
        assert!(!is_close(1e-3f64, 2e-3, 1e-6));
    }

    #[test]
    fn test_slices() {
        assert_all_almost_eq!([1.0, 2.0], vec![1.0, 2.0 + 1e-12], 1e-9);
    }

    #[test]
    #[should_panic]
    fn test_panic_float() {
        assert_almost_eq!(1.0, 1.2, 0.1);
    }

    #[test]
    #[should_panic]
    fn test_panic_length() {
        assert_all_almost_eq!([1.0, 2.0], [1.0], 0.1);
    }

    #[test]
    #[should_panic]
    fn test_nan_comparison() {
        assert_almost_eq!(f64::NAN, f64::NAN, 0.1);
    }

    #[test]
    #[should_panic]
    fn test_nan_tolerance() {
        assert_almost_eq!(1.0, 2.0, f64::NAN);
    }
}
