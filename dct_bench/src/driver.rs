// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Timed runs of the transform on synthetic input.

use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::{
    dct2d::{Dct2d, dct2d},
    error::Result,
    matrix::Matrix,
    util::tracing_wrappers::*,
};

pub const DEFAULT_SIZE: usize = 256;

/// Upper (exclusive) bound of the synthetic sample values.
pub const SAMPLE_RANGE: f64 = 256.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputDistribution {
    /// Reals drawn uniformly from `[0, 256)`.
    Uniform,
    /// Integers drawn uniformly from `0..=255`.
    Integer,
}

impl InputDistribution {
    fn sample<R: Rng>(self, rng: &mut R) -> f64 {
        match self {
            InputDistribution::Uniform => rng.random::<f64>() * SAMPLE_RANGE,
            InputDistribution::Integer => rng.random_range(0..SAMPLE_RANGE as u32) as f64,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkConfig {
    pub size: usize,
    pub distribution: InputDistribution,
    pub repetitions: usize,
    /// Build the coefficient matrix once and reuse it for every repetition
    /// instead of rebuilding it inside each timed call.
    pub cache_coefficients: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            size: DEFAULT_SIZE,
            distribution: InputDistribution::Uniform,
            repetitions: 1,
            cache_coefficients: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub elapsed: Duration,
    /// Element `(0, 0)` of the transformed matrix.
    pub corner: f64,
}

impl Measurement {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

#[derive(Clone, Debug)]
pub struct BenchmarkReport {
    pub size: usize,
    pub measurements: Vec<Measurement>,
}

impl BenchmarkReport {
    pub fn seconds(&self) -> impl Iterator<Item = f64> + '_ {
        self.measurements.iter().map(Measurement::seconds)
    }
}

/// Fills a `size` x `size` matrix with independent draws from `distribution`.
pub fn random_input<R: Rng>(
    size: usize,
    distribution: InputDistribution,
    rng: &mut R,
) -> Result<Matrix> {
    Matrix::from_fn(size, |_, _| distribution.sample(rng))
}

/// Times a single transform of `input`. When `dct` is given, its cached
/// coefficients are used.
pub fn time_transform(input: &Matrix, dct: Option<&mut Dct2d>) -> Result<Measurement> {
    let start = Instant::now();
    let result = match dct {
        Some(dct) => dct.transform(input)?,
        None => dct2d(input)?,
    };
    let elapsed = start.elapsed();
    let corner = black_box(result[(0, 0)]);
    Ok(Measurement { elapsed, corner })
}

pub fn run_benchmark<R: Rng>(config: &BenchmarkConfig, rng: &mut R) -> Result<BenchmarkReport> {
    let mut dct = config.cache_coefficients.then(Dct2d::new);
    let mut measurements = Vec::with_capacity(config.repetitions);
    for rep in 0..config.repetitions {
        let input = random_input(config.size, config.distribution, rng)?;
        let measurement = time_transform(&input, dct.as_mut())?;
        debug!(
            "repetition {rep}: {}x{} in {:?}",
            config.size, config.size, measurement.elapsed
        );
        measurements.push(measurement);
    }
    Ok(BenchmarkReport {
        size: config.size,
        measurements,
    })
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Time: {:.3}", elapsed.as_secs_f64())
}
