// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use color_eyre::eyre::{Result, eyre};
use statrs::distribution::{ContinuousCDF, StudentsT};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub samples: usize,
    pub mean: f64,
    /// Half-width of the confidence interval around `mean`.
    pub margin: f64,
    pub confidence: f64,
}

impl Summary {
    /// Confidence interval for a constant value measured with noise.
    ///
    /// With uninformative priors, the Bayesian credible interval equals the
    /// frequentist t-interval. Each measurement = true_value + noise, with
    /// unknown true value and noise variance.
    pub fn compute(measurements: &[f64], confidence: f64) -> Result<Summary> {
        if !(confidence > 0.0 && confidence < 1.0) {
            return Err(eyre!("Can't compute with confidence {}", confidence));
        }
        let samples = measurements.len();
        if samples <= 2 {
            return Err(eyre!("Can't compute with {} measurements", samples));
        }
        let n = samples as f64;
        let mean = measurements.iter().sum::<f64>() / n;
        let variance = measurements
            .iter()
            .map(|x| (x - mean).powi(2))
            .sum::<f64>()
            / (n - 1.0);
        let std_error = (variance / n).sqrt();

        let t_dist = StudentsT::new(0.0, 1.0, n - 1.0)?;
        let t_critical = t_dist.inverse_cdf(1.0 - (1.0 - confidence) / 2.0);

        Ok(Summary {
            samples,
            mean,
            margin: t_critical * std_error,
            confidence,
        })
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Mean: {:.3} ± {:.3} ({:.1}% confidence, {} samples)",
            self.mean,
            self.margin,
            100.0 * self.confidence,
            self.samples
        )
    }
}
