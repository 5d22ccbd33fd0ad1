// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use clap::Parser;
use clap::builder::TypedValueParser;
use color_eyre::eyre::{Result, WrapErr};
use dct_bench::driver::{
    BenchmarkConfig, DEFAULT_SIZE, InputDistribution, format_elapsed, run_benchmark,
};
use dct_bench_cli::stats::Summary;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(name = "dct_bench")]
#[command(about = "Times a naive separable 2D DCT on random data", long_about = None)]
struct Opt {
    /// Width and height of the transformed matrix
    #[clap(long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
    size: usize,

    /// Seed for the input generator; OS entropy is used if not provided
    #[clap(long)]
    seed: Option<u64>,

    /// Draw integer samples in 0..=255 instead of reals in [0, 256)
    #[clap(long)]
    integer_input: bool,

    /// Number of timed transforms, each on fresh input
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
    num_reps: usize,

    /// Reuse the coefficient matrix across repetitions
    #[clap(long)]
    cache_coefficients: bool,

    /// Confidence level of the interval printed when more than two
    /// repetitions are run
    #[clap(long, default_value_t = 0.95, value_parser = parse_confidence)]
    confidence: f64,
}

fn parse_confidence(s: &str) -> Result<f64, String> {
    let confidence: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if confidence > 0.0 && confidence < 1.0 {
        Ok(confidence)
    } else {
        Err(format!("{confidence} is not in the open interval (0, 1)"))
    }
}

impl Opt {
    fn config(&self) -> BenchmarkConfig {
        BenchmarkConfig {
            size: self.size,
            distribution: if self.integer_input {
                InputDistribution::Integer
            } else {
                InputDistribution::Uniform
            },
            repetitions: self.num_reps,
            cache_coefficients: self.cache_coefficients,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    #[cfg(feature = "tracing-subscriber")]
    {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }

    let opt = Opt::parse();
    let mut rng = match opt.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let config = opt.config();
    let report = run_benchmark(&config, &mut rng)
        .wrap_err_with(|| format!("Benchmark of {0}x{0} transform failed", config.size))?;

    for measurement in &report.measurements {
        println!("{}", format_elapsed(measurement.elapsed));
    }

    if report.measurements.len() > 2 {
        let seconds: Vec<f64> = report.seconds().collect();
        println!("{}", Summary::compute(&seconds, opt.confidence)?);
    }

    Ok(())
}
