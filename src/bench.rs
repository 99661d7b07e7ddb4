//! Runtime benchmark across growing input sizes.
//!
//! For every selected algorithm and every size, a fresh random permutation of `0..size` is
//! sorted by draining its step sequence without looking at the steps. Wall-clock time and
//! step counts are collected into a [`BenchReport`].

use crate::core::StepSequence;
use crate::error::{Error, Result};
use crate::registry::Algorithm;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

/// Smallest input size a benchmark starts from.
pub const MIN_SIZE: usize = 10;

pub const DEFAULT_MAX_SIZE: usize = 5000;
pub const DEFAULT_STEP_SIZE: usize = 250;

/// Which sizes to benchmark and how to seed the inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub max_size: usize,
    pub step_size: usize,
    /// Fixed seed for reproducible inputs. Uses OS entropy when unset.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            step_size: DEFAULT_STEP_SIZE,
            seed: None,
        }
    }
}

impl BenchConfig {
    /// Parses a TOML document. Missing keys take their defaults.
    ///
    /// ```
    /// use sortsteps::bench::BenchConfig;
    ///
    /// let config = BenchConfig::from_toml_str("max_size = 100\nseed = 7").unwrap();
    /// assert_eq!(config.max_size, 100);
    /// assert_eq!(config.step_size, 250);
    /// assert_eq!(config.seed, Some(7));
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Clamps `max_size` to at least [`MIN_SIZE`] and `step_size` to at least one.
    pub fn normalized(mut self) -> Self {
        self.max_size = self.max_size.max(MIN_SIZE);
        self.step_size = self.step_size.max(1);
        self
    }

    /// Input sizes `MIN_SIZE, MIN_SIZE + step, ...` up to and including `max_size`.
    pub fn sizes(&self) -> Vec<usize> {
        let config = self.clone().normalized();
        (MIN_SIZE..=config.max_size)
            .step_by(config.step_size)
            .collect()
    }
}

/// A shuffled `0..n`.
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut values: Vec<usize> = (0..n).collect();
    values.shuffle(rng);
    values
}

/// One timed drain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sample {
    pub size: usize,
    pub millis: f64,
    pub steps: u64,
}

/// All samples of one algorithm, in size order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub algorithm: Algorithm,
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn total_millis(&self) -> f64 {
        self.samples.iter().map(|s| s.millis).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BenchReport {
    pub sizes: Vec<usize>,
    pub series: Vec<Series>,
}

/// Sorts one permutation and times it.
pub fn measure(algorithm: Algorithm, mut data: Vec<usize>) -> Sample {
    let size = data.len();
    let start = Instant::now();
    let steps = algorithm.steps(&mut data).drain_count();
    let millis = start.elapsed().as_secs_f64() * 1000.0;

    debug_assert!(data.is_sorted());
    Sample {
        size,
        millis,
        steps,
    }
}

/// Benchmarks each of `algorithms` over every size in `config`.
pub fn run(config: &BenchConfig, algorithms: &[Algorithm]) -> Result<BenchReport> {
    if algorithms.is_empty() {
        return Err(Error::NoAlgorithms);
    }

    let config = config.clone().normalized();
    let sizes = config.sizes();
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!(
        algorithms = algorithms.len(),
        sizes = sizes.len(),
        max_size = config.max_size,
        "starting benchmark"
    );

    let series = algorithms
        .iter()
        .map(|&algorithm| {
            let samples: Vec<Sample> = sizes
                .iter()
                .map(|&size| {
                    let sample = measure(algorithm, random_permutation(size, &mut rng));
                    debug!(%algorithm, size, millis = sample.millis, steps = sample.steps, "sample");
                    sample
                })
                .collect();
            let series = Series {
                algorithm,
                samples,
            };
            info!(%algorithm, total_millis = series.total_millis(), "algorithm done");
            series
        })
        .collect();

    Ok(BenchReport { sizes, series })
}
