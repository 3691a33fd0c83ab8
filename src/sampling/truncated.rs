//! Normal distribution truncated to the social-distance interval `[0, 1]`.
//!
//! When the interval holds a reasonable share of the mass, draws outside it
//! are discarded and redrawn, never clamped. When the share is small (a very
//! wide or far-off distribution) a uniform draw is mapped through the inverse
//! normal CDF restricted to the interval instead.

use std::f64::consts::SQRT_2;

use rand::Rng;
use rand_distr::{Distribution, Normal};
use statrs::function::erf::{erfc, erfc_inv};
use thiserror::Error;

pub const LOWER_BOUND: f64 = 0.0;
pub const UPPER_BOUND: f64 = 1.0;

/// Consecutive rejections after which rejection sampling gives up.
pub const MAX_REJECTIONS: u32 = 100_000;

/// Below this interval mass, sampling switches from rejection to inverse CDF.
pub const MIN_REJECTION_MASS: f64 = 0.01;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    #[error("truncated normal parameters must be finite (mean={mean}, std_dev={std_dev})")]
    NonFiniteParameter { mean: f64, std_dev: f64 },

    #[error("truncated normal standard deviation must be positive, got {std_dev}")]
    NonPositiveStdDev { std_dev: f64 },

    #[error("[0, 1] holds no probability mass (mean={mean}, std_dev={std_dev})")]
    EmptyInterval { mean: f64, std_dev: f64 },

    #[error("no sample inside [0, 1] after {attempts} draws (mean={mean}, std_dev={std_dev})")]
    Exhausted { mean: f64, std_dev: f64, attempts: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Method {
    Rejection,
    /// CDF at the lower edge and the interval mass, taken in the lower tail;
    /// `mirrored` when the whole interval lies above the mean.
    InverseCdf {
        cdf_lower: f64,
        mass: f64,
        mirrored: bool,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct TruncatedNormal {
    mean: f64,
    std_dev: f64,
    normal: Normal<f64>,
    method: Method,
}

fn standard_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

fn standard_quantile(p: f64) -> f64 {
    -SQRT_2 * erfc_inv(2.0 * p)
}

impl TruncatedNormal {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, SamplingError> {
        if !mean.is_finite() || !std_dev.is_finite() {
            return Err(SamplingError::NonFiniteParameter { mean, std_dev });
        }
        if std_dev <= 0.0 {
            return Err(SamplingError::NonPositiveStdDev { std_dev });
        }
        let normal =
            Normal::new(mean, std_dev).map_err(|_| SamplingError::NonPositiveStdDev { std_dev })?;

        let lower = (LOWER_BOUND - mean) / std_dev;
        let upper = (UPPER_BOUND - mean) / std_dev;
        let mirrored = lower > 0.0;
        let (lower, upper) = if mirrored { (-upper, -lower) } else { (lower, upper) };
        let cdf_lower = standard_cdf(lower);
        let mass = standard_cdf(upper) - cdf_lower;
        if mass <= 0.0 {
            return Err(SamplingError::EmptyInterval { mean, std_dev });
        }

        let method = if mass >= MIN_REJECTION_MASS {
            Method::Rejection
        } else {
            Method::InverseCdf {
                cdf_lower,
                mass,
                mirrored,
            }
        };
        Ok(Self {
            mean,
            std_dev,
            normal,
            method,
        })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// One draw inside `[0, 1]`. Rejection sampling consumes a variable number
    /// of draws from `rng`; the inverse-CDF path consumes exactly one.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, SamplingError> {
        match self.method {
            Method::Rejection => self.sample_rejection(rng),
            Method::InverseCdf {
                cdf_lower,
                mass,
                mirrored,
            } => {
                let p = cdf_lower + rng.gen::<f64>() * mass;
                let z = standard_quantile(p);
                let z = if mirrored { -z } else { z };
                Ok((self.mean() + self.std_dev() * z).clamp(LOWER_BOUND, UPPER_BOUND))
            }
        }
    }

    fn sample_rejection<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, SamplingError> {
        for _ in 0..MAX_REJECTIONS {
            let draw = self.normal.sample(rng);
            if (LOWER_BOUND..=UPPER_BOUND).contains(&draw) {
                return Ok(draw);
            }
        }
        Err(SamplingError::Exhausted {
            mean: self.mean(),
            std_dev: self.std_dev(),
            attempts: MAX_REJECTIONS,
        })
    }

    /// `count` independent draws, one per player.
    pub fn sample_n<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>, SamplingError> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}
