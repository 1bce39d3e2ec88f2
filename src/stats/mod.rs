//// # Statistics
////
//// The handful of closed-form quantities needed to draw the plots: the normal
//// density used as the CLT overlay, the uniform population the sample means
//// are drawn from, and summaries of observed samples.

mod summary;
mod uniform;

pub use summary::Summary;
pub use uniform::UniformPopulation;

use crate::errors::{Error, Result};
use std::f64::consts::PI;

/// Number of points used to draw a density curve.
pub const CURVE_POINTS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Default for Normal {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }
}

impl Normal {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::invalid("mean", mean, "must be finite"));
        }
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(Error::invalid(
                "std_dev",
                std_dev,
                "must be finite and strictly positive",
            ));
        }
        Ok(Self { mean, std_dev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn pdf(&self, x: f64) -> f64 {
        pdf_unchecked(x, self.mean, self.std_dev)
    }

    /// The density sampled at `points` evenly spaced abscissas in `[lo, hi]`.
    pub fn curve(&self, lo: f64, hi: f64, points: usize) -> Vec<(f64, f64)> {
        linspace(lo, hi, points)
            .map(|x| (x, self.pdf(x)))
            .collect()
    }
}

pub fn pdf_unchecked(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt())
}

/// `points` evenly spaced values from `lo` to `hi`, both included.
pub fn linspace(lo: f64, hi: f64, points: usize) -> impl Iterator<Item = f64> {
    let step = if points > 1 {
        (hi - lo) / (points - 1) as f64
    } else {
        0.0
    };
    (0..points).map(move |i| {
        if i + 1 == points && points > 1 {
            hi
        } else {
            lo + step * i as f64
        }
    })
}
