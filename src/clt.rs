//// # Batch CLT demonstration
////
//// For every sample size `n` we repeat the experiment "draw `n` values from
//// the uniform population and take their mean" a fixed number of times. The
//// collected means are summarized and binned, and paired with the normal
//// distribution the CLT predicts for them.

use crate::errors::{Error, Result};
use crate::histogram::Histogram;
use crate::stats::{Normal, Summary, UniformPopulation, CURVE_POINTS};
use indicatif::ProgressBar;
use log::{debug, info};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Bins used for every panel of the batch figure.
pub const BATCH_BINS: usize = 50;

pub fn default_sample_sizes() -> Vec<usize> {
    vec![1, 2, 5, 10, 30, 100]
}

pub fn default_experiments() -> usize {
    10_000
}

pub fn default_seed() -> u64 {
    42
}

#[derive(Debug, Clone)]
pub struct CltExperiment {
    pub sample_sizes: Vec<usize>,
    pub experiments: usize,
    pub seed: u64,
    pub population: UniformPopulation,
}

impl Default for CltExperiment {
    fn default() -> Self {
        Self {
            sample_sizes: default_sample_sizes(),
            experiments: default_experiments(),
            seed: default_seed(),
            population: UniformPopulation::default(),
        }
    }
}

/// The outcome of the experiments for a single sample size.
#[derive(Debug, Clone)]
pub struct CltPanel {
    pub sample_size: usize,
    pub means: Vec<f64>,
    pub observed: Summary,
    pub theoretical: Normal,
    pub histogram: Histogram,
    /// Theoretical density over the range of the observed means.
    pub curve: Vec<(f64, f64)>,
}

impl CltExperiment {
    pub fn validate(&self) -> Result<()> {
        if self.sample_sizes.is_empty() {
            return Err(Error::invalid(
                "sample_sizes",
                "[]",
                "at least one sample size is required",
            ));
        }
        if let Some(&n) = self.sample_sizes.iter().find(|&&n| n == 0) {
            return Err(Error::invalid("sample_size", n, "must be at least 1"));
        }
        if self.experiments == 0 {
            return Err(Error::invalid("experiments", 0, "must be at least 1"));
        }
        Ok(())
    }

    /// Total number of experiments across all sample sizes.
    pub fn total_experiments(&self) -> u64 {
        (self.sample_sizes.len() * self.experiments) as u64
    }

    /// Runs all the experiments, one panel per sample size in the configured
    /// order. The same seed always yields the same panels.
    pub fn run(&self, pbar: &ProgressBar) -> Result<Vec<CltPanel>> {
        self.validate()?;
        info!(
            "Running {} experiments for sample sizes {:?} (seed {})",
            self.experiments, self.sample_sizes, self.seed
        );
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.seed);

        let mut panels = Vec::with_capacity(self.sample_sizes.len());
        for &n in &self.sample_sizes {
            pbar.set_message(format!("n = {}", n));
            let mut means = Vec::with_capacity(self.experiments);
            for _ in 0..self.experiments {
                means.push(self.population.sample_mean(&mut rng, n));
                pbar.inc(1);
            }
            let panel = self.panel(n, means)?;
            debug!(
                "n = {}: observed mean {:.4} std {:.4}, theoretical mean {:.4} std {:.4}",
                n,
                panel.observed.mean,
                panel.observed.std_dev,
                panel.theoretical.mean(),
                panel.theoretical.std_dev()
            );
            panels.push(panel);
        }
        pbar.finish_and_clear();
        Ok(panels)
    }

    fn panel(&self, sample_size: usize, means: Vec<f64>) -> Result<CltPanel> {
        let observed = Summary::of(&means)
            .ok_or_else(|| Error::invalid("experiments", 0, "must be at least 1"))?;
        let theoretical = self.population.sampling_distribution(sample_size)?;
        let histogram = Histogram::density(&means, BATCH_BINS);
        let curve = theoretical.curve(observed.min, observed.max, CURVE_POINTS);
        Ok(CltPanel {
            sample_size,
            means,
            observed,
            theoretical,
            histogram,
            curve,
        })
    }
}
