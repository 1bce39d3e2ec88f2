//// # Interactive CLT session
////
//// The session accumulates sample means one event at a time. Each event
//// returns a [`SessionView`], a self-contained description of what should be
//// drawn, so that the front-end driving the events never touches the
//// statistics.
////
//// Changing the sample size discards the history: means of samples of
//// different sizes come from different distributions.

use crate::errors::{Error, Result};
use crate::histogram::Histogram;
use crate::stats::{Normal, Summary, UniformPopulation, CURVE_POINTS};
use log::debug;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::ops::Range;

pub const MIN_BINS: usize = 10;
pub const MAX_BINS: usize = 50;

/// Number of standard deviations shown on each side of the mean.
const ZOOM_SIGMAS: f64 = 4.0;

pub fn default_sample_size() -> usize {
    30
}

pub fn default_samples_per_click() -> usize {
    5
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Accumulating,
}

/// Everything needed to draw a non-empty session.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub sample_size: usize,
    pub observed: Summary,
    pub theoretical: Normal,
    pub histogram: Histogram,
    /// Theoretical density over the whole population domain.
    pub curve: Vec<(f64, f64)>,
    pub x_range: Range<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionView {
    /// No means yet, draw the instructions.
    Empty {
        sample_size: usize,
        samples_per_click: usize,
    },
    Accumulating(Snapshot),
}

impl SessionView {
    pub fn state(&self) -> SessionState {
        match self {
            SessionView::Empty { .. } => SessionState::Empty,
            SessionView::Accumulating(_) => SessionState::Accumulating,
        }
    }
}

pub struct CltSession {
    population: UniformPopulation,
    sample_size: usize,
    /// Distribution of the means for the current `sample_size`.
    theoretical: Normal,
    samples_per_click: usize,
    history: Vec<f64>,
    rng: Xoshiro256PlusPlus,
}

impl CltSession {
    pub fn new(
        population: UniformPopulation,
        sample_size: usize,
        samples_per_click: usize,
        seed: u64,
    ) -> Result<Self> {
        let theoretical = population.sampling_distribution(sample_size)?;
        if samples_per_click == 0 {
            return Err(Error::invalid("samples_per_click", 0, "must be at least 1"));
        }
        Ok(Self {
            population,
            sample_size,
            theoretical,
            samples_per_click,
            history: Vec::new(),
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        })
    }

    pub fn state(&self) -> SessionState {
        if self.history.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Accumulating
        }
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn samples_per_click(&self) -> usize {
        self.samples_per_click
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Appends `k` new sample means, each over `sample_size` fresh draws.
    pub fn sample(&mut self, k: usize) -> SessionView {
        self.history.reserve(k);
        for _ in 0..k {
            let m = self.population.sample_mean(&mut self.rng, self.sample_size);
            self.history.push(m);
        }
        debug!("Sampled {} means, history holds {}", k, self.history.len());
        self.view()
    }

    pub fn sample_click(&mut self) -> SessionView {
        self.sample(self.samples_per_click)
    }

    pub fn sample_ten_clicks(&mut self) -> SessionView {
        self.sample(10 * self.samples_per_click)
    }

    pub fn reset(&mut self) -> SessionView {
        self.history.clear();
        self.view()
    }

    pub fn set_sample_size(&mut self, sample_size: usize) -> Result<SessionView> {
        let theoretical = self.population.sampling_distribution(sample_size)?;
        self.sample_size = sample_size;
        self.theoretical = theoretical;
        self.history.clear();
        debug!("Sample size set to {}, history cleared", sample_size);
        Ok(self.view())
    }

    /// Recomputes the derived statistics of the current history.
    pub fn view(&self) -> SessionView {
        let observed = match Summary::of(&self.history) {
            Some(s) => s,
            None => {
                return SessionView::Empty {
                    sample_size: self.sample_size,
                    samples_per_click: self.samples_per_click,
                }
            }
        };
        let theoretical = self.theoretical;
        let (a, b) = self.population.bounds();
        let mu = theoretical.mean();
        let spread = ZOOM_SIGMAS * theoretical.std_dev();
        SessionView::Accumulating(Snapshot {
            sample_size: self.sample_size,
            observed,
            theoretical,
            histogram: Histogram::density(&self.history, bin_count(self.history.len())),
            curve: theoretical.curve(a, b, CURVE_POINTS),
            x_range: (mu - spread).max(a)..(mu + spread).min(b),
        })
    }
}

/// Bins grow with the history, one every five means, within `[MIN_BINS, MAX_BINS]`.
pub fn bin_count(history_len: usize) -> usize {
    (history_len / 5).clamp(MIN_BINS, MAX_BINS)
}
