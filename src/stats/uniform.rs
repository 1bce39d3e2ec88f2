use super::Normal;
use crate::errors::{Error, Result};
use rand::Rng;
use rand_distr::Uniform;

/// The continuous uniform distribution `U[a, b)` the CLT demos sample from.
#[derive(Debug, Clone)]
pub struct UniformPopulation {
    a: f64,
    b: f64,
    dist: Uniform<f64>,
}

impl Default for UniformPopulation {
    fn default() -> Self {
        Self {
            a: 0.0,
            b: 1.0,
            dist: Uniform::new(0.0, 1.0),
        }
    }
}

impl UniformPopulation {
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !a.is_finite() || !b.is_finite() {
            return Err(Error::invalid("a, b", format!("[{}, {}]", a, b), "bounds must be finite"));
        }
        if a >= b {
            return Err(Error::invalid(
                "a, b",
                format!("[{}, {}]", a, b),
                "lower bound must be smaller than the upper bound",
            ));
        }
        if !(b - a).is_finite() {
            return Err(Error::invalid("a, b", format!("[{}, {}]", a, b), "range too wide"));
        }
        Ok(Self {
            a,
            b,
            dist: Uniform::new(a, b),
        })
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.a, self.b)
    }

    pub fn mean(&self) -> f64 {
        self.a + (self.b - self.a) / 2.0
    }

    pub fn std_dev(&self) -> f64 {
        (self.b - self.a) / 12f64.sqrt()
    }

    /// Distribution of the mean of `sample_size` draws according to the CLT:
    /// same mean, standard deviation shrunk by `sqrt(sample_size)`.
    pub fn sampling_distribution(&self, sample_size: usize) -> Result<Normal> {
        if sample_size == 0 {
            return Err(Error::invalid("sample_size", sample_size, "must be at least 1"));
        }
        Normal::new(self.mean(), self.std_dev() / (sample_size as f64).sqrt())
    }

    /// Draws `sample_size` values and returns their arithmetic mean.
    ///
    /// # Panics
    ///
    /// If `sample_size` is zero.
    pub fn sample_mean<R: Rng + ?Sized>(&self, rng: &mut R, sample_size: usize) -> f64 {
        assert!(sample_size > 0, "the mean of an empty sample is undefined");
        let mut s = 0.0;
        for _ in 0..sample_size {
            s += rng.sample(self.dist);
        }
        s / sample_size as f64
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_population_moments() {
        let u = UniformPopulation::default();
        assert_eq!(u.mean(), 0.5);
        assert!((u.std_dev() - 0.288675134594813).abs() < 1e-12);

        let u = UniformPopulation::new(2.0, 8.0).unwrap();
        assert_eq!(u.mean(), 5.0);
        assert!((u.std_dev() - 6.0 / 12f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_sampling_distribution() {
        let u = UniformPopulation::default();
        let n = u.sampling_distribution(100).unwrap();
        assert_eq!(n.mean(), 0.5);
        assert!((n.std_dev() - u.std_dev() / 10.0).abs() < 1e-12);
        assert!(u.sampling_distribution(0).is_err());
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(UniformPopulation::new(1.0, 1.0).is_err());
        assert!(UniformPopulation::new(1.0, 0.0).is_err());
        assert!(UniformPopulation::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_rejects_overflowing_range() {
        assert!(matches!(
            UniformPopulation::new(-1e308, 1e308),
            Err(Error::InvalidParameter {
                reason: "range too wide",
                ..
            })
        ));
        assert!(matches!(
            UniformPopulation::new(-f64::MAX, f64::MAX),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_mean_of_large_bounds_is_finite() {
        let u = UniformPopulation::new(1e308, 1.7e308).unwrap();
        assert!(u.mean().is_finite());
        assert!(u.sampling_distribution(4).is_ok());
    }

    #[test]
    #[should_panic]
    fn test_sample_mean_of_nothing() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        UniformPopulation::default().sample_mean(&mut rng, 0);
    }

    #[test]
    fn test_sample_mean_in_bounds() {
        let u = UniformPopulation::new(-1.0, 3.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3462);
        for n in [1, 2, 30] {
            for _ in 0..1000 {
                let m = u.sample_mean(&mut rng, n);
                assert!((-1.0..3.0).contains(&m));
            }
        }
    }
}
