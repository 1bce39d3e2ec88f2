//// # Binomial distribution
////
//// The mass function `P(X=k) = C(n,k) p^k (1-p)^(n-k)` is evaluated in log
//// space: for `n` in the hundreds both `C(n,k)` and `p^k` leave the range of
//// `f64` long before their product does.

use crate::errors::{Error, Result};

/// Largest number of trials accepted: the mass function is tabulated for
/// every `k` in `0..=n`, one bar per entry.
pub const MAX_TRIALS: u64 = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
}

impl Binomial {
    pub fn new(n: u64, p: f64) -> Result<Self> {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid("p", p, "success probability must lie in [0, 1]"));
        }
        if n > MAX_TRIALS {
            return Err(Error::invalid("n", n, "number of trials must not exceed 10000000"));
        }
        Ok(Self { n, p })
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    pub fn variance(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
    }

    pub fn pmf(&self, k: u64) -> f64 {
        if k > self.n {
            return 0.0;
        }
        if let Some(mass) = self.degenerate_pmf(k) {
            return mass;
        }
        self.pmf_with_ln_choose(k, ln_choose(self.n, k))
    }

    /// The pairs `(k, P(X=k))` for `k = 0..=n`.
    pub fn pmf_table(&self) -> Vec<(u64, f64)> {
        let n = self.n;
        if self.p == 0.0 || self.p == 1.0 {
            return (0..=n)
                .map(|k| (k, self.degenerate_pmf(k).unwrap_or(0.0)))
                .collect();
        }
        let lf = ln_factorials(n);
        (0..=n)
            .map(|k| {
                let ln_c = lf[n as usize] - lf[k as usize] - lf[(n - k) as usize];
                (k, self.pmf_with_ln_choose(k, ln_c))
            })
            .collect()
    }

    /// The most likely number of successes; the smallest one on ties.
    pub fn mode(&self) -> u64 {
        let mut best = (0, f64::NEG_INFINITY);
        for (k, mass) in self.pmf_table() {
            if mass > best.1 {
                best = (k, mass);
            }
        }
        best.0
    }

    fn degenerate_pmf(&self, k: u64) -> Option<f64> {
        if self.p == 0.0 {
            Some(if k == 0 { 1.0 } else { 0.0 })
        } else if self.p == 1.0 {
            Some(if k == self.n { 1.0 } else { 0.0 })
        } else {
            None
        }
    }

    fn pmf_with_ln_choose(&self, k: u64, ln_c: f64) -> f64 {
        let successes = k as f64 * self.p.ln();
        let failures = (self.n - k) as f64 * (-self.p).ln_1p();
        (ln_c + successes + failures).exp()
    }
}

/// `ln(i!)` for `i = 0..=n`.
fn ln_factorials(n: u64) -> Vec<f64> {
    let mut lf = Vec::with_capacity(n as usize + 1);
    let mut acc = 0.0;
    lf.push(acc);
    for i in 1..=n {
        acc += (i as f64).ln();
        lf.push(acc);
    }
    lf
}

/// `ln C(n, k)`, summing over the shorter of the two products.
fn ln_choose(n: u64, k: u64) -> f64 {
    let k = k.min(n - k);
    (1..=k)
        .map(|i| ((n - k + i) as f64).ln() - (i as f64).ln())
        .sum()
}

#[cfg(test)]
mod test {
    use super::*;

    fn choose(n: u64, k: u64) -> f64 {
        let k = k.min(n - k);
        let mut c: u128 = 1;
        for i in 1..=k as u128 {
            c = c * (n as u128 - k as u128 + i) / i;
        }
        c as f64
    }

    #[test]
    fn test_sums_to_one() {
        for n in [0, 1, 2, 7, 30, 100, 1000, 5000] {
            for p in [0.0, 0.01, 0.3, 0.5, 0.77, 1.0] {
                let b = Binomial::new(n, p).unwrap();
                let table = b.pmf_table();
                assert_eq!(table.len(), n as usize + 1);
                let total: f64 = table.iter().map(|(_, m)| m).sum();
                assert!((total - 1.0).abs() < 1e-9, "n={} p={} total={}", n, p, total);
            }
        }
    }

    #[test]
    fn test_matches_closed_form() {
        for n in [1, 5, 20, 60] {
            for p in [0.1, 0.5, 0.9] {
                let b = Binomial::new(n, p).unwrap();
                let table = b.pmf_table();
                for k in 0..=n {
                    let expected = choose(n, k) * p.powi(k as i32) * (1.0 - p).powi((n - k) as i32);
                    let tol = 1e-12 * expected.max(1e-300) + 1e-15;
                    assert!((b.pmf(k) - expected).abs() <= tol, "n={} p={} k={}", n, p, k);
                    assert!((table[k as usize].1 - expected).abs() <= tol);
                }
            }
        }
    }

    #[test]
    fn test_symmetric_around_mode() {
        let b = Binomial::new(1000, 0.5).unwrap();
        assert_eq!(b.mode(), 500);
        let table = b.pmf_table();
        for d in 0..=500 {
            let lo = table[500 - d].1;
            let hi = table[500 + d].1;
            assert!((lo - hi).abs() < 1e-12, "d={}", d);
        }
        assert!((b.pmf(500) - 0.0252250181783).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_probabilities() {
        let b = Binomial::new(10, 0.0).unwrap();
        assert_eq!(b.pmf(0), 1.0);
        assert_eq!(b.pmf(3), 0.0);
        assert_eq!(b.mode(), 0);
        let b = Binomial::new(10, 1.0).unwrap();
        assert_eq!(b.pmf(10), 1.0);
        assert_eq!(b.pmf(9), 0.0);
        assert_eq!(b.mode(), 10);
        assert_eq!(b.pmf(11), 0.0);
    }

    #[test]
    fn test_moments() {
        let b = Binomial::new(40, 0.25).unwrap();
        assert_eq!(b.mean(), 10.0);
        assert_eq!(b.variance(), 7.5);
        let table = b.pmf_table();
        let mean: f64 = table.iter().map(|(k, m)| *k as f64 * m).sum();
        assert!((mean - b.mean()).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_too_many_trials() {
        for n in [MAX_TRIALS + 1, 10_000_000_000, u64::MAX] {
            assert!(matches!(
                Binomial::new(n, 0.5),
                Err(Error::InvalidParameter { name: "n", .. })
            ));
        }
        assert!(Binomial::new(MAX_TRIALS, 0.5).is_ok());
    }

    #[test]
    fn test_rejects_invalid_probability() {
        for p in [-0.1, 1.0001, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Binomial::new(10, p),
                Err(Error::InvalidParameter { name: "p", .. })
            ));
        }
    }
}
