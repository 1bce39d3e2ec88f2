//// # Histograms
////
//// Equal-width binning normalized to a density, so that the bars can be
//// drawn on the same scale as a probability density function.

#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
    /// `count / (total * width)`
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bins: Vec<Bin>,
    pub total: usize,
}

impl Histogram {
    /// Bins `values` into `num_bins` equal-width bins spanning `[min, max]`;
    /// the last bin includes its upper edge. When all the values coincide
    /// the range is widened to `[x - 0.5, x + 0.5]`.
    ///
    /// # Panics
    ///
    /// If `num_bins` is zero.
    pub fn density(values: &[f64], num_bins: usize) -> Self {
        assert!(num_bins > 0);
        if values.is_empty() {
            return Self {
                bins: Vec::new(),
                total: 0,
            };
        }
        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }
        let width = (hi - lo) / num_bins as f64;

        let mut counts = vec![0usize; num_bins];
        for &x in values {
            let i = (((x - lo) / width) as usize).min(num_bins - 1);
            counts[i] += 1;
        }

        let total = values.len();
        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let b_lo = lo + i as f64 * width;
                let b_hi = if i + 1 == num_bins { hi } else { b_lo + width };
                Bin {
                    lo: b_lo,
                    hi: b_hi,
                    count,
                    density: count as f64 / (total as f64 * width),
                }
            })
            .collect();
        Self { bins, total }
    }

    pub fn max_density(&self) -> f64 {
        self.bins.iter().map(|b| b.density).fold(0.0, f64::max)
    }
}
