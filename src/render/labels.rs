use std::fmt::Display;
use std::str::FromStr;

/// Language of the text drawn on the figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Chinese,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "zh" | "chinese" => Ok(Locale::Chinese),
            other => Err(format!("unknown locale `{}`, expected `en` or `zh`", other)),
        }
    }
}

impl Locale {
    /// A font family able to draw the labels of this locale.
    pub fn font_family(&self) -> &'static str {
        match self {
            Locale::English => "sans-serif",
            Locale::Chinese => "Noto Sans CJK SC",
        }
    }

    pub fn sample_mean(&self) -> &'static str {
        match self {
            Locale::English => "sample mean",
            Locale::Chinese => "样本均值",
        }
    }

    pub fn density(&self) -> &'static str {
        match self {
            Locale::English => "probability density",
            Locale::Chinese => "概率密度",
        }
    }

    pub fn means_histogram(&self, count: Option<usize>) -> String {
        match (self, count) {
            (Locale::English, None) => "distribution of sample means".to_string(),
            (Locale::English, Some(c)) => format!("distribution of sample means ({} total)", c),
            (Locale::Chinese, None) => "样本均值分布".to_string(),
            (Locale::Chinese, Some(c)) => format!("样本均值分布 (共 {} 次)", c),
        }
    }

    pub fn normal_curve(&self, mean: f64, std_dev: f64) -> String {
        match self {
            Locale::English => format!("theoretical normal N({}, {:.4}²)", mean, std_dev),
            Locale::Chinese => format!("理论正态分布 N({}, {:.4}²)", mean, std_dev),
        }
    }

    pub fn mean_marker(&self, mean: f64) -> String {
        match self {
            Locale::English => format!("observed mean: {:.4}", mean),
            Locale::Chinese => format!("实际均值: {:.4}", mean),
        }
    }

    pub fn sample_size_caption(&self, n: usize) -> String {
        match self {
            Locale::English => format!("sample size n = {}", n),
            Locale::Chinese => format!("样本大小 n = {}", n),
        }
    }

    /// Observed against theoretical moments, one entry per line.
    pub fn comparison(
        &self,
        observed_mean: f64,
        theoretical_mean: f64,
        observed_std: f64,
        theoretical_std: f64,
    ) -> Vec<String> {
        let names = match self {
            Locale::English => ["observed mean", "theoretical mean", "observed std", "theoretical std"],
            Locale::Chinese => ["实际均值", "理论均值", "实际标准差", "理论标准差"],
        };
        names
            .iter()
            .zip([observed_mean, theoretical_mean, observed_std, theoretical_std])
            .map(|(name, value)| format!("{}: {:.4}", name, value))
            .collect()
    }

    pub fn session_counts(&self, count: usize, n: usize) -> Vec<String> {
        match self {
            Locale::English => vec![format!("samples taken: {}", count), format!("sample size n: {}", n)],
            Locale::Chinese => vec![format!("采样次数: {}", count), format!("样本大小 n: {}", n)],
        }
    }

    pub fn batch_title(&self, a: impl Display, b: impl Display, experiments: usize) -> String {
        match self {
            Locale::English => format!(
                "Central Limit Theorem: sample means of U({}, {}) ({} experiments per sample size)",
                a, b, experiments
            ),
            Locale::Chinese => format!(
                "中心极限定理演示：均匀分布 U({}, {}) 的样本均值分布 (每个样本大小重复 {} 次实验)",
                a, b, experiments
            ),
        }
    }

    pub fn interactive_title(&self, a: impl Display, b: impl Display, n: usize) -> String {
        match self {
            Locale::English => format!(
                "Interactive CLT: means of n={} draws from U({}, {})",
                n, a, b
            ),
            Locale::Chinese => format!(
                "中心极限定理交互演示：从均匀分布 U({}, {}) 中抽取 n={} 个样本",
                a, b, n
            ),
        }
    }

    pub fn placeholder(&self, a: impl Display, b: impl Display, n: usize, per_click: usize) -> Vec<String> {
        match self {
            Locale::English => vec![
                "Type `s` to start sampling!".to_string(),
                String::new(),
                format!("Every sample draws {} values from U({}, {}),", n, a, b),
                "and adds their mean to the histogram.".to_string(),
                format!("`s` takes {} samples, `x` takes {}.", per_click, 10 * per_click),
                String::new(),
                "As the samples pile up, the histogram".to_string(),
                "takes the shape of a normal distribution!".to_string(),
            ],
            Locale::Chinese => vec![
                "输入 `s` 开始采样！".to_string(),
                String::new(),
                format!("每次采样将从 U({}, {}) 中抽取 {} 个样本，", a, b, n),
                "计算它们的均值并添加到直方图中。".to_string(),
                format!("`s` 采样 {} 次，`x` 采样 {} 次。", per_click, 10 * per_click),
                String::new(),
                "随着采样次数增加，".to_string(),
                "你会看到样本均值逐渐呈现正态分布！".to_string(),
            ],
        }
    }

    pub fn binomial_title(&self, n: u64, p: f64) -> String {
        match self {
            Locale::English => format!("Binomial(n={}, p={})", n, p),
            Locale::Chinese => format!("二项分布 Binomial(n={}, p={})", n, p),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::English));
        assert_eq!("ZH".parse::<Locale>(), Ok(Locale::Chinese));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_comparison_lines() {
        let lines = Locale::English.comparison(0.50123, 0.5, 0.0912, 0.0913);
        assert_eq!(
            lines,
            vec![
                "observed mean: 0.5012",
                "theoretical mean: 0.5000",
                "observed std: 0.0912",
                "theoretical std: 0.0913",
            ]
        );
    }
}
