use super::frequency::RelativeFrequencies;
use crate::Energy;
use crate::Entropy;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;

/// Three views of how far a frequency table is from uniform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivergenceMetrics {
    /// Σ (1/n − f)² over every cell
    pub sum_squared: Energy,
    /// KL(f ‖ uniform), natural log, both sides normalized over all n² cells
    pub entropy: Entropy,
    /// sup |F(x) − x| of the cell values against the continuous U(0, 1) law
    pub kolmogorov_smirnov: Energy,
}

impl From<&RelativeFrequencies> for DivergenceMetrics {
    fn from(freqs: &RelativeFrequencies) -> Self {
        Self {
            sum_squared: Self::sum_squared(freqs),
            entropy: Self::entropy(freqs),
            kolmogorov_smirnov: Self::kolmogorov_smirnov(freqs),
        }
    }
}

impl DivergenceMetrics {
    pub fn get(&self, metric: Metric) -> Energy {
        match metric {
            Metric::SumSquared => self.sum_squared,
            Metric::Entropy => self.entropy,
            Metric::KolmogorovSmirnov => self.kolmogorov_smirnov,
        }
    }

    fn sum_squared(freqs: &RelativeFrequencies) -> Energy {
        let uniform = freqs.uniform();
        freqs
            .flatten()
            .iter()
            .map(|f| uniform - f)
            .map(|d| d * d)
            .sum()
    }

    /// cells with zero observed mass contribute nothing (0 · ln 0 = 0)
    fn entropy(freqs: &RelativeFrequencies) -> Entropy {
        let cells = freqs.flatten();
        let mass = cells.iter().sum::<Probability>();
        let q = 1. / cells.len() as Probability;
        cells
            .iter()
            .map(|f| f / mass)
            .filter(|&p| p > 0.)
            .map(|p| p * (p / q).ln())
            .sum()
    }

    /// one-sample statistic over the sorted cell values x₍₁₎ ≤ … ≤ x₍N₎:
    /// D = max_i max(i/N − x₍ᵢ₎, x₍ᵢ₎ − (i−1)/N)
    fn kolmogorov_smirnov(freqs: &RelativeFrequencies) -> Energy {
        let mut cells = freqs.flatten().to_vec();
        cells.sort_by(|a, b| a.total_cmp(b));
        let n = cells.len() as Energy;
        cells
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let above = (i + 1) as Energy / n - x;
                let below = x - i as Energy / n;
                above.max(below)
            })
            .fold(0., Energy::max)
    }
}

impl std::fmt::Display for DivergenceMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "sum squared {:.6}  entropy {:.6}  kolmogorov-smirnov {:.6}",
            self.sum_squared, self.entropy, self.kolmogorov_smirnov
        )
    }
}

/// One of the three divergence measures, for selecting and labelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    KolmogorovSmirnov,
    SumSquared,
    Entropy,
}

impl Metric {
    pub const fn all() -> [Self; 3] {
        [Self::KolmogorovSmirnov, Self::SumSquared, Self::Entropy]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::KolmogorovSmirnov => "Kolmogorov-Smirnov Statistic",
            Self::SumSquared => "Sum of the Squared Differences",
            Self::Entropy => "Relative Information Entropy",
        }
    }
}
