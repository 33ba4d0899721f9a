use super::chart::Scatter;
use crate::DivergenceMetrics;
use crate::Metric;
use serde::Serialize;

/// Renders the results of an experiment. sits entirely outside the
/// computation: nothing in the experiment knows whether it is used.
#[derive(Debug, Clone, Default)]
pub struct Report(Vec<(usize, DivergenceMetrics)>);

#[derive(Serialize)]
struct Row<'a> {
    shuffles: usize,
    #[serde(flatten)]
    metrics: &'a DivergenceMetrics,
}

impl From<Vec<(usize, DivergenceMetrics)>> for Report {
    fn from(results: Vec<(usize, DivergenceMetrics)>) -> Self {
        Self(results)
    }
}

impl Report {
    pub fn results(&self) -> &[(usize, DivergenceMetrics)] {
        &self.0
    }

    pub fn chart(&self, metric: Metric) -> Scatter<'static> {
        Scatter::new(
            metric.label(),
            self.0.iter().map(|(k, m)| (*k, m.get(metric))).collect(),
        )
    }

    pub fn json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(
            &self
                .0
                .iter()
                .map(|(shuffles, metrics)| Row {
                    shuffles: *shuffles,
                    metrics,
                })
                .collect::<Vec<_>>(),
        )
    }

    pub fn csv(&self) -> String {
        std::iter::once("shuffles,sum_squared,entropy,kolmogorov_smirnov".to_string())
            .chain(self.0.iter().map(|(k, m)| {
                format!(
                    "{},{},{},{}",
                    k, m.sum_squared, m.entropy, m.kolmogorov_smirnov
                )
            }))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// one scatter per metric, Kolmogorov-Smirnov first
impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for metric in Metric::all() {
            writeln!(f, "{}", self.chart(metric))?;
        }
        Ok(())
    }
}
