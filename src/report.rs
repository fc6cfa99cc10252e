//! Experiment report generation.

use crate::strategy::Strategy;
use crate::trial::TrialOutcome;
use serde::Serialize;

/// Averaged yield and loss for one strategy.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StrategyResult {
    #[serde(skip)]
    pub name: &'static str,
    #[serde(rename = "yield")]
    pub avg_yield: f64,
    #[serde(rename = "loss")]
    pub avg_loss: f64,
}

/// Aggregated results of one Monte-Carlo run.
///
/// Results appear in registry order; consumers that want a mapping key them
/// by `StrategyResult::name` (that is exactly what [`SimReport::to_json`]
/// produces). Immutable once built.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_experiments: u32,
    pub results: Vec<StrategyResult>,
    /// Mean initial purity index across batches and trials (informational)
    pub avg_initial_purity: f64,
}

impl SimReport {
    /// Build a report from the already-averaged per-strategy totals.
    pub fn from_totals(
        strategies: &[Strategy],
        averages: &[TrialOutcome],
        num_experiments: u32,
        avg_initial_purity: f64,
    ) -> Self {
        let results = strategies
            .iter()
            .zip(averages)
            .map(|(strategy, avg)| StrategyResult {
                name: strategy.name(),
                avg_yield: avg.yield_sum,
                avg_loss: avg.loss_sum,
            })
            .collect();

        Self {
            num_experiments,
            results,
            avg_initial_purity,
        }
    }

    /// The recommended strategy: maximum average yield, ties broken by
    /// minimum average loss. `None` only for an empty result set.
    pub fn recommendation(&self) -> Option<&StrategyResult> {
        let mut best: Option<&StrategyResult> = None;
        for r in &self.results {
            best = match best {
                None => Some(r),
                Some(b)
                    if r.avg_yield > b.avg_yield
                        || (r.avg_yield == b.avg_yield && r.avg_loss < b.avg_loss) =>
                {
                    Some(r)
                }
                Some(b) => Some(b),
            };
        }
        best
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════\n");
        report.push_str("                  STRATEGY COMPARISON\n");
        report.push_str("═══════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Trials averaged: {}\n", self.num_experiments));
        report.push_str(&format!(
            "Avg initial purity: {:.4}\n\n",
            self.avg_initial_purity
        ));

        report.push_str(&format!(
            "  {:<10} {:>12} {:>12}\n",
            "Strategy", "Avg Yield", "Avg Loss"
        ));
        report.push_str("  ─────────────────────────────────────\n");
        for r in &self.results {
            report.push_str(&format!(
                "  {:<10} {:>12.4} {:>12.4}\n",
                r.name, r.avg_yield, r.avg_loss
            ));
        }

        if let Some(best) = self.recommendation() {
            report.push_str(&format!(
                "\nRecommended strategy: {}\n  Yield: {:.4}\n  Loss:  {:.4}\n",
                best.name, best.avg_yield, best.avg_loss
            ));
        }

        report
    }

    /// Serialize the results mapping to a JSON string keyed by strategy name.
    pub fn to_json(&self) -> String {
        let map: serde_json::Map<String, serde_json::Value> = self
            .results
            .iter()
            .map(|r| {
                let value = serde_json::to_value(r).unwrap_or(serde_json::Value::Null);
                (r.name.to_string(), value)
            })
            .collect();

        let doc = serde_json::json!({
            "num_experiments": self.num_experiments,
            "avg_initial_purity": self.avg_initial_purity,
            "results": map,
        });

        serde_json::to_string_pretty(&doc).unwrap_or_else(|_| "{}".to_string())
    }
}
