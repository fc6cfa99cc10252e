//! Experiment configuration.

use crate::error::SimError;

/// Configuration for one Monte-Carlo experiment run.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Number of independent trials to average over
    pub num_experiments: u32,

    /// Number of batches per trial
    pub n: usize,

    /// Number of processing steps per trial
    pub steps: usize,

    /// Step at which the hybrid strategies change rule (0..=steps)
    pub switch_step: usize,

    /// Rank picked by T(k)G before its switch step (1..=n)
    pub k: usize,

    /// Uniform sampling range for per-cell sugar content
    pub quality_range: (f64, f64),

    /// Uniform sampling range for per-cell degradation factors
    pub degradation_range: (f64, f64),

    /// Model per-batch inorganic impurities (K, Na, alpha-amino N)
    pub impurities: bool,

    /// Ripening mode: degradation factors redrawn from a fixed interval
    pub ripening: bool,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-trial)
    pub verbosity: u8,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            num_experiments: 50,
            n: 10,
            steps: 10,
            switch_step: 7,
            k: 3,
            quality_range: (0.12, 0.22),
            degradation_range: (0.85, 1.0),
            impurities: false,
            ripening: false,
            seed: None,
            verbosity: 1,
        }
    }
}

impl ExperimentConfig {
    /// Check the structural parameters.
    ///
    /// Range validity is the generator's concern; this rejects zero counts
    /// and a switch step or rank outside their meaningful bounds.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.num_experiments == 0 {
            return Err(SimError::InvalidParameter(
                "num_experiments must be at least 1".to_string(),
            ));
        }
        if self.n == 0 {
            return Err(SimError::InvalidParameter(
                "batch count n must be at least 1".to_string(),
            ));
        }
        if self.steps == 0 {
            return Err(SimError::InvalidParameter(
                "steps must be at least 1".to_string(),
            ));
        }
        if self.switch_step > self.steps {
            return Err(SimError::InvalidParameter(format!(
                "switch_step {} outside 0..={}",
                self.switch_step, self.steps
            )));
        }
        if self.k == 0 || self.k > self.n {
            return Err(SimError::InvalidParameter(format!(
                "k {} outside 1..={}",
                self.k, self.n
            )));
        }
        Ok(())
    }
}
