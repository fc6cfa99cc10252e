//! Monte-Carlo orchestration: the public entry point.
//!
//! Repeats {generate data, derive yield matrices, run every strategy} for
//! `num_experiments` independent trials and averages the per-strategy sums.
//! Trials share nothing but the running accumulator.

use crate::config::ExperimentConfig;
use crate::error::SimError;
use crate::generator::{generate_batch_data, generate_purity};
use crate::report::SimReport;
use crate::strategy::Strategy;
use crate::trial::{run_trial, TrialOutcome};
use crate::yields::compute_yields;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the full Monte-Carlo experiment described by `config`.
///
/// Validates the structural parameters up front, then propagates any
/// invalid-range error from the generator. Each trial draws fresh data; with
/// a fixed seed the whole run is reproducible (trial `i` is seeded with
/// `seed + i`, the same scheme as rerunning any prefix of the trials).
pub fn run_experiments(config: &ExperimentConfig) -> Result<SimReport, SimError> {
    config.validate()?;

    let strategies = Strategy::all(config.switch_step, config.k);
    let mut totals = vec![TrialOutcome::default(); strategies.len()];
    let mut purity_total = 0.0;

    for trial_idx in 0..config.num_experiments {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + u64::from(trial_idx)),
            None => ChaCha8Rng::from_entropy(),
        };

        let data = generate_batch_data(
            config.n,
            config.steps,
            config.quality_range,
            config.degradation_range,
            config.impurities,
            config.ripening,
            &mut rng,
        )?;
        let (initial_purity, _purity_matrix) = generate_purity(config.n, config.steps, &mut rng);
        let matrices = compute_yields(&data);

        let outcomes = run_trial(
            &strategies,
            &matrices.net,
            &data.degradation,
            config.n,
            config.steps,
        );
        for (total, outcome) in totals.iter_mut().zip(&outcomes) {
            total.yield_sum += outcome.yield_sum;
            total.loss_sum += outcome.loss_sum;
        }

        purity_total += initial_purity.iter().sum::<f64>() / initial_purity.len() as f64;

        if config.verbosity >= 2 {
            let (best, best_outcome) = strategies
                .iter()
                .zip(&outcomes)
                .max_by(|(_, a), (_, b)| a.yield_sum.total_cmp(&b.yield_sum))
                .map(|(s, o)| (s.name(), *o))
                .unwrap_or(("-", TrialOutcome::default()));
            println!(
                "Trial {}/{} - best {} (yield {:.3}, loss {:.3})",
                trial_idx + 1,
                config.num_experiments,
                best,
                best_outcome.yield_sum,
                best_outcome.loss_sum
            );
        }
    }

    let trials = f64::from(config.num_experiments);
    for total in &mut totals {
        total.yield_sum /= trials;
        total.loss_sum /= trials;
    }

    Ok(SimReport::from_totals(
        &strategies,
        &totals,
        config.num_experiments,
        purity_total / trials,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ExperimentConfig {
        ExperimentConfig {
            num_experiments: 20,
            n: 8,
            steps: 8,
            switch_step: 5,
            k: 3,
            quality_range: (0.12, 0.22),
            degradation_range: (0.85, 1.0),
            impurities: false,
            ripening: false,
            seed: Some(42),
            verbosity: 0,
        }
    }

    #[test]
    fn test_run_produces_all_strategies() {
        let report = run_experiments(&test_config()).unwrap();
        let names: Vec<&str> = report.results.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["Greedy", "Thrifty", "Thr/Grd", "Grd/Thr", "T(k)G", "CTG"]
        );
        assert_eq!(report.num_experiments, 20);
    }

    #[test]
    fn test_averages_non_negative() {
        let mut config = test_config();
        config.impurities = true;
        config.ripening = true;
        let report = run_experiments(&config).unwrap();
        for r in &report.results {
            assert!(r.avg_yield >= 0.0);
            assert!(r.avg_loss >= 0.0);
        }
        assert!((0.62..0.64).contains(&report.avg_initial_purity));
    }

    #[test]
    fn test_seeded_runs_reproducible() {
        let a = run_experiments(&test_config()).unwrap();
        let b = run_experiments(&test_config()).unwrap();
        for (ra, rb) in a.results.iter().zip(&b.results) {
            assert_eq!(ra.avg_yield, rb.avg_yield);
            assert_eq!(ra.avg_loss, rb.avg_loss);
        }
    }

    #[test]
    fn test_invalid_range_propagated() {
        let mut config = test_config();
        config.quality_range = (0.2, 0.1);
        let err = run_experiments(&config).unwrap_err();
        assert!(matches!(err, SimError::InvalidRange { what: "quality", .. }));
    }

    #[test]
    fn test_invalid_parameters_rejected_up_front() {
        let mut config = test_config();
        config.switch_step = 99;
        assert!(matches!(
            run_experiments(&config),
            Err(SimError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_greedy_never_below_thrifty_on_average() {
        // Greedy always takes the step maximum, so across many trials its
        // average yield dominates Thrifty's.
        let mut config = test_config();
        config.num_experiments = 200;
        let report = run_experiments(&config).unwrap();
        let greedy = report.results.iter().find(|r| r.name == "Greedy").unwrap();
        let thrifty = report.results.iter().find(|r| r.name == "Thrifty").unwrap();
        assert!(greedy.avg_yield >= thrifty.avg_yield);
    }
}
