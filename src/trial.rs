//! Single-trial execution.
//!
//! Runs every registered strategy once over one generated dataset. Each
//! strategy owns its own copy of the available-batch set, so strategies never
//! interfere with each other within a trial.

use crate::generator::Matrix;
use crate::strategy::Strategy;

/// Yield and loss accumulated by one strategy over one trial.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialOutcome {
    pub yield_sum: f64,
    pub loss_sum: f64,
}

/// Run the given strategies over one trial's matrices.
///
/// Per step the selected batch contributes its net yield, plus a scoring loss
/// of `yield * max(0, 1 - degradation)` computed from the *net-yield* matrix
/// and the raw degradation factor. This is not the impurity loss matrix L;
/// the two notions of loss are independent. A strategy whose batch set runs
/// out before the last step simply stops early.
///
/// Returns one outcome per strategy, in the order given.
pub fn run_trial(
    strategies: &[Strategy],
    net: &Matrix,
    degradation: &Matrix,
    n: usize,
    steps: usize,
) -> Vec<TrialOutcome> {
    strategies
        .iter()
        .map(|strategy| {
            let mut outcome = TrialOutcome::default();
            let mut available: Vec<usize> = (0..n).collect();

            for step in 0..steps {
                let Some(selected) = strategy.select(&available, net, step) else {
                    break;
                };

                let sugar = net[selected][step];
                let factor = degradation[selected][step];

                outcome.yield_sum += sugar;
                outcome.loss_sum += sugar * (1.0 - factor).max(0.0);

                available.retain(|&b| b != selected);
            }

            outcome
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_stub_greedy_and_thrifty() {
        // n=3, steps=2, degradation all 1.0 so scoring loss is zero.
        let net = vec![vec![5.0, 0.0], vec![2.0, 4.0], vec![1.0, 3.0]];
        let degradation = vec![vec![1.0, 1.0]; 3];

        let outcomes = run_trial(
            &[Strategy::Greedy, Strategy::Thrifty],
            &net,
            &degradation,
            3,
            2,
        );

        // Greedy: batch 0 (5.0) then batch 1 (4.0).
        assert!((outcomes[0].yield_sum - 9.0).abs() < 1e-12);
        assert_eq!(outcomes[0].loss_sum, 0.0);

        // Thrifty: batch 2 (1.0) then batch 1 (4.0).
        assert!((outcomes[1].yield_sum - 5.0).abs() < 1e-12);
        assert_eq!(outcomes[1].loss_sum, 0.0);
    }

    #[test]
    fn test_scoring_loss_uses_degradation_shortfall() {
        let net = vec![vec![10.0]];
        let degradation = vec![vec![0.6]];

        let outcomes = run_trial(&[Strategy::Greedy], &net, &degradation, 1, 1);
        assert!((outcomes[0].yield_sum - 10.0).abs() < 1e-12);
        // 10.0 * (1 - 0.6)
        assert!((outcomes[0].loss_sum - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_degradation_above_one_adds_no_loss() {
        let net = vec![vec![10.0]];
        let degradation = vec![vec![1.1]];

        let outcomes = run_trial(&[Strategy::Greedy], &net, &degradation, 1, 1);
        assert_eq!(outcomes[0].loss_sum, 0.0);
    }

    #[test]
    fn test_each_batch_consumed_at_most_once() {
        // All yields equal, would otherwise re-pick batch 0 forever.
        let net = vec![vec![2.0; 4]; 4];
        let degradation = vec![vec![1.0; 4]; 4];

        let outcomes = run_trial(&Strategy::all(2, 2), &net, &degradation, 4, 4);
        for o in &outcomes {
            assert!((o.yield_sum - 8.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_early_termination_when_batches_run_out() {
        // n=2 but steps=5: every strategy stops after two selections.
        let net = vec![vec![3.0; 5], vec![1.0; 5]];
        let degradation = vec![vec![1.0; 5]; 2];

        let outcomes = run_trial(&Strategy::all(3, 1), &net, &degradation, 2, 5);
        for o in &outcomes {
            assert!((o.yield_sum - 4.0).abs() < 1e-12);
        }
    }
}
