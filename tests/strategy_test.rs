//! Integration test: strategy selection behavior
//!
//! Drives the strategy table and the single-trial runner over fixed,
//! non-random matrices to pin down selection order, sentinel handling,
//! tie-breaks and batch consumption.

use beetsim::generator::Matrix;
use beetsim::strategy::Strategy;
use beetsim::trial::run_trial;

/// Fixed stub from the deterministic scenario: n=3, steps=2.
fn stub_net() -> Matrix {
    vec![vec![5.0, 0.0], vec![2.0, 4.0], vec![1.0, 3.0]]
}

fn unit_degradation(n: usize, steps: usize) -> Matrix {
    vec![vec![1.0; steps]; n]
}

/// Replay one strategy over the stub and record its selections in order.
fn selections(strategy: Strategy, net: &Matrix, n: usize, steps: usize) -> Vec<usize> {
    let mut available: Vec<usize> = (0..n).collect();
    let mut picks = Vec::new();
    for step in 0..steps {
        let Some(b) = strategy.select(&available, net, step) else {
            break;
        };
        picks.push(b);
        available.retain(|&x| x != b);
    }
    picks
}

// =============================================================================
// Deterministic scenarios
// =============================================================================

#[test]
fn test_greedy_deterministic_scenario() {
    let picks = selections(Strategy::Greedy, &stub_net(), 3, 2);
    assert_eq!(picks, vec![0, 1]); // yields 5 then 4
}

#[test]
fn test_thrifty_deterministic_scenario() {
    let picks = selections(Strategy::Thrifty, &stub_net(), 3, 2);
    assert_eq!(picks, vec![2, 1]); // yields 1 then 4
}

#[test]
fn test_trial_totals_match_scenario() {
    let net = stub_net();
    let degradation = unit_degradation(3, 2);
    let outcomes = run_trial(
        &[Strategy::Greedy, Strategy::Thrifty],
        &net,
        &degradation,
        3,
        2,
    );

    assert!((outcomes[0].yield_sum - 9.0).abs() < 1e-12);
    assert!((outcomes[1].yield_sum - 5.0).abs() < 1e-12);
    assert_eq!(outcomes[0].loss_sum, 0.0);
    assert_eq!(outcomes[1].loss_sum, 0.0);
}

#[test]
fn test_tkg_rank_pick_then_greedy() {
    // k=2, switch_step=1, steps=2: step 0 takes the 2nd-smallest yield,
    // step 1 takes the maximum of what remains.
    let strategy = Strategy::RankedThenGreedy {
        switch_step: 1,
        k: 2,
    };
    let picks = selections(strategy, &stub_net(), 3, 2);
    assert_eq!(picks[0], 1); // ascending at step 0: b2 (1.0), b1 (2.0), b0 (5.0)
    assert_eq!(picks[1], 2); // remaining {0, 2}: 0.0 vs 3.0
}

#[test]
fn test_ctg_accepts_zero_yield() {
    // CTG has no zero-guard: batch 0's zero yield at step 1 is the minimum.
    let picks = selections(Strategy::CheapestToGo, &stub_net(), 3, 2);
    assert_eq!(picks, vec![2, 0]);
}

#[test]
fn test_hybrid_strategies_flip_at_switch_step() {
    let net = vec![
        vec![5.0, 5.0, 5.0],
        vec![3.0, 3.0, 3.0],
        vec![1.0, 1.0, 1.0],
    ];

    let picks = selections(
        Strategy::ThriftyThenGreedy { switch_step: 1 },
        &net,
        3,
        3,
    );
    assert_eq!(picks, vec![2, 0, 1]); // min first, then max

    let picks = selections(
        Strategy::GreedyThenThrifty { switch_step: 1 },
        &net,
        3,
        3,
    );
    assert_eq!(picks, vec![0, 2, 1]); // max first, then min
}

// =============================================================================
// Selection-set properties
// =============================================================================

#[test]
fn test_selections_are_distinct_and_cover_batches() {
    let net = vec![
        vec![2.0, 2.0, 2.0, 2.0],
        vec![2.0, 2.0, 2.0, 2.0],
        vec![2.0, 2.0, 2.0, 2.0],
        vec![2.0, 2.0, 2.0, 2.0],
    ];

    for strategy in Strategy::all(2, 2) {
        let mut picks = selections(strategy, &net, 4, 4);
        picks.sort_unstable();
        picks.dedup();
        assert_eq!(picks, vec![0, 1, 2, 3], "strategy {}", strategy.name());
    }
}

#[test]
fn test_early_termination_leaves_no_extra_picks() {
    // n=2, steps=5: exactly two picks, then the strategy stops quietly.
    let net = vec![vec![3.0; 5], vec![1.0; 5]];
    for strategy in Strategy::all(3, 1) {
        let picks = selections(strategy, &net, 2, 5);
        assert_eq!(picks.len(), 2, "strategy {}", strategy.name());
    }
}

#[test]
fn test_all_exhausted_batches_still_yield_a_pick() {
    // Every yield is zero: sentinels deprioritize but never exclude, so a
    // selection is still made each step.
    let net = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
    for strategy in Strategy::all(1, 1) {
        let picks = selections(strategy, &net, 2, 2);
        assert_eq!(picks.len(), 2, "strategy {}", strategy.name());
    }
}
