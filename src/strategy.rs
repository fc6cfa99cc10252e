//! The batch-selection strategy table.
//!
//! Each strategy is a pure rule from (available batches, net-yield matrix,
//! current step) to one batch index. Hybrid strategies carry their switch
//! step (and rank, for T(k)G) as explicit variant data rather than captured
//! state, so every policy can be exercised in isolation.
//!
//! Tie-break rule: available sets are kept in ascending batch-index order and
//! all comparisons are strict, so the lowest batch index wins every tie.

use crate::generator::Matrix;

/// A named batch-selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Highest yield at the current step; exhausted batches keyed below zero
    Greedy,
    /// Lowest positive yield; exhausted batches keyed at infinity
    Thrifty,
    /// Thrifty before `switch_step`, Greedy from it onward
    ThriftyThenGreedy { switch_step: usize },
    /// Greedy before `switch_step`, Thrifty from it onward
    GreedyThenThrifty { switch_step: usize },
    /// Fixed-rank quantile pick before `switch_step`, raw maximum after
    RankedThenGreedy { switch_step: usize, k: usize },
    /// Always the raw minimum, with no zero-guard
    CheapestToGo,
}

impl Strategy {
    /// The full registry, in report order. Names are stable keys consumers
    /// index results by.
    pub fn all(switch_step: usize, k: usize) -> Vec<Strategy> {
        vec![
            Strategy::Greedy,
            Strategy::Thrifty,
            Strategy::ThriftyThenGreedy { switch_step },
            Strategy::GreedyThenThrifty { switch_step },
            Strategy::RankedThenGreedy { switch_step, k },
            Strategy::CheapestToGo,
        ]
    }

    /// Stable display/report name for this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Greedy => "Greedy",
            Strategy::Thrifty => "Thrifty",
            Strategy::ThriftyThenGreedy { .. } => "Thr/Grd",
            Strategy::GreedyThenThrifty { .. } => "Grd/Thr",
            Strategy::RankedThenGreedy { .. } => "T(k)G",
            Strategy::CheapestToGo => "CTG",
        }
    }

    /// Choose one batch from `available` given the net-yield matrix and the
    /// current step. Returns `None` only when `available` is empty.
    pub fn select(&self, available: &[usize], net: &Matrix, step: usize) -> Option<usize> {
        if available.is_empty() {
            return None;
        }
        let pick = match *self {
            Strategy::Greedy => greedy_pick(available, net, step),
            Strategy::Thrifty => thrifty_pick(available, net, step),
            Strategy::ThriftyThenGreedy { switch_step } => {
                if step < switch_step {
                    thrifty_pick(available, net, step)
                } else {
                    greedy_pick(available, net, step)
                }
            }
            Strategy::GreedyThenThrifty { switch_step } => {
                if step < switch_step {
                    greedy_pick(available, net, step)
                } else {
                    thrifty_pick(available, net, step)
                }
            }
            Strategy::RankedThenGreedy { switch_step, k } => {
                if step < switch_step {
                    ranked_pick(available, net, step, k)
                } else {
                    raw_max_pick(available, net, step)
                }
            }
            Strategy::CheapestToGo => raw_min_pick(available, net, step),
        };
        Some(pick)
    }
}

/// Maximum yield, with non-positive yields deprioritized via a -1 sentinel.
fn greedy_pick(available: &[usize], net: &Matrix, step: usize) -> usize {
    let key = |b: usize| {
        let s = net[b][step];
        if s > 0.0 {
            s
        } else {
            -1.0
        }
    };
    let mut best = available[0];
    for &b in &available[1..] {
        if key(b) > key(best) {
            best = b;
        }
    }
    best
}

/// Minimum positive yield, with non-positive yields deprioritized via an
/// infinity sentinel.
fn thrifty_pick(available: &[usize], net: &Matrix, step: usize) -> usize {
    let key = |b: usize| {
        let s = net[b][step];
        if s > 0.0 {
            s
        } else {
            f64::INFINITY
        }
    };
    let mut best = available[0];
    for &b in &available[1..] {
        if key(b) < key(best) {
            best = b;
        }
    }
    best
}

/// The batch ranked `min(k - 1, available - 1)` by ascending raw yield.
fn ranked_pick(available: &[usize], net: &Matrix, step: usize, k: usize) -> usize {
    let mut ranked: Vec<usize> = available.to_vec();
    // Stable sort keeps index order among equal yields.
    ranked.sort_by(|&a, &b| {
        net[a][step]
            .partial_cmp(&net[b][step])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let idx = (k.saturating_sub(1)).min(ranked.len() - 1);
    ranked[idx]
}

/// Maximum raw yield, no sentinel.
fn raw_max_pick(available: &[usize], net: &Matrix, step: usize) -> usize {
    let mut best = available[0];
    for &b in &available[1..] {
        if net[b][step] > net[best][step] {
            best = b;
        }
    }
    best
}

/// Minimum raw yield, no sentinel.
fn raw_min_pick(available: &[usize], net: &Matrix, step: usize) -> usize {
    let mut best = available[0];
    for &b in &available[1..] {
        if net[b][step] < net[best][step] {
            best = b;
        }
    }
    best
}
