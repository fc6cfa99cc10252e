//! Loss and yield calculation.
//!
//! Derives the realized-quality matrix C, the impurity-loss matrix L, and the
//! net-yield matrix S from one trial's raw data. Deterministic given its
//! inputs; all randomness lives in the generator.
//!
//! Note: L is the impurity-capped *matrix* loss. The per-step scoring loss
//! used to rank strategies is a separate quantity computed in the trial
//! runner from the net yield and the raw degradation factor. The two are not
//! interchangeable.

use crate::constants::{IMPURITY_LOSS_FACTOR, MAX_LOSS_FRACTION};
use crate::generator::{BatchData, Matrix};

/// The derived matrices for one trial.
#[derive(Debug, Clone)]
pub struct YieldMatrices {
    /// C: sugar content after degradation (quality x degradation)
    pub realized: Matrix,
    /// L: impurity-driven loss, capped per cell
    pub loss: Matrix,
    /// S: max(0, C - L), what strategies select on
    pub net: Matrix,
}

/// Compute C, L and S cell by cell.
///
/// Per-batch loss potential is half the sum of the batch's contaminant
/// scalars, applied identically to every step, capped at 30% of the cell's
/// realized quality and never allowed to exceed it.
pub fn compute_yields(data: &BatchData) -> YieldMatrices {
    let n = data.quality.len();
    let steps = data.quality.first().map_or(0, Vec::len);

    let mut realized = vec![vec![0.0; steps]; n];
    let mut loss = vec![vec![0.0; steps]; n];
    let mut net = vec![vec![0.0; steps]; n];

    for i in 0..n {
        let potential_loss = data
            .impurities
            .get(i)
            .map(|p| IMPURITY_LOSS_FACTOR * p.total());

        for j in 0..steps {
            let c = data.quality[i][j] * data.degradation[i][j];

            let mut l = match potential_loss {
                Some(p) => p.min(MAX_LOSS_FRACTION * c),
                None => 0.0,
            };
            l = l.min(c);

            realized[i][j] = c;
            loss[i][j] = l;
            net[i][j] = (c - l).max(0.0);
        }
    }

    YieldMatrices {
        realized,
        loss,
        net,
    }
}
