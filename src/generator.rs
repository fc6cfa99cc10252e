//! Synthetic data generation for one trial.
//!
//! Every trial gets freshly drawn sugar-content and degradation matrices,
//! optional per-batch impurity records, and a purity-index matrix. All draws
//! are independent per cell/record; no cross-cell correlation is modeled.

use crate::constants::{
    INITIAL_PURITY_RANGE, NITROGEN_RANGE, POTASSIUM_RANGE, PURITY_DECAY_BASE,
    PURITY_DECAY_PER_STEP, RIPENING_RANGE, SODIUM_RANGE,
};
use crate::error::SimError;
use rand::Rng;

/// An `n x steps` grid of per-batch, per-step values.
pub type Matrix = Vec<Vec<f64>>;

/// Inorganic contaminant scalars for one batch, constant across steps.
#[derive(Debug, Clone, Copy)]
pub struct ImpurityParams {
    pub potassium: f64,
    pub sodium: f64,
    pub nitrogen: f64,
}

impl ImpurityParams {
    /// Sum of the three contaminant scalars.
    pub fn total(&self) -> f64 {
        self.potassium + self.sodium + self.nitrogen
    }
}

/// Raw per-trial inputs before any loss modeling.
#[derive(Debug, Clone)]
pub struct BatchData {
    /// Intrinsic sugar content per batch per step
    pub quality: Matrix,
    /// Multiplicative degradation factor per batch per step
    pub degradation: Matrix,
    /// One record per batch when impurities are modeled, else empty
    pub impurities: Vec<ImpurityParams>,
}

/// Generate the per-trial matrices and impurity records.
///
/// Fails with [`SimError::InvalidRange`] before any sampling when either
/// range has a negative lower bound or non-increasing bounds. Under ripening
/// mode every degradation cell is overwritten with a draw from a fixed
/// interval, irrespective of `degradation_range`.
pub fn generate_batch_data(
    n: usize,
    steps: usize,
    quality_range: (f64, f64),
    degradation_range: (f64, f64),
    impurities: bool,
    ripening: bool,
    rng: &mut impl Rng,
) -> Result<BatchData, SimError> {
    check_range("quality", quality_range)?;
    check_range("degradation", degradation_range)?;

    let quality = uniform_matrix(n, steps, quality_range, rng);
    let mut degradation = uniform_matrix(n, steps, degradation_range, rng);

    let impurity_params = if impurities {
        (0..n)
            .map(|_| ImpurityParams {
                potassium: rng.gen_range(POTASSIUM_RANGE.0..POTASSIUM_RANGE.1),
                sodium: rng.gen_range(SODIUM_RANGE.0..SODIUM_RANGE.1),
                nitrogen: rng.gen_range(NITROGEN_RANGE.0..NITROGEN_RANGE.1),
            })
            .collect()
    } else {
        Vec::new()
    };

    if ripening {
        for row in &mut degradation {
            for cell in row.iter_mut() {
                *cell = rng.gen_range(RIPENING_RANGE.0..RIPENING_RANGE.1);
            }
        }
    }

    Ok(BatchData {
        quality,
        degradation,
        impurities: impurity_params,
    })
}

/// Draw the per-batch initial purity values and the declining purity matrix.
///
/// Column `j` scales the batch's initial purity by `1.029 - 0.029 * j`,
/// rounded to 4 decimals. Returns `(initial_purities, purity_matrix)`.
pub fn generate_purity(n: usize, steps: usize, rng: &mut impl Rng) -> (Vec<f64>, Matrix) {
    let initial: Vec<f64> = (0..n)
        .map(|_| rng.gen_range(INITIAL_PURITY_RANGE.0..INITIAL_PURITY_RANGE.1))
        .collect();

    let matrix = initial
        .iter()
        .map(|&i0| {
            (0..steps)
                .map(|j| round4(i0 * (PURITY_DECAY_BASE - j as f64 * PURITY_DECAY_PER_STEP)))
                .collect()
        })
        .collect();

    (initial, matrix)
}

fn check_range(what: &'static str, (lo, hi): (f64, f64)) -> Result<(), SimError> {
    if lo < 0.0 || hi <= lo {
        return Err(SimError::InvalidRange { what, lo, hi });
    }
    Ok(())
}

fn uniform_matrix(n: usize, steps: usize, (lo, hi): (f64, f64), rng: &mut impl Rng) -> Matrix {
    (0..n)
        .map(|_| (0..steps).map(|_| rng.gen_range(lo..hi)).collect())
        .collect()
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
