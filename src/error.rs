//! Error types for experiment configuration and data generation.

use thiserror::Error;

/// Errors raised before any simulation work happens.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    /// A sampling range with a negative lower bound or non-increasing bounds.
    #[error("invalid {what} range ({lo}, {hi}): lower bound must be >= 0 and upper bound > lower bound")]
    InvalidRange { what: &'static str, lo: f64, hi: f64 },

    /// A structurally invalid experiment parameter (zero counts, out-of-range
    /// switch step or rank).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
