// Inorganic impurity draw ranges (per batch, constant across steps)
pub const POTASSIUM_RANGE: (f64, f64) = (4.8, 7.05);
pub const SODIUM_RANGE: (f64, f64) = (0.21, 0.82);
pub const NITROGEN_RANGE: (f64, f64) = (1.58, 2.8);

// Impurity loss model
pub const IMPURITY_LOSS_FACTOR: f64 = 0.5; // half the summed contaminant scalars
pub const MAX_LOSS_FRACTION: f64 = 0.3; // loss capped at 30% of realized quality

// Ripening mode replaces every degradation factor with a draw from this interval
pub const RIPENING_RANGE: (f64, f64) = (0.85, 1.15);

// Purity index model
pub const INITIAL_PURITY_RANGE: (f64, f64) = (0.62, 0.64);
pub const PURITY_DECAY_BASE: f64 = 1.029;
pub const PURITY_DECAY_PER_STEP: f64 = 0.029;
