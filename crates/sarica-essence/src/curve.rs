use sarica_core::constants::{CURVE_BASE, CURVE_EXPONENT, CURVE_SCALE};

/// Experience needed to advance from `level` to `level + 1`.
///
/// ```text
/// exp_to_next(level) = floor((10 * (level + 1)) ^ 1.5 * 3)
/// ```
///
/// Strictly increasing in `level`.
pub fn exp_to_next(level: u32) -> i64 {
    let base = CURVE_BASE * (f64::from(level) + 1.0);
    (base.powf(CURVE_EXPONENT) * CURVE_SCALE).floor() as i64
}

/// Total experience spent to reach `level` from level 0.
pub fn cumulative_exp(level: u32) -> i64 {
    (0..level).map(exp_to_next).sum()
}
