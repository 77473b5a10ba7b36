//! Monetary rounding at configuration-declared precision
//!
//! Half-up rounding is applied independently to every breakdown line item,
//! and once to the total computed from full-precision intermediates. The two
//! roundings can disagree by at most one unit in the last place; that is an
//! accepted property of the breakdown, not a defect to compensate for.

/// Round `amount` half-up at `decimal_places` digits.
///
/// All engine amounts are non-negative, for which IEEE round-half-away-from-
/// zero coincides with half-up.
pub fn round_half_up(amount: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    (amount * factor).round() / factor
}
