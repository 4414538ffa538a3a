/// Lengths below this are treated as zero when a direction has to be derived.
pub const DIRECTION_EPSILON: f64 = 1e-12;

/// `acos` with its argument clamped to [-1, 1], so rounding drift on unit
/// vectors cannot produce NaN.
#[inline]
pub fn clamped_acos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

/// Returns `1 / x`, or `None` if the reciprocal would not be finite and positive.
#[inline]
pub fn positive_recip(x: f64) -> Option<f64> {
    let r = 1.0 / x;
    if r.is_finite() && r > 0.0 { Some(r) } else { None }
}

/// Combines two resistances in series: `1 / (1/a + 1/b)`.
/// Returns `None` when either input is not strictly positive.
#[inline]
pub fn series_combination(a: f64, b: f64) -> Option<f64> {
    let inv = positive_recip(a)? + positive_recip(b)?;
    positive_recip(inv)
}
