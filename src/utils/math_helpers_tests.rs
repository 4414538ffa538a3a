use crate::assert_float_eq;
use crate::utils::{clamped_acos, positive_recip, series_combination};
use std::f64::consts::PI;

#[test]
fn test_clamped_acos_in_range() {
    assert_float_eq(clamped_acos(0.0), PI / 2.0, 1e-12, None);
    assert_float_eq(clamped_acos(-1.0), PI, 1e-12, None);
}

#[test]
fn test_clamped_acos_drift() {
    // Slightly outside of [-1, 1] must still produce a number
    assert_float_eq(clamped_acos(1.0 + 1e-9), 0.0, 1e-12, None);
    assert_float_eq(clamped_acos(-1.0 - 1e-9), PI, 1e-12, None);
}

#[test]
fn test_positive_recip() {
    assert_eq!(positive_recip(4.0), Some(0.25));
    assert_eq!(positive_recip(0.0), None);
    assert_eq!(positive_recip(-2.0), None);
    assert_eq!(positive_recip(f64::NAN), None);
}

#[test]
fn test_series_combination() {
    // Two equal resistances in series halve
    assert_float_eq(series_combination(2.0, 2.0).unwrap(), 1.0, 1e-12, None);
    assert_float_eq(series_combination(1.0, 3.0).unwrap(), 0.75, 1e-12, None);
    assert!(series_combination(0.0, 1.0).is_none());
}
