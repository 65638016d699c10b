//! Unit tests for the coordinate module

mod transform_tests;

/// Assert two floats agree within `tolerance`
pub(super) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {} within {} of {}",
        actual, tolerance, expected
    );
}
