use crate::scalar::Scalar;

/// Checks that a node's forward value is within `tolerance` of `expected`.
/// Panics with the node's debug representation otherwise.
pub fn check_scalar_near(actual: &Scalar, expected: f64, tolerance: f64) {
    let diff = (actual.value() - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Checks that a node's accumulated gradient is within `tolerance` of `expected`.
pub fn check_grad_near(actual: &Scalar, expected: f64, tolerance: f64) {
    let diff = (actual.grad() - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Gradient mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}
