use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError, DEFAULT_EPSILON, DEFAULT_TOLERANCE};
use approx::assert_relative_eq;

#[test]
fn test_tanh_matches_exponential_formula() {
    for x in [-2.0_f64, -0.5, 0.0, 0.3, 1.7] {
        let e2x = (2.0 * x).exp();
        let expected = (e2x - 1.0) / (e2x + 1.0);
        assert_relative_eq!(tanh_op(&Scalar::new(x)).value(), expected, epsilon = 1e-12);
    }
}

#[test]
fn test_tanh_saturates() {
    assert_relative_eq!(tanh_op(&Scalar::new(500.0)).value(), 1.0);
    assert_relative_eq!(tanh_op(&Scalar::new(-500.0)).value(), -1.0);
}

#[test]
fn test_tanh_backward() {
    let a = Scalar::new(0.8814);
    let out = a.tanh();
    out.backward();
    let t = out.value();
    assert_relative_eq!(a.grad(), 1.0 - t * t);
}

#[test]
fn test_tanh_grad_check() -> Result<(), GradCheckError> {
    let func = |inputs: &[Scalar]| Ok(tanh_op(&inputs[0]));
    check_grad(func, &[-0.6], DEFAULT_EPSILON, DEFAULT_TOLERANCE)
}
