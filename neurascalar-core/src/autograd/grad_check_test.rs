use super::*;
use crate::autograd::BackwardOp;
use crate::nn::{Module, Neuron};

#[test]
fn test_check_grad_passes_for_composite_expression() -> Result<(), GradCheckError> {
    let func = |x: &[Scalar]| -> Result<Scalar, NeuraScalarError> {
        let a = &x[0];
        let b = &x[1];
        Ok((a * b + a.pow(2)?).tanh() / (b.exp() + 1.0))
    };
    check_grad(func, &[0.4, -1.1], DEFAULT_EPSILON, DEFAULT_TOLERANCE)
}

#[test]
fn test_check_grad_detects_wrong_backward_rule() {
    // Output tagged Exp while the forward computes 3x: backward yields
    // out.value = 3x instead of 3.
    let func = |x: &[Scalar]| -> Result<Scalar, NeuraScalarError> {
        Ok(Scalar::from_op(3.0 * x[0].value(), BackwardOp::Exp, vec![x[0].clone()]))
    };
    match check_grad(func, &[2.0], DEFAULT_EPSILON, DEFAULT_TOLERANCE) {
        Err(GradCheckError::GradientMismatch { input_index, analytical_grad, numerical_grad, .. }) => {
            assert_eq!(input_index, 0);
            assert!((analytical_grad - 6.0).abs() < 1e-9);
            assert!((numerical_grad - 3.0).abs() < 1e-4);
        }
        other => panic!("Expected GradientMismatch, got {:?}", other),
    }
}

#[test]
fn test_check_grad_forwards_errors() {
    let neuron = Neuron::from_parameters(&[1.0, 2.0], 0.0);
    let func = |x: &[Scalar]| -> Result<Scalar, NeuraScalarError> {
        Ok(neuron.forward(x)?.remove(0))
    };
    let result = check_grad(func, &[1.0], DEFAULT_EPSILON, DEFAULT_TOLERANCE);
    assert!(matches!(
        result,
        Err(GradCheckError::ForwardPassError(NeuraScalarError::DimensionMismatch {
            expected: 2,
            actual: 1
        }))
    ));
}

#[test]
fn test_check_grad_reports_non_finite_analytical_grad() {
    // d(1/x)/dx at 0 is -inf; the central difference stays finite.
    let func = |x: &[Scalar]| Ok(1.0 / &x[0]);
    let result = check_grad(func, &[0.0], DEFAULT_EPSILON, DEFAULT_TOLERANCE);
    assert!(matches!(
        result,
        Err(GradCheckError::AnalyticalGradNaNOrInfinite { input_index: 0, .. })
    ));
}

#[test]
fn test_check_grad_unused_input_has_zero_grad() -> Result<(), GradCheckError> {
    let func = |x: &[Scalar]| Ok(x[0].exp());
    check_grad(func, &[0.1, 5.0], DEFAULT_EPSILON, DEFAULT_TOLERANCE)
}
