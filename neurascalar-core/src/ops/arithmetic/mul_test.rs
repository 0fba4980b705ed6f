use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError, DEFAULT_EPSILON, DEFAULT_TOLERANCE};
use approx::assert_relative_eq;

#[test]
fn test_mul_forward() {
    let a = Scalar::new(33.0);
    let b = Scalar::new(3.0);
    let c = mul_op(&a, &b);
    assert_relative_eq!(c.value(), 99.0);
    assert_eq!(c.op(), BackwardOp::Mul);
    assert_eq!(c.children().len(), 2);
}

#[test]
fn test_mul_backward() {
    let a = Scalar::new(2.0);
    let b = Scalar::new(-3.0);
    let c = mul_op(&a, &b);
    c.backward();
    assert_relative_eq!(a.grad(), -3.0);
    assert_relative_eq!(b.grad(), 2.0);
    assert_relative_eq!(c.grad(), 1.0);
}

#[test]
fn test_mul_square_accumulates_both_paths() {
    let a = Scalar::new(3.0);
    let sq = mul_op(&a, &a);
    sq.backward();
    // d(a*a)/da = 2a
    assert_relative_eq!(a.grad(), 6.0);
}

#[test]
fn test_mul_by_lifted_constant() {
    let a = Scalar::new(4.0);
    let c = &a * 2.5;
    assert_relative_eq!(c.value(), 10.0);
    let children = c.children();
    assert!(children[1].is_leaf());
    assert_relative_eq!(children[1].value(), 2.5);
    c.backward();
    assert_relative_eq!(a.grad(), 2.5);
}

#[test]
fn test_mul_grad_check() -> Result<(), GradCheckError> {
    let func = |inputs: &[Scalar]| Ok(mul_op(&inputs[0], &inputs[1]));
    check_grad(func, &[1.3, -0.7], DEFAULT_EPSILON, DEFAULT_TOLERANCE)
}
