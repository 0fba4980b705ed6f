use super::*;
use crate::autograd::grad_check::{check_grad, DEFAULT_EPSILON, DEFAULT_TOLERANCE};
use crate::autograd::grad_check::GradCheckError;
use approx::assert_relative_eq;

#[test]
fn test_add_forward() {
    let a = Scalar::new(1.0);
    let b = Scalar::new(2.0);
    let c = add_op(&a, &b);
    assert_relative_eq!(c.value(), 3.0);
    assert_eq!(c.op(), BackwardOp::Add);
}

#[test]
fn test_add_children_are_operands_in_order() {
    let a = Scalar::new(1.0);
    let b = Scalar::new(2.0);
    let c = add_op(&a, &b);
    let children = c.children();
    assert_eq!(children.len(), 2);
    assert!(children[0].ptr_eq(&a));
    assert!(children[1].ptr_eq(&b));
}

#[test]
fn test_add_does_not_mutate_operands() {
    let a = Scalar::new(1.0);
    let b = Scalar::new(2.0);
    let _ = add_op(&a, &b);
    assert_relative_eq!(a.value(), 1.0);
    assert_relative_eq!(b.value(), 2.0);
    assert_eq!(a.grad(), 0.0);
    assert!(a.is_leaf());
}

#[test]
fn test_add_backward() {
    let a = Scalar::new(1.5);
    let b = Scalar::new(-4.0);
    let c = add_op(&a, &b);
    c.backward();
    assert_relative_eq!(a.grad(), 1.0);
    assert_relative_eq!(b.grad(), 1.0);
}

#[test]
fn test_add_same_operand_twice() {
    let a = Scalar::new(3.0);
    let c = add_op(&a, &a);
    assert_relative_eq!(c.value(), 6.0);
    c.backward();
    assert_relative_eq!(a.grad(), 2.0);
}

#[test]
fn test_add_grad_check() -> Result<(), GradCheckError> {
    let func = |inputs: &[Scalar]| Ok(add_op(&inputs[0], &inputs[1]));
    check_grad(func, &[0.3, -1.7], DEFAULT_EPSILON, DEFAULT_TOLERANCE)
}
