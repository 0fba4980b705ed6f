use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

/// `a + b`. Local derivatives: 1 for both operands.
pub fn add_op(a: &Scalar, b: &Scalar) -> Scalar {
    Scalar::from_op(a.value() + b.value(), BackwardOp::Add, vec![a.clone(), b.clone()])
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
