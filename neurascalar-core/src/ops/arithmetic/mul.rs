use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

/// `a * b`. Local derivatives: `b.value` w.r.t. `a`, `a.value` w.r.t. `b`.
pub fn mul_op(a: &Scalar, b: &Scalar) -> Scalar {
    Scalar::from_op(a.value() * b.value(), BackwardOp::Mul, vec![a.clone(), b.clone()])
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
