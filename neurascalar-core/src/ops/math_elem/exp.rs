use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

/// `e^a`. The local derivative is the output value itself.
pub fn exp_op(a: &Scalar) -> Scalar {
    Scalar::from_op(a.value().exp(), BackwardOp::Exp, vec![a.clone()])
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
