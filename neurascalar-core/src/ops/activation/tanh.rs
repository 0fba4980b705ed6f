use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

/// Hyperbolic tangent, `(e^{2a} - 1) / (e^{2a} + 1)`.
///
/// Evaluated with `f64::tanh`, which saturates to `±1` instead of producing
/// `inf / inf` for large `|a|`. Local derivative: `1 - out^2`.
pub fn tanh_op(a: &Scalar) -> Scalar {
    Scalar::from_op(a.value().tanh(), BackwardOp::Tanh, vec![a.clone()])
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
