use crate::ops::arithmetic::{mul_op, pow_scalar};
use crate::scalar::Scalar;

/// `a / b`, built as `a * b^-1`.
///
/// Not guarded against `b.value == 0.0`: the forward value becomes infinite
/// (or NaN for `0 / 0`) and so does the gradient flowing into `b`.
pub fn div_op(a: &Scalar, b: &Scalar) -> Scalar {
    let out = mul_op(a, &pow_scalar(b, -1.0));
    if let (Some(la), Some(lb)) = (a.label(), b.label()) {
        out.set_label(format!("({} / {})", la, lb));
    }
    out
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
