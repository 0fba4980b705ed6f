use crate::ops::arithmetic::{add::add_op, neg::neg_op};
use crate::scalar::Scalar;

/// `a - b`, built as `a + (-b)`.
pub fn sub_op(a: &Scalar, b: &Scalar) -> Scalar {
    let out = add_op(a, &neg_op(b));
    if let (Some(la), Some(lb)) = (a.label(), b.label()) {
        out.set_label(format!("({} - {})", la, lb));
    }
    out
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
