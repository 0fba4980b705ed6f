use crate::ops::arithmetic::mul::mul_op;
use crate::scalar::Scalar;

/// `-a`, built as `a * -1.0` so it needs no dedicated backward rule.
pub fn neg_op(a: &Scalar) -> Scalar {
    let out = mul_op(a, &Scalar::from(-1.0));
    if let Some(label) = a.label() {
        out.set_label(format!("-{}", label));
    }
    out
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
