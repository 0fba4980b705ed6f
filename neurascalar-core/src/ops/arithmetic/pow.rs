use crate::autograd::BackwardOp;
use crate::error::NeuraScalarError;
use crate::scalar::Scalar;
use num_traits::ToPrimitive;
use std::fmt::Debug;

/// Raises `base` to a constant `exponent`.
///
/// The exponent is a plain number, not a node: the result has `base` as its
/// only child and no gradient flows to the exponent. Local derivative:
/// `exponent * base^(exponent - 1)`.
///
/// Any primitive numeric type is accepted.
///
/// # Errors
/// `InvalidExponent` if the exponent cannot be represented as an `f64`. This
/// is checked before any node is allocated. A NaN exponent is a number and
/// yields a NaN result.
pub fn pow_op<E>(base: &Scalar, exponent: E) -> Result<Scalar, NeuraScalarError>
where
    E: ToPrimitive + Debug,
{
    let exponent_f64 = exponent
        .to_f64()
        .ok_or_else(|| NeuraScalarError::InvalidExponent {
            exponent: format!("{:?}", exponent),
        })?;
    Ok(pow_scalar(base, exponent_f64))
}

/// Unchecked variant for exponents already converted to `f64`.
pub(crate) fn pow_scalar(base: &Scalar, exponent: f64) -> Scalar {
    Scalar::from_op(
        base.value().powf(exponent),
        BackwardOp::Pow { exponent },
        vec![base.clone()],
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
