// src/scalar/op_methods.rs
use crate::error::NeuraScalarError;
use crate::ops::activation::tanh_op;
use crate::ops::arithmetic::pow_op;
use crate::ops::math_elem::exp_op;
use crate::scalar::Scalar;
use num_traits::ToPrimitive;
use std::fmt::Debug;

impl Scalar {
    /// `self ^ exponent`. See [`pow_op`].
    pub fn pow<E>(&self, exponent: E) -> Result<Scalar, NeuraScalarError>
    where
        E: ToPrimitive + Debug,
    {
        pow_op(self, exponent)
    }

    pub fn exp(&self) -> Scalar {
        exp_op(self)
    }

    pub fn tanh(&self) -> Scalar {
        tanh_op(self)
    }
}
