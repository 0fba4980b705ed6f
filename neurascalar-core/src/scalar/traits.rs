// src/scalar/traits.rs
//! Operator overloads. Every impl delegates to the matching `*_op` function;
//! `f64` operands are lifted to constant leaves with `Scalar::from`.

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::scalar::Scalar;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(&self, &rhs)
            }
        }

        impl<'b> $trait<&'b Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &'b Scalar) -> Scalar {
                $op_fn(&self, rhs)
            }
        }

        impl<'a> $trait<Scalar> for &'a Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(self, &rhs)
            }
        }

        impl<'a, 'b> $trait<&'b Scalar> for &'a Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &'b Scalar) -> Scalar {
                $op_fn(self, rhs)
            }
        }

        impl $trait<f64> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op_fn(&self, &Scalar::from(rhs))
            }
        }

        impl<'a> $trait<f64> for &'a Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op_fn(self, &Scalar::from(rhs))
            }
        }

        impl $trait<Scalar> for f64 {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(&Scalar::from(self), &rhs)
            }
        }

        impl<'b> $trait<&'b Scalar> for f64 {
            type Output = Scalar;
            fn $method(self, rhs: &'b Scalar) -> Scalar {
                $op_fn(&Scalar::from(self), rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        neg_op(&self)
    }
}

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        neg_op(self)
    }
}

/// Left fold with `add_op`. An empty sum is a constant `0.0` leaf.
impl Sum<Scalar> for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(mut iter: I) -> Scalar {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, x| add_op(&acc, &x)),
            None => Scalar::from(0.0),
        }
    }
}

impl<'a> Sum<&'a Scalar> for Scalar {
    fn sum<I: Iterator<Item = &'a Scalar>>(iter: I) -> Scalar {
        iter.cloned().sum()
    }
}
