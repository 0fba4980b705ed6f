//! # Graph-building operators (`ops`)
//!
//! Every operator allocates exactly one new [`Scalar`](crate::Scalar) whose
//! children are its operands and whose [`BackwardOp`](crate::autograd::BackwardOp)
//! tag tells the backward pass how to differentiate it. Operands are never
//! mutated.
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: exp.
//! - [`activation`]: tanh.
//!
//! The same operators are reachable through `std::ops` overloads and methods
//! on `Scalar`.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

pub use activation::tanh_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::exp_op;
