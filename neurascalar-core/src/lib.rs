//! # NeuraScalar core
//!
//! A reverse-mode automatic differentiation engine over `f64` scalars, and a
//! small tanh multi-layer perceptron built from it.
//!
//! - [`Scalar`]: a node of the expression DAG (value, gradient, operator tag,
//!   children). Cheap to clone; clones share the node.
//! - [`ops`]: the operators that extend the graph (`add_op`, `mul_op`, ...),
//!   also reachable through `std::ops` overloads.
//! - [`Scalar::backward`]: topological sort + reverse replay of the chain rule.
//! - [`nn`] / [`model`]: `Neuron`, `Layer` and `Mlp`, which own their
//!   parameter nodes and expose them to an external optimizer.
//!
//! ```
//! use neurascalar_core::Scalar;
//!
//! let a = Scalar::new(2.0);
//! let b = Scalar::new(-3.0);
//! let c = Scalar::new(10.0);
//! let d = &a * &b + &c;
//! d.backward();
//! assert_eq!(d.value(), 4.0);
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! assert_eq!(c.grad(), 1.0);
//! ```

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod scalar;
mod scalar_data;
pub mod utils;

pub use autograd::BackwardOp;
pub use error::NeuraScalarError;
pub use model::Mlp;
pub use nn::{Layer, Module, Neuron};
pub use scalar::Scalar;
