//! Reverse-mode differentiation: operator tags, graph traversal and
//! numerical gradient checking.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::{topological_sort, trace, NodeId};
