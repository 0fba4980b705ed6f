// src/scalar/mod.rs

use crate::autograd::BackwardOp;
use crate::scalar_data::ScalarData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod accessors;
mod autograd_methods;
pub mod create;
mod debug;
mod op_methods;
mod traits;

/// One node of the computation graph: an input, a constant, or the result of
/// an operator.
///
/// `Scalar` is a cheap handle around `Rc<RefCell<ScalarData>>`:
/// 1.  **Shared ownership:** cloning a `Scalar` never copies the node, so the
///     same node can be an operand of many parents (fan-out).
/// 2.  **Interior mutability:** the gradient accumulator (and, for leaves, the
///     value) can be updated through a shared handle.
///
/// The graph is single-threaded by construction (`Rc` is `!Send`).
#[derive(Clone)]
pub struct Scalar {
    pub(crate) data: Rc<RefCell<ScalarData>>,
}

impl Scalar {
    /// Wraps fully-built node storage into a handle.
    pub(crate) fn from_data(data: ScalarData) -> Self {
        Scalar {
            data: Rc::new(RefCell::new(data)),
        }
    }

    /// Allocates the node produced by an operator. Used by the `*_op`
    /// functions only; `children` must be the operand list.
    ///
    /// The node is labeled from its operands' labels when all of them have one.
    pub(crate) fn from_op(value: f64, op: BackwardOp, children: Vec<Scalar>) -> Self {
        let operand_labels: Vec<Option<String>> = children.iter().map(Scalar::label).collect();
        let mut data = ScalarData::from_op(value, op, children);
        data.label = op.compose_label(&operand_labels);
        Scalar::from_data(data)
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ScalarData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ScalarData> {
        self.data.borrow_mut()
    }
}
