// src/scalar_data.rs
use crate::autograd::BackwardOp;
use crate::scalar::Scalar;

/// Internal storage for one node of the computation graph.
///
/// Wrapped in `Rc<RefCell<ScalarData>>` by [`Scalar`] so that a node can be
/// shared by several parents (fan-out) while its `grad` stays mutable.
pub(crate) struct ScalarData {
    /// Forward value. Only leaves may have it changed after construction.
    pub(crate) value: f64,
    /// d(output)/d(this node), accumulated during a backward pass.
    pub(crate) grad: f64,
    /// Operands that produced this node, in operand order. Empty for leaves.
    pub(crate) children: Vec<Scalar>,
    /// How to distribute `grad` onto `children`.
    pub(crate) op: BackwardOp,
    /// Optional display name.
    pub(crate) label: Option<String>,
}

impl ScalarData {
    pub(crate) fn leaf(value: f64) -> Self {
        ScalarData {
            value,
            grad: 0.0,
            children: Vec::new(),
            op: BackwardOp::Leaf,
            label: None,
        }
    }

    pub(crate) fn from_op(value: f64, op: BackwardOp, children: Vec<Scalar>) -> Self {
        debug_assert_eq!(op.arity(), children.len());
        ScalarData {
            value,
            grad: 0.0,
            children,
            op,
            label: None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// Children are released iteratively; the default recursive drop overflows the
// stack on long chains.
impl Drop for ScalarData {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let Ok(cell) = std::rc::Rc::try_unwrap(child.data) {
                let mut data = cell.into_inner();
                pending.append(&mut data.children);
            }
        }
    }
}
