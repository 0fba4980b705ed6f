// src/scalar/accessors.rs
use crate::autograd::{BackwardOp, NodeId};
use crate::error::NeuraScalarError;
use crate::scalar::Scalar;
use std::rc::Rc;

impl Scalar {
    /// Forward value.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Accumulated gradient of the last backward pass that reached this node.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Operator that produced this node (`BackwardOp::Leaf` for inputs).
    pub fn op(&self) -> BackwardOp {
        self.read_data().op
    }

    /// Operands of this node, in operand order. Cheap handle clones.
    pub fn children(&self) -> Vec<Scalar> {
        self.read_data().children.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Identity of the underlying node, shared by every clone of this handle.
    pub fn id(&self) -> NodeId {
        NodeId(Rc::as_ptr(&self.data) as *const () as usize)
    }

    /// Returns `true` if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Scalar) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    /// Overwrites the value of a leaf node.
    ///
    /// This is the hook an external optimizer uses to update parameters
    /// between backward passes. Nodes produced by operators keep the value
    /// computed at construction.
    ///
    /// # Errors
    /// `InplaceModificationError` if this node has children.
    pub fn set_value(&self, value: f64) -> Result<(), NeuraScalarError> {
        let mut guard = self.write_data();
        if !guard.is_leaf() {
            return Err(NeuraScalarError::InplaceModificationError {
                operation: "set_value".to_string(),
                reason: format!(
                    "cannot overwrite the value of a non-leaf '{}' node",
                    guard.op
                ),
            });
        }
        guard.value = value;
        Ok(())
    }
}
