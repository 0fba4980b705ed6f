// src/scalar/debug.rs
use crate::scalar::Scalar;
use std::fmt;

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => write!(
                f,
                "Scalar(label={:?}, value={:.4}, grad={:.4}, op={}, children={})",
                guard.label,
                guard.value,
                guard.grad,
                guard.op,
                guard.children.len()
            ),
            Err(_) => write!(f, "Scalar(<mutably borrowed>)"),
        }
    }
}

/// `label | value: 2.0000 | grad: -3.0000`; unlabeled nodes show their
/// operator symbol instead of a label.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        let name = guard.label.as_deref().unwrap_or_else(|| guard.op.symbol());
        write!(
            f,
            "{} | value: {:.4} | grad: {:.4}",
            name, guard.value, guard.grad
        )
    }
}
