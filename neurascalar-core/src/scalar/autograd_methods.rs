// src/scalar/autograd_methods.rs
use crate::autograd::graph::topological_sort;
use crate::scalar::Scalar;
use log::{debug, trace, warn};

impl Scalar {
    /// Performs the backward pass starting from this node.
    ///
    /// After the call, every node reachable from `self` holds
    /// d(self)/d(node) in its `grad`:
    /// 1. Topologically sort the reachable nodes (children before parents).
    /// 2. Reset their gradients to `0.0`, so the same graph can be
    ///    differentiated again with identical results.
    /// 3. Seed `self.grad = 1.0`.
    /// 4. Walk the order in reverse and propagate each node exactly once.
    ///
    /// Gradients of nodes that are *not* reachable from `self` (e.g. unused
    /// network parameters) are left untouched.
    ///
    /// Division by a zero-valued node is not guarded: the result is an
    /// infinite or NaN gradient, not an error.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        debug!("backward: {} nodes in topological order", sorted_nodes.len());

        for node in &sorted_nodes {
            node.write_data().grad = 0.0;
        }

        let output_value = self.value();
        if !output_value.is_finite() {
            warn!(
                "backward: output value {} is not finite, gradients will be degenerate",
                output_value
            );
        }
        self.write_data().grad = 1.0;

        for node in sorted_nodes.iter().rev() {
            trace!("backward: propagating through {:?} ({})", node.id(), node.op());
            node.propagate();
        }
    }

    /// Resets this node's gradient to `0.0`.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Adds `delta` to the gradient accumulator.
    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Distributes this node's (final) gradient onto its children:
    /// `child.grad += self.grad * d(self)/d(child)`.
    pub(crate) fn propagate(&self) {
        let (grad, output, op, children) = {
            let guard = self.read_data();
            (guard.grad, guard.value, guard.op, guard.children.clone())
        };
        if children.is_empty() {
            return;
        }

        let mut inputs = [0.0; 2];
        for (slot, child) in inputs.iter_mut().zip(&children) {
            *slot = child.value();
        }
        let local_grads = op.local_grads(output, &inputs[..children.len().min(2)]);
        for (child, local_grad) in children.iter().zip(local_grads) {
            child.accumulate_grad(grad * local_grad);
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
