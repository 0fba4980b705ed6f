use crate::error::NeuraScalarError;
use crate::scalar::Scalar;
use std::fmt::Debug;

/// The base trait for network components (neurons, layers, whole networks).
///
/// A module owns its parameter nodes, created once at construction. Every call
/// to `forward` builds fresh nodes on top of those parameters; the parameters
/// themselves are only changed by backward passes (their `grad`) and by an
/// external optimizer (their `value`, via `Scalar::set_value`).
pub trait Module: Debug {
    /// Evaluates the module on `inputs`, extending the computation graph.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs.len()` differs from the module's fan-in.
    fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, NeuraScalarError>;

    /// Same as `forward`, lifting each number to a constant leaf first.
    fn forward_values(&self, inputs: &[f64]) -> Result<Vec<Scalar>, NeuraScalarError> {
        let lifted: Vec<Scalar> = inputs.iter().map(|&x| Scalar::from(x)).collect();
        self.forward(&lifted)
    }

    /// All parameter nodes, in deterministic construction order.
    fn parameters(&self) -> Vec<Scalar>;

    /// Parameters paired with their labels. Unlabeled parameters are named
    /// `param{index}`.
    fn named_parameters(&self) -> Vec<(String, Scalar)> {
        self.parameters()
            .into_iter()
            .enumerate()
            .map(|(i, p)| (p.label().unwrap_or_else(|| format!("param{}", i)), p))
            .collect()
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to `0.0`.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }
}
