use crate::error::NeuraScalarError;
use crate::nn::init::uniform_parameter;
use crate::nn::module::Module;
use crate::scalar::Scalar;
use rand::Rng;

/// A single tanh unit: `tanh(Σ w_i * x_i + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Scalar>,
    bias: Scalar,
}

impl Neuron {
    /// Creates a neuron with `n_in` weights and a bias, all drawn
    /// independently from `Uniform[-1, 1]` (weights first, then bias).
    pub fn new<R: Rng + ?Sized>(n_in: usize, rng: &mut R) -> Self {
        Neuron::named(n_in, "neuron", rng)
    }

    /// Like [`Neuron::new`], labeling parameters `{name}.w{i}` and `{name}.b`.
    pub fn named<R: Rng + ?Sized>(n_in: usize, name: &str, rng: &mut R) -> Self {
        let weights = (0..n_in)
            .map(|i| uniform_parameter(rng, format!("{}.w{}", name, i)))
            .collect();
        let bias = uniform_parameter(rng, format!("{}.b", name));
        Neuron { weights, bias }
    }

    /// Creates a neuron with explicit parameter values.
    pub fn from_parameters(weights: &[f64], bias: f64) -> Self {
        let weights = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Scalar::new(w).with_label(format!("neuron.w{}", i)))
            .collect();
        Neuron {
            weights,
            bias: Scalar::new(bias).with_label("neuron.b"),
        }
    }

    pub fn n_in(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Scalar] {
        &self.weights
    }

    pub fn bias(&self) -> &Scalar {
        &self.bias
    }

    /// Evaluates the neuron, returning its single output node.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs.len() != self.n_in()`.
    pub fn activate(&self, inputs: &[Scalar]) -> Result<Scalar, NeuraScalarError> {
        if inputs.len() != self.weights.len() {
            return Err(NeuraScalarError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let weighted_sum: Scalar = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(w, x)| w * x)
            .sum();
        Ok((weighted_sum + &self.bias).tanh())
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, NeuraScalarError> {
        Ok(vec![self.activate(inputs)?])
    }

    /// Weights in order, then the bias.
    fn parameters(&self) -> Vec<Scalar> {
        self.weights
            .iter()
            .chain(std::iter::once(&self.bias))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
