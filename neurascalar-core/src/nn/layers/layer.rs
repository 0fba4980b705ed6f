use crate::error::NeuraScalarError;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::scalar::Scalar;
use log::debug;
use rand::Rng;

/// `n_out` independent neurons applied to the same input vector.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_in: usize,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(n_in: usize, n_out: usize, rng: &mut R) -> Self {
        Layer::named(n_in, n_out, "layer", rng)
    }

    /// Neuron `j` gets parameter labels prefixed with `{name}.neuron{j}`.
    pub fn named<R: Rng + ?Sized>(n_in: usize, n_out: usize, name: &str, rng: &mut R) -> Self {
        let neurons = (0..n_out)
            .map(|j| Neuron::named(n_in, &format!("{}.neuron{}", name, j), rng))
            .collect();
        debug!("Layer '{}' created: {} -> {}", name, n_in, n_out);
        Layer { neurons, n_in }
    }

    pub fn n_in(&self) -> usize {
        self.n_in
    }

    pub fn n_out(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    /// One output per neuron, in construction order.
    fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, NeuraScalarError> {
        if inputs.len() != self.n_in {
            return Err(NeuraScalarError::DimensionMismatch {
                expected: self.n_in,
                actual: inputs.len(),
            });
        }
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<Scalar> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
