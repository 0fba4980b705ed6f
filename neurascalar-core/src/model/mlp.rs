use crate::error::NeuraScalarError;
use crate::nn::layers::Layer;
use crate::nn::module::Module;
use crate::scalar::Scalar;
use log::debug;
use rand::Rng;

/// Multi-layer perceptron: an ordered sequence of tanh [`Layer`]s where
/// layer `i`'s output width is layer `i + 1`'s input width.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
    n_in: usize,
}

impl Mlp {
    /// Builds a network taking `n_in` inputs, with one layer per entry of
    /// `layer_sizes` (the last entry is the output width).
    ///
    /// Parameters are drawn from `rng` layer by layer, neuron by neuron.
    /// With an empty `layer_sizes` the network is the identity.
    pub fn new<R: Rng + ?Sized>(n_in: usize, layer_sizes: &[usize], rng: &mut R) -> Self {
        let sizes: Vec<usize> = std::iter::once(n_in)
            .chain(layer_sizes.iter().copied())
            .collect();
        let layers: Vec<Layer> = sizes
            .windows(2)
            .enumerate()
            .map(|(i, w)| Layer::named(w[0], w[1], &format!("layer{}", i), rng))
            .collect();

        let mlp = Mlp { layers, n_in };
        debug!(
            "Mlp created: sizes {:?}, {} parameters",
            sizes,
            mlp.num_parameters()
        );
        mlp
    }

    pub fn n_in(&self) -> usize {
        self.n_in
    }

    /// Width of the final layer (`n_in` when there are no layers).
    pub fn n_out(&self) -> usize {
        self.layers.last().map_or(self.n_in, Layer::n_out)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    /// Threads `inputs` through every layer in order.
    fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, NeuraScalarError> {
        if inputs.len() != self.n_in {
            return Err(NeuraScalarError::DimensionMismatch {
                expected: self.n_in,
                actual: inputs.len(),
            });
        }
        let mut output = inputs.to_vec();
        for layer in &self.layers {
            output = layer.forward(&output)?;
        }
        Ok(output)
    }

    /// Every weight and bias, layer by layer, neuron by neuron.
    fn parameters(&self) -> Vec<Scalar> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
