// src/nn/mod.rs
// Neural network building blocks composed from scalar operators.

pub mod init;
pub mod layers;
pub mod module;

pub use layers::{Layer, Neuron};
pub use module::Module;
