// src/scalar/create.rs
use crate::scalar::Scalar;
use crate::scalar_data::ScalarData;

impl Scalar {
    /// Creates a new leaf node (input or constant) holding `value`.
    pub fn new(value: f64) -> Self {
        Scalar::from_data(ScalarData::leaf(value))
    }

    /// Sets the display label and returns the same node.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }
}

/// Lifts a plain number into a constant leaf node.
impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::new(value)
    }
}
