use crate::scalar::Scalar;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Draws one value from `Uniform[-1, 1]` (both ends inclusive).
pub fn uniform_value<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    Uniform::new_inclusive(-1.0, 1.0).sample(rng)
}

/// Creates a labeled parameter leaf initialized from `Uniform[-1, 1]`.
///
/// The randomness source is supplied by the caller so that construction is
/// reproducible under a seeded generator.
pub fn uniform_parameter<R: Rng + ?Sized>(rng: &mut R, label: impl Into<String>) -> Scalar {
    Scalar::new(uniform_value(rng)).with_label(label)
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
