use crate::error::NeuraScalarError;
use crate::scalar::Scalar;
use approx::relative_eq;
use thiserror::Error;

/// Default finite-difference step.
pub const DEFAULT_EPSILON: f64 = 1e-6;
/// Default absolute/relative tolerance between analytical and numerical gradients.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(#[from] NeuraScalarError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds a graph from one leaf per entry of `inputs` and returns its
/// output node. The graph is differentiated once with `backward`, then for
/// every input `i` the numerical estimate
/// `(f(x + eps e_i) - f(x - eps e_i)) / (2 eps)` is computed from fresh leaves
/// and compared with `leaf_i.grad`.
///
/// The two gradients match if they are within `tolerance` either absolutely
/// or relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Scalar]) -> Result<Scalar, NeuraScalarError>,
{
    let leaves: Vec<Scalar> = inputs.iter().map(|&x| Scalar::from(x)).collect();
    let output = func(&leaves)?;
    output.backward();

    for (i, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();

        let loss_plus = evaluate_perturbed(&func, inputs, i, epsilon)?;
        let loss_minus = evaluate_perturbed(&func, inputs, i, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

/// Forward value of `func` with input `index` shifted by `delta`.
fn evaluate_perturbed<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Scalar]) -> Result<Scalar, NeuraScalarError>,
{
    let leaves: Vec<Scalar> = inputs
        .iter()
        .enumerate()
        .map(|(j, &x)| Scalar::from(if j == index { x + delta } else { x }))
        .collect();
    Ok(func(&leaves)?.value())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
