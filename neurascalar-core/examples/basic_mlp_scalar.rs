//! # Training a small MLP with scalar autodiff
//!
//! Fits a 3 -> [4, 4] -> 1 tanh network to four labelled points.
//!
//! ## Demonstrated
//! 1.  Building an `Mlp` from a seeded random generator.
//! 2.  Building a squared-error loss with operator overloads and `Sum`.
//! 3.  `backward` on the loss to fill every parameter's `grad`.
//! 4.  A hand-written gradient-descent step through `Scalar::set_value`.
//! 5.  Inspecting parameters with `named_parameters`.
//!
//! ## Running
//! `cargo run --example basic_mlp_scalar`

use neurascalar_core::{Mlp, Module, NeuraScalarError, Scalar};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), NeuraScalarError> {
    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(3, &[4, 4, 1], &mut rng);
    println!("Mlp created with {} parameters", mlp.num_parameters());

    let learning_rate = 0.05;
    let num_epochs = 50;
    for epoch in 0..num_epochs {
        let mut preds = Vec::with_capacity(xs.len());
        for x in &xs {
            preds.push(mlp.forward_values(x)?.remove(0));
        }
        let loss: Scalar = preds
            .iter()
            .zip(ys.iter())
            .map(|(pred, &y)| (pred - y).pow(2))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .sum();

        mlp.zero_grad();
        loss.backward();

        for p in mlp.parameters() {
            p.set_value(p.value() - learning_rate * p.grad())?;
        }

        if epoch % 10 == 0 || epoch + 1 == num_epochs {
            println!("Epoch [{}/{}], Loss: {:.4}", epoch + 1, num_epochs, loss.value());
        }
    }

    println!("\nPredictions after training:");
    for (x, y) in xs.iter().zip(ys.iter()) {
        let pred = mlp.forward_values(x)?.remove(0);
        println!("  {:?} -> {:+.4} (target {:+.1})", x, pred.value(), y);
    }

    println!("\nFirst layer parameters:");
    for (name, p) in mlp.named_parameters().into_iter().take(4) {
        println!("  {:<18} {}", name, p);
    }
    Ok(())
}
