//! Samples Module: Parametric Point Clouds of Classical Surfaces
//!
//! Closed-form coordinate generators for the orientable surfaces used as
//! persistence test beds:
//!
//! - **Circle** S¹ ⊂ ℝ²: one loop, β₁ = 1
//! - **Sphere** S² ⊂ ℝ³: one void, β₂ = 1
//! - **Torus** T² ⊂ ℝ³: two loops and one void, β₁ = 2, β₂ = 1
//!
//! Each generator samples the surface's parameter space uniformly at random
//! and maps through the standard embedding. An optional Gaussian jitter
//! (`sigma > 0`) perturbs the coordinates, mimicking measured rather than
//! ideal data. Callers needing reproducibility pass a seeded rng; the
//! generators hold no random state of their own.

mod circle;
mod sphere;
mod torus;

pub use circle::circle;
pub use sphere::sphere;
pub use torus::torus;

use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{Error, Result};

/// Additive coordinate jitter, independent per entry
fn apply_jitter(points: &mut Array2<f64>, sigma: f64, rng: &mut impl Rng) -> Result<()> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "jitter sigma must be nonnegative and finite, got {}",
            sigma
        )));
    }
    if sigma == 0.0 {
        return Ok(());
    }

    let normal = Normal::new(0.0, sigma).map_err(|e| {
        Error::InvalidArgument(format!("invalid jitter sigma {}: {}", sigma, e))
    })?;

    for value in points.iter_mut() {
        *value += normal.sample(rng);
    }

    Ok(())
}

/// Radii must be positive and finite
fn check_radius(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "{} must be positive and finite, got {}",
            name, value
        )));
    }
    Ok(())
}
