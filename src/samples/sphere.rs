//! Sphere S²: a persistent 2-dimensional void

use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use std::f64::consts::PI;

use super::{apply_jitter, check_radius};
use crate::error::Result;

/// Sample `n` points uniformly on a sphere of the given radius
///
/// Uses the area-preserving parametrization `z ~ U(-1, 1)`,
/// `φ ~ U(0, 2π)`, `(x, y) = √(1 - z²)·(cos φ, sin φ)`, scaled by the
/// radius. Returns an n×3 point cloud.
pub fn sphere(n: usize, radius: f64, sigma: f64, rng: &mut impl Rng) -> Result<Array2<f64>> {
    check_radius("radius", radius)?;

    let height = Uniform::new_inclusive(-1.0, 1.0).unwrap();
    let angle = Uniform::new(0.0, 2.0 * PI).unwrap();
    let mut points = Array2::zeros((n, 3));

    for k in 0..n {
        let z: f64 = height.sample(rng);
        let phi = angle.sample(rng);
        let rho = (1.0 - z * z).sqrt();

        points[[k, 0]] = radius * rho * phi.cos();
        points[[k, 1]] = radius * rho * phi.sin();
        points[[k, 2]] = radius * z;
    }

    apply_jitter(&mut points, sigma, rng)?;
    Ok(points)
}
