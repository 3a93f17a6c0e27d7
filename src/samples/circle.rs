//! Circle S¹: the simplest space with a persistent 1-cycle

use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use std::f64::consts::PI;

use super::{apply_jitter, check_radius};
use crate::error::Result;

/// Sample `n` points on a circle of the given radius
///
/// Angles are uniform on `[0, 2π)`, mapped through
/// `(r cos θ, r sin θ)`. Returns an n×2 point cloud.
pub fn circle(n: usize, radius: f64, sigma: f64, rng: &mut impl Rng) -> Result<Array2<f64>> {
    check_radius("radius", radius)?;

    let angle = Uniform::new(0.0, 2.0 * PI).unwrap();
    let mut points = Array2::zeros((n, 2));

    for k in 0..n {
        let theta = angle.sample(rng);
        points[[k, 0]] = radius * theta.cos();
        points[[k, 1]] = radius * theta.sin();
    }

    apply_jitter(&mut points, sigma, rng)?;
    Ok(points)
}
