//! Torus T²: two independent 1-cycles and one void

use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use std::f64::consts::PI;

use super::{apply_jitter, check_radius};
use crate::error::Result;

/// Sample `n` points on a torus via the standard embedding
///
/// Both angles are uniform on `[0, 2π)`:
///
/// ```text
/// x = (R + r cos θ) cos φ
/// y = (R + r cos θ) sin φ
/// z = r sin θ
/// ```
///
/// `major_radius` is R (center of the tube to the center of the torus),
/// `minor_radius` is r (tube radius). Returns an n×3 point cloud.
pub fn torus(
    n: usize,
    major_radius: f64,
    minor_radius: f64,
    sigma: f64,
    rng: &mut impl Rng,
) -> Result<Array2<f64>> {
    check_radius("major_radius", major_radius)?;
    check_radius("minor_radius", minor_radius)?;

    let angle = Uniform::new(0.0, 2.0 * PI).unwrap();
    let mut points = Array2::zeros((n, 3));

    for k in 0..n {
        let theta = angle.sample(rng);
        let phi = angle.sample(rng);
        let ring = major_radius + minor_radius * theta.cos();

        points[[k, 0]] = ring * phi.cos();
        points[[k, 1]] = ring * phi.sin();
        points[[k, 2]] = minor_radius * theta.sin();
    }

    apply_jitter(&mut points, sigma, rng)?;
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_torus_implicit_equation() {
        // (√(x² + y²) - R)² + z² = r² on the ideal surface
        let mut rng = StdRng::seed_from_u64(9);
        let points = torus(300, 2.0, 0.5, 0.0, &mut rng).unwrap();
        assert_eq!(points.dim(), (300, 3));

        for k in 0..300 {
            let rho = (points[[k, 0]].powi(2) + points[[k, 1]].powi(2)).sqrt();
            let residual = (rho - 2.0).powi(2) + points[[k, 2]].powi(2);
            assert!(
                (residual - 0.25).abs() < 1e-12,
                "off the torus: residual {}",
                residual
            );
        }
    }

    #[test]
    fn test_torus_rejects_bad_radii() {
        let mut rng = StdRng::seed_from_u64(10);
        assert!(torus(10, 0.0, 0.5, 0.0, &mut rng).is_err());
        assert!(torus(10, 2.0, -0.5, 0.0, &mut rng).is_err());
    }
}
