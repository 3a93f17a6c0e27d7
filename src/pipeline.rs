//! Pipeline Module: Surface → Metric → Persistence
//!
//! Wires the stages together the way the original analysis proceeds: a
//! surface is turned into a precomputed metric (Euclidean for embedded point
//! clouds, geodesic for identified grids) and handed to a persistence
//! engine. The pipeline owns no stage itself; it only sequences the calls
//! and wraps engine failures without altering them.

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::grid::{IdentifiedGrid, NoiseSource};
use crate::metric::{euclidean_distances, geodesic_distances};
use crate::persistence::{PersistenceDiagram, PersistenceEngine};

/// Diagram of a boundary-identified grid surface
///
/// Builds the noisy adjacency matrix, propagates shortest-path distances,
/// and feeds the geodesic metric to the engine.
pub fn surface_diagram<E: PersistenceEngine + ?Sized>(
    grid: &IdentifiedGrid,
    noise: &mut dyn NoiseSource,
    engine: &E,
    max_dimension: usize,
) -> Result<PersistenceDiagram> {
    let adjacency = grid.adjacency(noise);
    let metric = geodesic_distances(&adjacency)?;
    engine
        .diagram(&metric, max_dimension)
        .map_err(Error::DownstreamComputation)
}

/// Diagram of an embedded point cloud under the Euclidean metric
pub fn point_cloud_diagram<E: PersistenceEngine + ?Sized>(
    points: &Array2<f64>,
    engine: &E,
    max_dimension: usize,
) -> Result<PersistenceDiagram> {
    let metric = euclidean_distances(points);
    engine
        .diagram(&metric, max_dimension)
        .map_err(Error::DownstreamComputation)
}
