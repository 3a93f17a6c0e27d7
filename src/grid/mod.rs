//! Grid Module: Discrete Metric Encodings of Non-Orientable Surfaces
//!
//! The real projective plane and the Klein bottle have no embedding in ℝ³,
//! so instead of a coordinate point cloud they are represented as a lattice
//! graph with identified boundaries. Shortest-path distances over this graph
//! approximate the geodesic metric of the underlying surface.

mod adjacency;
mod noise;

pub use adjacency::{BoundaryIdentification, IdentifiedGrid};
pub use noise::{ConstNoise, NoiseSource, UniformNoise};
