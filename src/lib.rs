//! # tda-surfaces
//!
//! Point-cloud samples of classical surfaces and discrete metric encodings
//! of non-orientable surfaces, prepared for persistent-homology analysis.
//!
//! ## Pipeline
//!
//! 1. **Sampling**: orientable surfaces (circle S¹, sphere S², torus T²)
//!    are sampled by closed-form parametric embeddings; non-orientable
//!    surfaces (real projective plane ℝP², Klein bottle K) have no ℝ³
//!    embedding and are encoded as boundary-identified lattice graphs.
//!
//! 2. **Metric**: point clouds get a dense Euclidean distance matrix;
//!    identified grids get an all-pairs geodesic matrix, with the
//!    shortest-path computation delegated to `petgraph`.
//!
//! 3. **Persistence**: the metric is handed to an external persistence
//!    engine (Vietoris-Rips in precomputed-metric mode) through the
//!    `PersistenceEngine` trait. The engine itself is not part of this
//!    crate; its diagrams are consumed as opaque birth/death artifacts.
//!
//! ## Boundary Identifications
//!
//! Gluing opposite edges of a rows × cols grid yields closed surfaces:
//! antipodal gluing on both axes approximates ℝP², one direct plus one
//! twisted gluing approximates the Klein bottle. Edge weights carry small
//! symmetric noise so that downstream persistence pairs never coincide
//! exactly.
//!
//! ## Reference
//!
//! Edelsbrunner & Harer, "Computational Topology" (2010)

pub mod error;
pub mod grid;
pub mod metric;
pub mod persistence;
pub mod pipeline;
pub mod samples;

pub use error::{Error, Result};

pub use grid::{BoundaryIdentification, ConstNoise, IdentifiedGrid, NoiseSource, UniformNoise};

pub use metric::{euclidean_distances, geodesic_distances};

pub use persistence::{EngineError, PersistenceDiagram, PersistenceEngine, PersistencePair};

pub use pipeline::{point_cloud_diagram, surface_diagram};

pub use samples::{circle, sphere, torus};
