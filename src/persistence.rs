//! Persistence Hand-Off: Downstream Engine Contract
//!
//! Building the Vietoris-Rips filtration and reducing its boundary matrix is
//! the job of an external persistence engine (Ripser and its ports are the
//! reference implementations). This module only fixes the boundary between
//! that engine and the rest of the crate:
//!
//! - the engine receives a dense precomputed metric (`Array2<f64>`), never
//!   raw coordinates;
//! - it returns a diagram of birth/death pairs, consumed here as an opaque
//!   artifact;
//! - whatever error it raises crosses the boundary untouched.

use ndarray::Array2;

/// Opaque error type raised by an engine implementation
pub type EngineError = Box<dyn std::error::Error + Send + Sync>;

/// A single birth/death pair in homological dimension `dimension`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersistencePair {
    pub birth: f64,
    pub death: f64,
    pub dimension: usize,
}

impl PersistencePair {
    /// Lifetime of the feature; infinite for essential classes
    pub fn persistence(&self) -> f64 {
        if self.death.is_infinite() {
            f64::INFINITY
        } else {
            self.death - self.birth
        }
    }

    /// Features that never die within the filtration
    pub fn is_essential(&self) -> bool {
        self.death.is_infinite()
    }
}

/// Birth/death diagram returned by the engine
#[derive(Debug, Clone, Default)]
pub struct PersistenceDiagram {
    pub pairs: Vec<PersistencePair>,
}

impl PersistenceDiagram {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Pairs in homological dimension `d`
    pub fn dim(&self, d: usize) -> Vec<&PersistencePair> {
        self.pairs.iter().filter(|p| p.dimension == d).collect()
    }

    /// Longest-lived finite pair in dimension `d`
    pub fn most_persistent(&self, d: usize) -> Option<&PersistencePair> {
        self.pairs
            .iter()
            .filter(|p| p.dimension == d && !p.is_essential())
            .max_by(|a, b| {
                a.persistence()
                    .partial_cmp(&b.persistence())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

/// External persistent-homology routine in precomputed-metric mode
pub trait PersistenceEngine {
    /// Compute the diagram of the metric up to `max_dimension`
    fn diagram(
        &self,
        metric: &Array2<f64>,
        max_dimension: usize,
    ) -> std::result::Result<PersistenceDiagram, EngineError>;
}
