//! Boundary-Identified Grid Adjacency
//!
//! Non-orientable surfaces cannot be sampled by a closed-form embedding in
//! ℝ³, so they are encoded as discrete metric spaces instead: a rows × cols
//! lattice whose opposite boundaries are glued together, either directly
//! (cylinder-style wrap) or with a twist (antipodal identification).
//!
//! - **Real projective plane**: both axes glued antipodally.
//! - **Klein bottle**: vertical boundary wraps directly, horizontal boundary
//!   glued antipodally.
//!
//! The output is a symmetric weighted adjacency matrix. Zero entries mean
//! "no edge", never "zero distance"; the graph is handed to an all-pairs
//! shortest-path solver and the resulting geodesic matrix is consumed by a
//! persistence engine in precomputed-metric mode.
//!
//! Each edge weight is 1 plus uniform noise in [-0.075, +0.075], drawn
//! independently per edge, so that geodesic distances (and hence persistence
//! pairs) do not exactly coincide.

use ndarray::Array2;

use super::noise::NoiseSource;
use crate::error::{Error, Result};

/// How opposite boundaries of the grid are glued together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryIdentification {
    /// Antipodal identification on both axes: ℝP²
    ProjectivePlane,
    /// Direct wrap on the vertical boundary, antipodal on the horizontal
    KleinBottle,
}

/// A rows × cols lattice with a boundary identification
///
/// Nodes are addressed row-major: node `(r, c)` has linear index
/// `i = r*cols + c`, and `n = rows*cols` in total.
#[derive(Debug, Clone, Copy)]
pub struct IdentifiedGrid {
    rows: usize,
    cols: usize,
    identification: BoundaryIdentification,
}

impl IdentifiedGrid {
    /// Create a grid, rejecting degenerate dimensions before any allocation
    pub fn new(rows: usize, cols: usize, identification: BoundaryIdentification) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidArgument(format!(
                "grid dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }

        Ok(Self {
            rows,
            cols,
            identification,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total node count `n = rows*cols`
    pub fn n_nodes(&self) -> usize {
        self.rows * self.cols
    }

    pub fn identification(&self) -> BoundaryIdentification {
        self.identification
    }

    /// Build the weighted adjacency matrix
    ///
    /// One pass over all `(r, c)` coordinates. Per node, in this order:
    ///
    /// 1. `c > 0`: edge to the left neighbor `i-1`
    /// 2. `r > 0`: edge to the upper neighbor `i-cols`
    /// 3. `c == 0`: edge to the left-boundary partner, `n-i-1` for the
    ///    projective plane or `i+cols-1` (same row, far right column) for
    ///    the Klein bottle
    /// 4. `r == 0`: edge to the antipodal partner `n-i-1`
    ///
    /// Every edge is written to `(i, j)` and `(j, i)` simultaneously, so the
    /// matrix is symmetric by construction. When several conditions address
    /// the same entry (corner nodes, small grids) the last write in the
    /// order above wins. A partner that coincides with the node itself is
    /// skipped: the diagonal stays zero.
    pub fn adjacency(&self, noise: &mut dyn NoiseSource) -> Array2<f64> {
        let n = self.n_nodes();
        let mut matrix = Array2::<f64>::zeros((n, n));

        for r in 0..self.rows {
            for c in 0..self.cols {
                let i = r * self.cols + c;

                if c > 0 {
                    connect(&mut matrix, i, i - 1, edge_weight(noise));
                }

                if r > 0 {
                    connect(&mut matrix, i, i - self.cols, edge_weight(noise));
                }

                if c == 0 {
                    let partner = match self.identification {
                        BoundaryIdentification::ProjectivePlane => n - i - 1,
                        BoundaryIdentification::KleinBottle => i + self.cols - 1,
                    };
                    if partner != i {
                        connect(&mut matrix, i, partner, edge_weight(noise));
                    }
                }

                if r == 0 {
                    let partner = n - i - 1;
                    if partner != i {
                        connect(&mut matrix, i, partner, edge_weight(noise));
                    }
                }
            }
        }

        matrix
    }
}

/// Nominal unit weight with symmetric perturbation in [-0.075, +0.075]
fn edge_weight(noise: &mut dyn NoiseSource) -> f64 {
    1.0 + 0.15 * (noise.next() - 0.5)
}

/// Write an undirected edge into both triangles of the matrix
fn connect(matrix: &mut Array2<f64>, i: usize, j: usize, weight: f64) {
    matrix[[i, j]] = weight;
    matrix[[j, i]] = weight;
}
