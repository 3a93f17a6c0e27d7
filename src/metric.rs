//! Metric Module: Distance Matrices for Persistence Input
//!
//! Two hand-offs toward the persistence engine, which consumes distances in
//! precomputed-metric mode:
//!
//! - Point clouds (circle, sphere, torus) get a dense Euclidean pairwise
//!   matrix.
//! - Identified grids get a geodesic matrix: the adjacency graph is handed
//!   to `petgraph::algo::floyd_warshall`, an external all-pairs
//!   shortest-path solver. A zero adjacency entry means "no edge" and never
//!   "zero distance".

use ndarray::Array2;
use petgraph::algo::floyd_warshall;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::error::{Error, Result};

/// Dense Euclidean distance matrix for an n×d point cloud
pub fn euclidean_distances(points: &Array2<f64>) -> Array2<f64> {
    let n = points.nrows();
    let mut distances = Array2::<f64>::zeros((n, n));

    for i in 0..n {
        let a = points.row(i);
        for j in (i + 1)..n {
            let dist = a
                .iter()
                .zip(points.row(j))
                .map(|(x, y)| (x - y).powi(2))
                .sum::<f64>()
                .sqrt();
            distances[[i, j]] = dist;
            distances[[j, i]] = dist;
        }
    }

    distances
}

/// All-pairs geodesic distances over a weighted adjacency matrix
///
/// The input must honor the adjacency contract: square, symmetric,
/// nonnegative, zero diagonal, and connected through its nonzero entries.
/// Contract violations are `InvalidArgument`; solver failures are surfaced
/// as `DownstreamComputation`.
pub fn geodesic_distances(adjacency: &Array2<f64>) -> Result<Array2<f64>> {
    validate_adjacency(adjacency)?;

    let n = adjacency.nrows();
    let mut graph = UnGraph::<(), f64>::with_capacity(n, 2 * n);
    let nodes: Vec<NodeIndex> = (0..n).map(|_| graph.add_node(())).collect();

    for i in 0..n {
        for j in (i + 1)..n {
            let weight = adjacency[[i, j]];
            if weight > 0.0 {
                graph.add_edge(nodes[i], nodes[j], weight);
            }
        }
    }

    let paths = floyd_warshall(&graph, |edge| *edge.weight()).map_err(|cycle| {
        Error::DownstreamComputation(format!("shortest-path solver failed: {:?}", cycle).into())
    })?;

    let mut distances = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            let d = paths
                .get(&(nodes[i], nodes[j]))
                .copied()
                .unwrap_or(f64::MAX);
            if d == f64::MAX {
                return Err(Error::InvalidArgument(format!(
                    "adjacency graph is disconnected: no path from {} to {}",
                    i, j
                )));
            }
            distances[[i, j]] = d;
        }
    }

    Ok(distances)
}

fn validate_adjacency(adjacency: &Array2<f64>) -> Result<()> {
    let (rows, cols) = adjacency.dim();
    if rows != cols {
        return Err(Error::InvalidArgument(format!(
            "adjacency matrix must be square, got {}x{}",
            rows, cols
        )));
    }

    for i in 0..rows {
        if adjacency[[i, i]] != 0.0 {
            return Err(Error::InvalidArgument(format!(
                "adjacency matrix has a nonzero diagonal entry at {}",
                i
            )));
        }
        for j in (i + 1)..rows {
            let w = adjacency[[i, j]];
            if w < 0.0 || !w.is_finite() {
                return Err(Error::InvalidArgument(format!(
                    "adjacency weight at ({}, {}) is not a finite nonnegative value: {}",
                    i, j, w
                )));
            }
            if w != adjacency[[j, i]] {
                return Err(Error::InvalidArgument(format!(
                    "adjacency matrix is not symmetric at ({}, {})",
                    i, j
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{BoundaryIdentification, IdentifiedGrid, UniformNoise};
    use ndarray::array;

    #[test]
    fn test_euclidean_distances_simple() {
        let points = array![[0.0, 0.0], [3.0, 4.0], [0.0, 1.0]];
        let distances = euclidean_distances(&points);

        assert_eq!(distances.dim(), (3, 3));
        assert_eq!(distances[[0, 0]], 0.0);
        assert!((distances[[0, 1]] - 5.0).abs() < 1e-12);
        assert!((distances[[0, 2]] - 1.0).abs() < 1e-12);
        assert_eq!(distances[[1, 2]], distances[[2, 1]]);
    }

    #[test]
    fn test_geodesic_path_graph() {
        // 0 --1.0-- 1 --2.0-- 2: geodesic from 0 to 2 is 3.0
        let adjacency = array![[0.0, 1.0, 0.0], [1.0, 0.0, 2.0], [0.0, 2.0, 0.0]];
        let distances = geodesic_distances(&adjacency).unwrap();

        assert_eq!(distances[[0, 0]], 0.0);
        assert!((distances[[0, 1]] - 1.0).abs() < 1e-12);
        assert!((distances[[0, 2]] - 3.0).abs() < 1e-12);
        assert_eq!(distances[[0, 2]], distances[[2, 0]]);
    }

    #[test]
    fn test_geodesic_prefers_shortcut() {
        // Direct edge 0-2 beats the two-hop path through 1
        let adjacency = array![[0.0, 1.0, 1.5], [1.0, 0.0, 1.0], [1.5, 1.0, 0.0]];
        let distances = geodesic_distances(&adjacency).unwrap();
        assert!((distances[[0, 2]] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_geodesic_metric_axioms_on_grid() {
        let grid = IdentifiedGrid::new(4, 4, BoundaryIdentification::ProjectivePlane).unwrap();
        let adjacency = grid.adjacency(&mut UniformNoise::seeded(11));
        let distances = geodesic_distances(&adjacency).unwrap();

        let n = 16;
        for i in 0..n {
            assert_eq!(distances[[i, i]], 0.0);
            for j in 0..n {
                assert_eq!(distances[[i, j]], distances[[j, i]]);
                assert!(distances[[i, j]].is_finite());
                if i != j {
                    assert!(distances[[i, j]] > 0.0);
                }
                for k in 0..n {
                    assert!(
                        distances[[i, j]] <= distances[[i, k]] + distances[[k, j]] + 1e-9,
                        "triangle inequality violated at ({}, {}, {})",
                        i,
                        j,
                        k
                    );
                }
            }
        }
    }

    #[test]
    fn test_geodesic_rejects_disconnected() {
        // Two components: {0, 1} and {2, 3}
        let adjacency = array![
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 0.0]
        ];
        assert!(geodesic_distances(&adjacency).is_err());
    }

    #[test]
    fn test_geodesic_rejects_contract_violations() {
        let asymmetric = array![[0.0, 1.0], [2.0, 0.0]];
        assert!(geodesic_distances(&asymmetric).is_err());

        let nonzero_diagonal = array![[1.0, 1.0], [1.0, 0.0]];
        assert!(geodesic_distances(&nonzero_diagonal).is_err());

        let negative = array![[0.0, -1.0], [-1.0, 0.0]];
        assert!(geodesic_distances(&negative).is_err());

        let rectangular = Array2::<f64>::zeros((2, 3));
        assert!(geodesic_distances(&rectangular).is_err());
    }
}
