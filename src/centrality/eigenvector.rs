//! Eigenvector centrality: importance via important neighbors.
//!
//! # Intuition
//!
//! A node is important if it is connected to other important nodes:
//! popular people connected to popular people. The recursive definition is
//! resolved by the dominant eigenvector of the adjacency matrix.
//!
//! ```text
//! x_v = (1/λ) × Σ_{u~v} x_u        (Ax = λx)
//! ```
//!
//! # Algorithm: Power Iteration
//!
//! 1. Initialize x uniformly (unit L2 norm)
//! 2. Repeat: x' = (A + I) × x, then x' = x' / ||x'||
//! 3. Stop when ||x' - x|| < tolerance
//!
//! Iterating on `A + I` instead of `A` keeps the eigenvectors and shifts every
//! eigenvalue by one. On bipartite graphs (stars, paths, even cycles) `A` has
//! eigenvalues ±λ of equal magnitude and plain iteration oscillates forever;
//! the shift breaks that symmetry.
//!
//! # Connectivity
//!
//! The leading eigenvector is only unique on a connected graph
//! (Perron–Frobenius). Disconnected input fails with
//! [`Error::DisconnectedGraph`]; run on
//! [`Graph::largest_component`] or on each component separately.
//!
//! # References
//!
//! - Bonacich (1972). "Factoring and weighting approaches to status scores"

use crate::centrality::ScoreMap;
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Configuration for eigenvector centrality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenvectorConfig {
    /// Maximum iterations before failing.
    pub max_iter: usize,
    /// Convergence tolerance (L2 norm of change).
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EigenvectorConfig {
    /// Default settings: 1000 iterations, tolerance `1e-6`.
    pub const fn new() -> Self {
        Self {
            max_iter: 1000,
            tolerance: 1e-6,
        }
    }

    /// Set the iteration cap.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Eigenvector centrality with default settings.
pub fn eigenvector_centrality<N: NodeId>(graph: &Graph<N>) -> Result<ScoreMap<N>> {
    eigenvector_centrality_with(graph, EigenvectorConfig::default())
}

/// Eigenvector centrality via power iteration.
///
/// Scores are non-negative with unit L2 norm.
///
/// # Errors
///
/// - [`Error::EmptyGraph`] if the graph has no nodes
/// - [`Error::DisconnectedGraph`] if it has more than one component
/// - [`Error::ConvergenceFailure`] if `max_iter` passes without reaching `tolerance`
///
/// # Complexity
///
/// - Time: O((V + E) × iterations)
/// - Space: O(V)
#[allow(clippy::cast_precision_loss)]
pub fn eigenvector_centrality_with<N: NodeId>(
    graph: &Graph<N>,
    config: EigenvectorConfig,
) -> Result<ScoreMap<N>> {
    let n = graph.node_count();
    if n == 0 {
        return Err(Error::EmptyGraph);
    }
    let components = graph.component_count();
    if components > 1 {
        return Err(Error::DisconnectedGraph { components });
    }

    let adj = graph.adjacency();
    let mut scores = vec![1.0 / (n as f64).sqrt(); n];
    let mut next = vec![0.0; n];

    for iter in 1..=config.max_iter {
        for (v, neighbors) in adj.iter().enumerate() {
            next[v] = scores[v] + neighbors.iter().map(|&u| scores[u]).sum::<f64>();
        }

        let norm = next.iter().map(|x| x * x).sum::<f64>().sqrt();
        for x in &mut next {
            *x /= norm;
        }

        let diff = scores
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).powi(2))
            .sum::<f64>()
            .sqrt();

        std::mem::swap(&mut scores, &mut next);

        if diff < config.tolerance {
            tracing::debug!(iterations = iter, nodes = n, "eigenvector centrality converged");
            return Ok(ScoreMap::from_graph(graph, scores));
        }
    }

    Err(Error::ConvergenceFailure {
        iterations: config.max_iter,
    })
}
