//! Node ranking: degree and three centrality measures.
//!
//! Every measure produces a [`ScoreMap`] with one entry per node, and every
//! ranking goes through the same [`top_n`] selector, so "top 3 by closeness"
//! and "top 3 by degree" tie-break identically (canonical node order).
//!
//! | Measure | Captures | Disconnected graphs |
//! |---------|----------|---------------------|
//! | Degree | Direct contacts | Fine |
//! | Betweenness | Brokerage on shortest paths | Unreachable pairs add 0 |
//! | Closeness | Proximity to reachable nodes | Scaled by reach (Wasserman–Faust) |
//! | Eigenvector | Connection to well-connected nodes | Error: one component at a time |
//!
//! ## Usage
//!
//! ```rust
//! use socnet::{Centrality, Graph};
//!
//! let graph = Graph::from_edges([(0, 1), (1, 2), (1, 3)]).unwrap();
//! let top = Centrality::Betweenness.top_n(&graph, 1).unwrap();
//! assert_eq!(top, vec![1]);
//! ```

mod betweenness;
mod closeness;
mod degree;
mod eigenvector;
mod scores;

pub use betweenness::{betweenness_centrality, betweenness_centrality_with, BetweennessConfig};
pub use closeness::closeness_centrality;
pub use degree::{degree, degree_centrality, max_degree_node, min_degree_node};
pub use eigenvector::{eigenvector_centrality, eigenvector_centrality_with, EigenvectorConfig};
pub use scores::{top_n, ScoreMap};

use crate::error::Result;
use crate::graph::{Graph, NodeId};

/// The closed set of node scoring functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Centrality {
    /// Raw degree.
    Degree,
    /// Raw (unnormalized) betweenness.
    Betweenness,
    /// Wasserman–Faust closeness.
    Closeness,
    /// Power-iteration eigenvector centrality.
    Eigenvector(EigenvectorConfig),
}

impl Centrality {
    /// Every measure, eigenvector with default settings.
    pub const ALL: [Centrality; 4] = [
        Centrality::Degree,
        Centrality::Betweenness,
        Centrality::Closeness,
        Centrality::Eigenvector(EigenvectorConfig::new()),
    ];

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Centrality::Degree => "degree",
            Centrality::Betweenness => "betweenness",
            Centrality::Closeness => "closeness",
            Centrality::Eigenvector(_) => "eigenvector",
        }
    }

    /// Score every node. Only the eigenvector measure can fail.
    pub fn scores<N: NodeId>(&self, graph: &Graph<N>) -> Result<ScoreMap<N>> {
        match self {
            Centrality::Degree => Ok(degree_centrality(graph)),
            Centrality::Betweenness => Ok(betweenness_centrality(graph)),
            Centrality::Closeness => Ok(closeness_centrality(graph)),
            Centrality::Eigenvector(config) => eigenvector_centrality_with(graph, *config),
        }
    }

    /// The `n` highest-scoring nodes under this measure.
    pub fn top_n<N: NodeId>(&self, graph: &Graph<N>, n: usize) -> Result<Vec<N>> {
        top_n(&self.scores(graph)?, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_all_measures_cover_every_node() {
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
        for measure in Centrality::ALL {
            let scores = measure.scores(&g).unwrap();
            assert_eq!(scores.len(), 4, "{}", measure.name());
            assert!(scores.values().all(f64::is_finite));
        }
    }

    #[test]
    fn test_top_n_per_measure() {
        // Triangle 0-1-2 with a tail 2-3: node 2 leads every measure
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
        for measure in Centrality::ALL {
            assert_eq!(measure.top_n(&g, 1).unwrap(), vec![2], "{}", measure.name());
        }
    }

    #[test]
    fn test_eigenvector_error_propagates() {
        let g = Graph::from_edges([(0, 1), (2, 3)]).unwrap();
        let measure = Centrality::Eigenvector(EigenvectorConfig::default());
        assert_eq!(
            measure.top_n(&g, 1).unwrap_err(),
            Error::DisconnectedGraph { components: 2 }
        );
        assert_eq!(
            Centrality::Closeness.top_n(&g, 0).unwrap_err(),
            Error::InvalidCount { requested: 0 }
        );
    }
}
