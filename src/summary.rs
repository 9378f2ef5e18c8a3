//! One-call structural report of a graph.
//!
//! [`summarize`] runs every ranking measure plus community detection and
//! collects the extremes into a [`GraphSummary`], whose `Display` impl is a
//! plain multi-line report.

use crate::centrality::{
    betweenness_centrality, closeness_centrality, eigenvector_centrality, max_degree_node,
    min_degree_node, ScoreMap,
};
use crate::community::CommunityDetection;
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use std::fmt;

/// Highest- and lowest-scoring node under one measure.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremes<N> {
    /// First entry of the ranking.
    pub highest: (N, f64),
    /// Last entry of the ranking.
    pub lowest: (N, f64),
}

impl<N: NodeId> Extremes<N> {
    fn of(scores: &ScoreMap<N>) -> Result<Self> {
        let mut ranked = scores.ranking().into_iter();
        let highest = ranked.next().ok_or(Error::EmptyGraph)?;
        let lowest = ranked.next_back().unwrap_or_else(|| highest.clone());
        Ok(Self { highest, lowest })
    }
}

/// Structural report produced by [`summarize`].
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSummary<N> {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Node with the most contacts, and its degree.
    pub max_degree: (N, usize),
    /// Node with the fewest contacts, and its degree.
    pub min_degree: (N, usize),
    /// Betweenness extremes (raw scores).
    pub betweenness: Extremes<N>,
    /// Closeness extremes.
    pub closeness: Extremes<N>,
    /// Eigenvector extremes.
    pub eigenvector: Extremes<N>,
    /// Number of communities found by the detector.
    pub community_count: usize,
}

/// Summarize `graph`, detecting communities with `detector`.
///
/// # Errors
///
/// - [`Error::EmptyGraph`] if the graph has no nodes
/// - any eigenvector failure ([`Error::DisconnectedGraph`],
///   [`Error::ConvergenceFailure`]) unchanged
/// - any error from `detector`
pub fn summarize<N, D>(graph: &Graph<N>, detector: &D) -> Result<GraphSummary<N>>
where
    N: NodeId,
    D: CommunityDetection,
{
    let max_degree = max_degree_node(graph)?;
    let min_degree = min_degree_node(graph)?;
    let eigenvector = Extremes::of(&eigenvector_centrality(graph)?)?;
    let betweenness = Extremes::of(&betweenness_centrality(graph))?;
    let closeness = Extremes::of(&closeness_centrality(graph))?;
    let community_count = detector.detect(graph)?.community_count();

    Ok(GraphSummary {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        max_degree,
        min_degree,
        betweenness,
        closeness,
        eigenvector,
        community_count,
    })
}

impl<N: fmt::Debug> fmt::Display for GraphSummary<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph Summary")?;
        writeln!(f, "=============")?;
        writeln!(f, "Nodes: {} ({} edges)", self.node_count, self.edge_count)?;
        writeln!(
            f,
            "Degree: max {:?} ({}), min {:?} ({})",
            self.max_degree.0, self.max_degree.1, self.min_degree.0, self.min_degree.1
        )?;
        for (name, extremes) in [
            ("Betweenness", &self.betweenness),
            ("Closeness", &self.closeness),
            ("Eigenvector", &self.eigenvector),
        ] {
            writeln!(
                f,
                "{name}: highest {:?} ({:.4}), lowest {:?} ({:.4})",
                extremes.highest.0, extremes.highest.1, extremes.lowest.0, extremes.lowest.1
            )?;
        }
        write!(f, "Communities: {}", self.community_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::community::Louvain;

    #[test]
    fn test_summarize_path() {
        let g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")]).unwrap();
        let summary = summarize(&g, &Louvain::new()).unwrap();

        assert_eq!(summary.node_count, 5);
        assert_eq!(summary.edge_count, 4);
        assert_eq!(summary.max_degree, ("b", 2));
        assert_eq!(summary.min_degree, ("a", 1));
        assert_eq!(summary.betweenness.highest, ("c", 4.0));
        // a and e tie at 0; the later one in canonical order is last
        assert_eq!(summary.betweenness.lowest, ("e", 0.0));
        assert_eq!(summary.closeness.lowest.0, "e");
        assert_eq!(summary.closeness.highest.0, "c");
        assert_eq!(summary.eigenvector.highest.0, "c");
        assert!(summary.community_count >= 1);
    }

    #[test]
    fn test_summarize_propagates_eigenvector_error() {
        let g = Graph::from_edges([(0, 1), (2, 3)]).unwrap();
        assert_eq!(
            summarize(&g, &Louvain::new()).unwrap_err(),
            Error::DisconnectedGraph { components: 2 }
        );
    }

    #[test]
    fn test_single_node_is_both_extremes() {
        let scores: ScoreMap<&str> = [("solo", 0.5)].into_iter().collect();
        let extremes = Extremes::of(&scores).unwrap();
        assert_eq!(extremes.highest, ("solo", 0.5));
        assert_eq!(extremes.lowest, ("solo", 0.5));
    }

    #[test]
    fn test_summarize_empty() {
        let g: Graph<u32> = Graph::new();
        assert_eq!(summarize(&g, &Louvain::new()).unwrap_err(), Error::EmptyGraph);
    }

    #[test]
    fn test_summary_display() {
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 0)]).unwrap();
        let report = summarize(&g, &Louvain::new()).unwrap().to_string();

        assert!(report.starts_with("Graph Summary\n"));
        assert!(report.contains("Nodes: 3 (3 edges)"));
        assert!(report.contains("Degree: max 0 (2), min 0 (2)"));
        assert!(report.ends_with("Communities: 1"));
    }
}
