//! Degree: the simplest centrality measure.
//!
//! Degree counts incident edges. In a social network it measures how many
//! direct contacts someone has, ignoring everything beyond one hop.
//!
//! Scores here are raw counts, not divided by `n - 1`.

use crate::centrality::ScoreMap;
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Number of edges incident to `node`.
pub fn degree<N: NodeId>(graph: &Graph<N>, node: &N) -> Result<usize> {
    graph.degree(node)
}

/// Degree of every node as a score map.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality<N: NodeId>(graph: &Graph<N>) -> ScoreMap<N> {
    let scores = graph
        .graph
        .node_indices()
        .map(|idx| graph.graph.edges(idx).count() as f64)
        .collect();
    ScoreMap::from_graph(graph, scores)
}

/// The node with the highest degree, and that degree.
///
/// Ties go to the node first in canonical order.
pub fn max_degree_node<N: NodeId>(graph: &Graph<N>) -> Result<(N, usize)> {
    extreme_degree(graph, |candidate, best| candidate > best)
}

/// The node with the lowest degree, and that degree.
///
/// Ties go to the node first in canonical order.
pub fn min_degree_node<N: NodeId>(graph: &Graph<N>) -> Result<(N, usize)> {
    extreme_degree(graph, |candidate, best| candidate < best)
}

fn extreme_degree<N, F>(graph: &Graph<N>, better: F) -> Result<(N, usize)>
where
    N: NodeId,
    F: Fn(usize, usize) -> bool,
{
    let g = &graph.graph;
    let mut best = None;
    for idx in g.node_indices() {
        let d = g.edges(idx).count();
        match best {
            Some((_, best_d)) if !better(d, best_d) => {}
            _ => best = Some((idx, d)),
        }
    }
    let (idx, d) = best.ok_or(Error::EmptyGraph)?;
    Ok((g[idx].clone(), d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes_first_in_canonical_order() {
        // 0-1, 1-2, 2-3, 3-0, 0-4: node 0 has degree 3; 4 has degree 1
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (0, 4)]).unwrap();
        assert_eq!(max_degree_node(&g), Ok((0, 3)));
        assert_eq!(min_degree_node(&g), Ok((4, 1)));

        // Cycle: all degree 2, first node wins both
        let c = Graph::from_edges([("x", "y"), ("y", "z"), ("z", "x")]).unwrap();
        assert_eq!(max_degree_node(&c), Ok(("x", 2)));
        assert_eq!(min_degree_node(&c), Ok(("x", 2)));
    }

    #[test]
    fn test_isolated_node_has_degree_zero() {
        let mut g = Graph::from_edges([(0, 1)]).unwrap();
        g.add_node(7);
        assert_eq!(degree(&g, &7), Ok(0));
        assert_eq!(min_degree_node(&g), Ok((7, 0)));
    }

    #[test]
    fn test_empty_graph() {
        let g: Graph<u8> = Graph::new();
        assert_eq!(max_degree_node(&g), Err(Error::EmptyGraph));
        assert_eq!(min_degree_node(&g), Err(Error::EmptyGraph));
    }

    #[test]
    fn test_degree_sum_is_twice_edges() {
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
        let total: f64 = degree_centrality(&g).values().sum();
        assert_eq!(total, 2.0 * g.edge_count() as f64);
    }
}
