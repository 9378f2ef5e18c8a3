//! Closeness centrality: proximity to everyone a node can reach.
//!
//! # Definition (Wasserman–Faust)
//!
//! With R the set of nodes reachable from v (excluding v) and n the node
//! count:
//!
//! ```text
//! C_C(v) = (|R| / (n-1)) × (|R| / Σ_{u∈R} d(v,u))
//! ```
//!
//! The first factor scales by the fraction of the graph v can reach, which
//! keeps small components from looking artificially central. Nodes that reach
//! nothing score 0. On a connected graph this reduces to the classic
//! `(n-1) / Σ d(v,u)`.
//!
//! # Complexity
//!
//! One BFS per node: O(V(V + E)) time, O(V) extra space per traversal.

use crate::centrality::ScoreMap;
use crate::graph::{Graph, NodeId};
use std::collections::VecDeque;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Closeness centrality of every node.
#[must_use]
pub fn closeness_centrality<N: NodeId>(graph: &Graph<N>) -> ScoreMap<N> {
    let n = graph.node_count();
    let adj = graph.adjacency();

    #[cfg(feature = "parallel")]
    let scores: Vec<f64> = (0..n)
        .into_par_iter()
        .map(|v| node_closeness(&adj, v))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let scores: Vec<f64> = (0..n).map(|v| node_closeness(&adj, v)).collect();

    ScoreMap::from_graph(graph, scores)
}

#[allow(clippy::cast_precision_loss)]
fn node_closeness(adj: &[Vec<usize>], v: usize) -> f64 {
    let n = adj.len();
    if n < 2 {
        return 0.0;
    }
    let (reachable, total_dist) = bfs_distances(adj, v)
        .into_iter()
        .filter(|&d| d > 0 && d != usize::MAX)
        .fold((0usize, 0usize), |(r, t), d| (r + 1, t + d));

    if reachable == 0 {
        return 0.0;
    }
    let r = reachable as f64;
    (r / (n - 1) as f64) * (r / total_dist as f64)
}

/// BFS hop distances from `source`. `usize::MAX` marks unreachable nodes.
fn bfs_distances(adj: &[Vec<usize>], source: usize) -> Vec<usize> {
    let mut dist = vec![usize::MAX; adj.len()];
    dist[source] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        for &w in &adj[v] {
            if dist[w] == usize::MAX {
                dist[w] = dist[v] + 1;
                queue.push_back(w);
            }
        }
    }

    dist
}
