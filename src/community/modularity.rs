//! Modularity of a partition, and the weighted graph Louvain aggregates into.

use super::Partition;
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use petgraph::visit::EdgeRef;
use std::collections::BTreeMap;

/// Weighted undirected graph in index space.
///
/// Self-loops are kept apart from `adj`: they carry the internal weight of a
/// community collapsed into one node, so they count toward degree and
/// internal weight but never make a node its own neighbor.
#[derive(Debug, Clone)]
pub(crate) struct WeightedGraph {
    pub(crate) n: usize,
    /// Each edge once, `i < j`.
    pub(crate) edges: Vec<(usize, usize, f64)>,
    /// Adjacency: node -> [(neighbor, weight)], self-loops excluded.
    pub(crate) adj: Vec<Vec<(usize, f64)>>,
    /// Self-loop weight per node, counted once.
    pub(crate) self_loops: Vec<f64>,
    /// Weighted degree (self-loops count twice).
    pub(crate) degrees: Vec<f64>,
    /// Total edge weight m.
    pub(crate) total_weight: f64,
}

impl WeightedGraph {
    pub(crate) fn new(n: usize, edges: Vec<(usize, usize, f64)>, self_loops: Vec<f64>) -> Self {
        let mut adj = vec![Vec::new(); n];
        let mut degrees = vec![0.0; n];
        for &(i, j, w) in &edges {
            adj[i].push((j, w));
            adj[j].push((i, w));
            degrees[i] += w;
            degrees[j] += w;
        }
        for (i, &sl) in self_loops.iter().enumerate() {
            degrees[i] += 2.0 * sl;
        }
        let total_weight =
            edges.iter().map(|&(_, _, w)| w).sum::<f64>() + self_loops.iter().sum::<f64>();

        Self {
            n,
            edges,
            adj,
            self_loops,
            degrees,
            total_weight,
        }
    }

    /// Unit-weight copy of `graph`, nodes in canonical order.
    pub(crate) fn from_graph<N: NodeId>(graph: &Graph<N>) -> Self {
        let edges = graph
            .graph
            .edge_references()
            .map(|e| {
                let (i, j) = (e.source().index(), e.target().index());
                (i.min(j), i.max(j), 1.0)
            })
            .collect();
        Self::new(graph.node_count(), edges, vec![0.0; graph.node_count()])
    }

    /// Collapse each of the `k` communities into a single node.
    ///
    /// Intra-community edges become self-loop weight; parallel inter-community
    /// edges are summed.
    pub(crate) fn aggregate(&self, communities: &[usize], k: usize) -> Self {
        let mut self_loops = vec![0.0; k];
        for (i, &sl) in self.self_loops.iter().enumerate() {
            self_loops[communities[i]] += sl;
        }

        let mut between: BTreeMap<(usize, usize), f64> = BTreeMap::new();
        for &(i, j, w) in &self.edges {
            let (ci, cj) = (communities[i], communities[j]);
            if ci == cj {
                self_loops[ci] += w;
            } else {
                *between.entry((ci.min(cj), ci.max(cj))).or_insert(0.0) += w;
            }
        }

        let edges = between.into_iter().map(|((i, j), w)| (i, j, w)).collect();
        Self::new(k, edges, self_loops)
    }

    /// Modularity of `communities` (labels in `0..k`, any numbering).
    ///
    /// `Q = Σ_c [in_c / m − γ (tot_c / 2m)²]` with `in_c` the internal weight
    /// counted once and `tot_c` the summed degree.
    pub(crate) fn modularity(&self, communities: &[usize], resolution: f64) -> f64 {
        let m = self.total_weight;
        if m == 0.0 {
            return 0.0;
        }
        let k = communities.iter().copied().max().map_or(0, |c| c + 1);
        let mut internal = vec![0.0; k];
        let mut total = vec![0.0; k];

        for (i, &c) in communities.iter().enumerate() {
            internal[c] += self.self_loops[i];
            total[c] += self.degrees[i];
        }
        for &(i, j, w) in &self.edges {
            if communities[i] == communities[j] {
                internal[communities[i]] += w;
            }
        }

        internal
            .iter()
            .zip(&total)
            .map(|(&inside, &tot)| inside / m - resolution * (tot / (2.0 * m)).powi(2))
            .sum()
    }
}

/// Modularity of `partition` on `graph` (resolution 1).
///
/// Returns 0 for a graph with no edges. Fails with [`Error::InvalidNode`] if a
/// graph node has no community in `partition`.
pub fn modularity<N: NodeId>(graph: &Graph<N>, partition: &Partition<N>) -> Result<f64> {
    modularity_with_resolution(graph, partition, 1.0)
}

/// Modularity with resolution γ: higher γ penalizes large communities more.
pub fn modularity_with_resolution<N: NodeId>(
    graph: &Graph<N>,
    partition: &Partition<N>,
    resolution: f64,
) -> Result<f64> {
    let labels = graph
        .nodes()
        .map(|node| {
            partition
                .community_of(node)
                .ok_or_else(|| Error::invalid_node(node))
        })
        .collect::<Result<Vec<usize>>>()?;
    Ok(WeightedGraph::from_graph(graph).modularity(&labels, resolution))
}
