//! Community assignments.

use crate::error::{Error, Result};
use crate::graph::{renumber, Graph, NodeId};
use std::collections::HashMap;

/// Node → community id mapping.
///
/// Invariants:
/// - every node of the source graph has exactly one id
/// - ids are contiguous in `0..k`, numbered by first appearance in the
///   graph's canonical node order
#[derive(Debug, Clone)]
pub struct Partition<N> {
    nodes: Vec<N>,
    labels: Vec<usize>,
    index: HashMap<N, usize>,
    n_communities: usize,
}

impl<N: NodeId> Partition<N> {
    /// Build from raw labels aligned with the graph's canonical order.
    ///
    /// Labels may be arbitrary; they are renumbered to `0..k` in first-seen order.
    pub fn from_labels(graph: &Graph<N>, labels: &[usize]) -> Result<Self> {
        if labels.len() != graph.node_count() {
            return Err(Error::DimensionMismatch {
                expected: graph.node_count(),
                found: labels.len(),
            });
        }
        let mut labels = labels.to_vec();
        let n_communities = renumber(&mut labels);
        let nodes: Vec<N> = graph.nodes().cloned().collect();
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.clone(), i))
            .collect();

        Ok(Self {
            nodes,
            labels,
            index,
            n_communities,
        })
    }

    /// Every node in its own community.
    pub fn singletons(graph: &Graph<N>) -> Self {
        let labels: Vec<usize> = (0..graph.node_count()).collect();
        let nodes: Vec<N> = graph.nodes().cloned().collect();
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.clone(), i))
            .collect();
        Self {
            n_communities: labels.len(),
            nodes,
            labels,
            index,
        }
    }

    /// Community id of `node`, if it is part of the partition.
    pub fn community_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).map(|&i| self.labels[i])
    }

    /// Number of distinct communities.
    pub fn community_count(&self) -> usize {
        self.n_communities
    }

    /// Number of nodes assigned.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no nodes are assigned.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Community ids in canonical node order.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// `(node, community)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, usize)> + '_ {
        self.nodes.iter().zip(self.labels.iter().copied())
    }

    /// Members of community `id` in canonical order (empty if `id >= k`).
    pub fn members(&self, id: usize) -> Vec<N> {
        self.iter()
            .filter(|&(_, c)| c == id)
            .map(|(node, _)| node.clone())
            .collect()
    }

    /// Member lists for every community; position `c` holds community `c`.
    pub fn communities(&self) -> Vec<Vec<N>> {
        let mut groups = vec![Vec::new(); self.n_communities];
        for (node, c) in self.iter() {
            groups[c].push(node.clone());
        }
        groups
    }

    /// Every node sharing `node`'s community, `node` included.
    pub fn community_with(&self, node: &N) -> Result<Vec<N>> {
        let id = self
            .community_of(node)
            .ok_or_else(|| Error::invalid_node(node))?;
        Ok(self.members(id))
    }
}
