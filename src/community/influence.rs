//! Influencers: nodes that are both brokers and close to everyone.
//!
//! Within one community (or any node set) the induced subgraph is ranked by
//! betweenness and by closeness; the influencers are the nodes that make the
//! top `k` of both lists (`k = 3` by default). Ties inside each ranking fall
//! back to canonical order, so the result is deterministic.
//!
//! Centralities are recomputed on the induced subgraph, not read off the
//! whole graph: a node that bridges two communities globally may be
//! unremarkable inside its own.

use super::Partition;
use crate::centrality::{betweenness_centrality, closeness_centrality, top_n};
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use std::collections::HashSet;

/// Configuration for influencer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfluencerConfig {
    /// How many nodes to take from each ranking before intersecting.
    pub top_n: usize,
}

impl Default for InfluencerConfig {
    fn default() -> Self {
        Self { top_n: 3 }
    }
}

impl InfluencerConfig {
    /// Top-3 rankings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many nodes each ranking contributes.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

/// Influencers of one community, tagged with the community they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityInfluencers<N> {
    /// Community id in the partition.
    pub community: usize,
    /// Influencer nodes, in canonical order.
    pub influencers: Vec<N>,
}

/// Influencers of the subgraph induced by `nodes`.
///
/// The result is a set, listed in canonical order. It may be empty when the
/// two rankings disagree entirely.
///
/// # Errors
///
/// - [`Error::InvalidCount`] if `config.top_n == 0`
/// - [`Error::InvalidNode`] if a node is not in `graph`
/// - [`Error::EmptyGraph`] if `nodes` is empty
pub fn influencers<'a, N, I>(
    graph: &Graph<N>,
    nodes: I,
    config: &InfluencerConfig,
) -> Result<Vec<N>>
where
    N: NodeId + 'a,
    I: IntoIterator<Item = &'a N>,
{
    if config.top_n == 0 {
        return Err(Error::InvalidCount { requested: 0 });
    }
    let sub = graph.induced_subgraph(nodes)?;
    if sub.is_empty() {
        return Err(Error::EmptyGraph);
    }

    let brokers = top_n(&betweenness_centrality(&sub), config.top_n)?;
    let close: HashSet<N> = top_n(&closeness_centrality(&sub), config.top_n)?
        .into_iter()
        .collect();

    Ok(sub
        .nodes()
        .filter(|node| brokers.contains(node) && close.contains(*node))
        .cloned()
        .collect())
}

/// Influencers of every community in `partition`, in community id order.
pub fn community_influencers<N: NodeId>(
    graph: &Graph<N>,
    partition: &Partition<N>,
    config: &InfluencerConfig,
) -> Result<Vec<CommunityInfluencers<N>>> {
    partition
        .communities()
        .iter()
        .enumerate()
        .map(|(community, members)| {
            Ok(CommunityInfluencers {
                community,
                influencers: influencers(graph, members, config)?,
            })
        })
        .collect()
}

/// Influencers of all communities, flattened in community id order.
pub fn all_influencers<N: NodeId>(
    graph: &Graph<N>,
    partition: &Partition<N>,
    config: &InfluencerConfig,
) -> Result<Vec<N>> {
    Ok(community_influencers(graph, partition, config)?
        .into_iter()
        .flat_map(|c| c.influencers)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::community::{CommunityDetection, Louvain};

    fn kite() -> Graph<u32> {
        Graph::from_edges([
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 5),
            (1, 3),
            (1, 4),
            (1, 6),
            (2, 3),
            (2, 5),
            (3, 4),
            (3, 5),
            (3, 6),
            (4, 6),
            (5, 6),
            (5, 7),
            (6, 7),
            (7, 8),
            (8, 9),
        ])
        .unwrap()
    }

    #[test]
    fn test_triangle_all_influencers() {
        let g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a")]).unwrap();
        let found = influencers(&g, &["a", "b", "c"], &InfluencerConfig::default()).unwrap();
        assert_eq!(found, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rankings_diverge_on_kite() {
        // Betweenness top 3: 7, 5, 6. Closeness top 3: 5, 6, then 3 (ties with 7,
        // earlier in canonical order).
        let g = kite();
        let all: Vec<u32> = g.nodes().copied().collect();
        let found = influencers(&g, &all, &InfluencerConfig::default()).unwrap();
        assert_eq!(found, vec![5, 6]);
    }

    #[test]
    fn test_uses_induced_subgraph_only() {
        // Path 0-1-2-3-4 restricted to {0, 1}: both nodes tie, both kept
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        let found = influencers(&g, &[0, 1], &InfluencerConfig::default()).unwrap();
        assert_eq!(found, vec![0, 1]);
    }

    #[test]
    fn test_influencer_errors() {
        let g = kite();
        let config = InfluencerConfig::default();
        assert_eq!(influencers(&g, &[], &config).unwrap_err(), Error::EmptyGraph);
        assert!(matches!(
            influencers(&g, &[42], &config),
            Err(Error::InvalidNode(_))
        ));
        assert_eq!(
            influencers(&g, &[0], &config.with_top_n(0)).unwrap_err(),
            Error::InvalidCount { requested: 0 }
        );
    }

    #[test]
    fn test_community_influencers_tagged_by_community() {
        let g = Graph::from_edges([(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)])
            .unwrap();
        let partition = Louvain::new().detect(&g).unwrap();
        let config = InfluencerConfig::default();

        let per_community = community_influencers(&g, &partition, &config).unwrap();
        assert_eq!(per_community.len(), 2);
        assert_eq!(per_community[0].community, 0);
        assert_eq!(per_community[0].influencers, vec![0, 1, 2]);
        assert_eq!(per_community[1].community, 1);
        assert_eq!(per_community[1].influencers, vec![3, 4, 5]);

        let flat = all_influencers(&g, &partition, &config).unwrap();
        assert_eq!(flat, vec![0, 1, 2, 3, 4, 5]);
    }
}
