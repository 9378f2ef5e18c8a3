//! Community detection traits.

use super::Partition;
use crate::error::Result;
use crate::graph::{Graph, NodeId};

/// Trait for community detection algorithms.
pub trait CommunityDetection {
    /// Detect communities in a graph.
    ///
    /// Returns a total [`Partition`] with ids numbered `0..k` by first
    /// appearance in the graph's canonical order.
    fn detect<N: NodeId>(&self, graph: &Graph<N>) -> Result<Partition<N>>;

    /// Get the resolution parameter (if applicable).
    fn resolution(&self) -> f64 {
        1.0
    }
}

/// Detect communities with `detector` and return the members of `node`'s community.
///
/// Detection runs fresh on every call. Pass a seeded detector (or keep the
/// [`Partition`] and use [`Partition::community_with`]) so that repeated
/// lookups agree with each other.
pub fn community_with_node<N, D>(graph: &Graph<N>, node: &N, detector: &D) -> Result<Vec<N>>
where
    N: NodeId,
    D: CommunityDetection,
{
    graph.require(node)?;
    detector.detect(graph)?.community_with(node)
}
