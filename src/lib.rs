//! # socnet
//!
//! Social network analysis on simple undirected graphs: rank nodes by degree
//! and by betweenness, closeness and eigenvector centrality; partition the
//! graph into communities with seeded Louvain; pick each community's
//! influencers.
//!
//! Every engine reads an immutable [`Graph`] and returns a fresh value.
//! Ties are always broken by the graph's canonical (insertion) node order,
//! and the only randomness (Louvain's visitation order) comes from an
//! explicit seed, so results are reproducible.
//!
//! ```rust
//! use socnet::community::{community_influencers, CommunityDetection, InfluencerConfig, Louvain};
//! use socnet::Graph;
//!
//! let graph = Graph::from_edges([(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)])
//!     .unwrap();
//!
//! let partition = Louvain::new().with_seed(1).detect(&graph).unwrap();
//! let found = community_influencers(&graph, &partition, &InfluencerConfig::default()).unwrap();
//! assert_eq!(found.len(), partition.community_count());
//! ```
//!
//! The `parallel` feature fans per-source traversals and multi-seed Louvain
//! runs out over `rayon`.

pub mod centrality;
pub mod community;
/// Error types used across `socnet`.
pub mod error;
pub mod graph;
pub mod summary;

pub use centrality::{
    betweenness_centrality, closeness_centrality, degree_centrality, eigenvector_centrality,
    max_degree_node, min_degree_node, top_n, Centrality, ScoreMap,
};
pub use community::{community_with_node, CommunityDetection, Louvain, Partition};
pub use error::{Error, Result};
pub use graph::{Graph, NodeId};
pub use summary::{summarize, GraphSummary};
