//! Community detection and per-community influencers.
//!
//! Given a graph, find natural groupings where nodes within groups are
//! densely connected, and connections between groups are sparse.
//!
//! ## The Modularity Objective
//!
//! Louvain optimizes **modularity** Q, which compares the actual number of
//! edges within communities to the expected number in a random graph with
//! the same degree sequence:
//!
//! ```text
//! Q = (1/2m) × Σ[A_ij - γ(k_i × k_j)/(2m)] × δ(c_i, c_j)
//! ```
//!
//! Where:
//! - m = total edge weight (number of edges here)
//! - A_ij = 1 if i and j are adjacent
//! - k_i = degree of node i
//! - γ = resolution parameter
//! - δ(c_i, c_j) = 1 if i and j are in same community
//!
//! A good partition has Q > 0: more internal edges than expected by chance.
//! Raising γ above 1 favors smaller communities.
//!
//! ## Influencers
//!
//! Once nodes are grouped, [`community_influencers`] ranks each community's
//! induced subgraph by betweenness and closeness and keeps the nodes that
//! appear in both top lists.
//!
//! ## Usage
//!
//! ```rust
//! use socnet::community::{CommunityDetection, Louvain};
//! use socnet::Graph;
//!
//! // Two triangles joined by the edge 2-3
//! let graph = Graph::from_edges([(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)])
//!     .unwrap();
//!
//! let partition = Louvain::new().with_seed(7).detect(&graph).unwrap();
//! assert_eq!(partition.labels(), &[0, 0, 0, 1, 1, 1]);
//! ```
//!
//! ## References
//!
//! - Blondel et al. (2008). "Fast unfolding of communities in large networks."
//! - Newman & Girvan (2004). "Finding and evaluating community structure in networks."

mod influence;
mod louvain;
mod modularity;
mod partition;
mod traits;

pub use influence::{
    all_influencers, community_influencers, influencers, CommunityInfluencers, InfluencerConfig,
};
pub use louvain::Louvain;
pub use modularity::{modularity, modularity_with_resolution};
pub use partition::Partition;
pub use traits::{community_with_node, CommunityDetection};
