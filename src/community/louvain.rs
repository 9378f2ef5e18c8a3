//! Louvain algorithm for community detection.
//!
//! Fast modularity optimization through local node moves and graph aggregation.
//!
//! ## The Algorithm (Blondel et al. 2008)
//!
//! Louvain is a multi-level, greedy modularity optimization algorithm:
//!
//! 1. **Phase 1 (Local Moving)**: Start with each node in its own community.
//!    Visit nodes in a seeded random order and move each to the neighboring
//!    community with the highest positive modularity gain. Repeat passes
//!    until no node moves.
//!
//! 2. **Phase 2 (Aggregation)**: Build a meta-graph where communities become
//!    single nodes. Edge weights are sums of edges between communities.
//!    Self-loops represent internal community edges.
//!
//! 3. **Iterate**: Repeat phases 1-2 on the meta-graph until a level moves
//!    nothing or collapses everything into one community.
//!
//! Only strictly positive moves are taken and aggregation preserves
//! modularity, so the final Q is never below the all-singletons Q.
//!
//! ## Determinism
//!
//! The visitation order is the only source of randomness and comes from a
//! `StdRng` seeded with [`Louvain::with_seed`]. Same graph + same seed gives
//! the same partition; different seeds may reach different local optima.
//!
//! ## References
//!
//! Blondel et al. (2008). "Fast unfolding of communities in large networks."
//! Journal of Statistical Mechanics: Theory and Experiment, P10008.

use super::modularity::WeightedGraph;
use super::traits::CommunityDetection;
use super::Partition;
use crate::error::{Error, Result};
use crate::graph::{renumber, Graph, NodeId};
use rand::prelude::*;
use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Louvain community detection algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Louvain {
    /// Resolution parameter (gamma).
    resolution: f64,
    /// Maximum local-moving passes per level.
    max_iter: usize,
    /// Maximum levels of aggregation.
    max_levels: usize,
    /// Minimum modularity improvement to continue.
    min_modularity_gain: f64,
    /// Seed for the node visitation order.
    seed: u64,
}

impl Louvain {
    /// Create a new Louvain detector with default settings.
    pub fn new() -> Self {
        Self {
            resolution: 1.0,
            max_iter: 100,
            max_levels: 10,
            min_modularity_gain: 1e-7,
            seed: 42,
        }
    }

    /// Set resolution parameter.
    ///
    /// Higher values produce smaller communities.
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set maximum local-moving passes per level.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set maximum aggregation levels.
    pub fn with_max_levels(mut self, levels: usize) -> Self {
        self.max_levels = levels;
        self
    }

    /// Set the modularity gain below which a pass or level counts as converged.
    pub fn with_min_modularity_gain(mut self, gain: f64) -> Self {
        self.min_modularity_gain = gain;
        self
    }

    /// Set the visitation-order seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The visitation-order seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run once per seed and keep the partition with the highest modularity.
    ///
    /// Ties go to the earliest seed in `seeds`. Runs are independent and fan
    /// out across threads with the `parallel` feature.
    pub fn detect_best_of<N: NodeId>(
        &self,
        graph: &Graph<N>,
        seeds: &[u64],
    ) -> Result<Partition<N>> {
        if seeds.is_empty() {
            return Err(Error::InvalidCount { requested: 0 });
        }
        if graph.is_empty() {
            return Err(Error::EmptyGraph);
        }
        let base = WeightedGraph::from_graph(graph);
        let attempt = |seed: u64| {
            let labels = self.clone().with_seed(seed).run(&base);
            let q = base.modularity(&labels, self.resolution);
            (seed, labels, q)
        };

        #[cfg(feature = "parallel")]
        let runs: Vec<(u64, Vec<usize>, f64)> = seeds.par_iter().map(|&s| attempt(s)).collect();

        #[cfg(not(feature = "parallel"))]
        let runs: Vec<(u64, Vec<usize>, f64)> = seeds.iter().map(|&s| attempt(s)).collect();

        let best = first_best(runs.iter().map(|r| r.2));
        let (seed, labels, q) = &runs[best];
        tracing::debug!(seed, modularity = q, runs = runs.len(), "best Louvain run");
        Partition::from_labels(graph, labels)
    }

    /// Multi-level Louvain on `base`; returns one label per base node.
    fn run(&self, base: &WeightedGraph) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        // membership[i] = node of the current level that base node i belongs to
        let mut membership: Vec<usize> = (0..base.n).collect();
        if base.total_weight == 0.0 {
            return membership;
        }

        let mut level = base.clone();
        let mut prev_modularity = base.modularity(&membership, self.resolution);

        for depth in 0..self.max_levels {
            let mut order: Vec<usize> = (0..level.n).collect();
            order.shuffle(&mut rng);

            let (mut communities, moved) = self.local_moving(&level, &order);
            if !moved {
                break;
            }
            let k = renumber(&mut communities);
            for m in &mut membership {
                *m = communities[*m];
            }

            let modularity = level.modularity(&communities, self.resolution);
            tracing::debug!(
                level = depth,
                nodes = level.n,
                communities = k,
                modularity,
                "Louvain level"
            );

            if k == 1 || modularity - prev_modularity < self.min_modularity_gain {
                break;
            }
            prev_modularity = modularity;
            level = level.aggregate(&communities, k);
        }

        membership
    }

    /// Phase 1: Local moving on weighted graph, visiting nodes in `order`
    /// on every pass. Returns (communities, moved).
    fn local_moving(&self, graph: &WeightedGraph, order: &[usize]) -> (Vec<usize>, bool) {
        let m = graph.total_weight;
        let mut communities: Vec<usize> = (0..graph.n).collect();
        let mut community_degrees = graph.degrees.clone();
        let mut any_moved = false;

        for pass in 0..self.max_iter {
            let mut moves = 0usize;
            let mut pass_gain = 0.0;

            for &node in order {
                let current = communities[node];
                let ki = graph.degrees[node];

                // Temporarily remove node from its community
                community_degrees[current] -= ki;

                // Edge weight from node into each neighboring community, by id
                let mut links: BTreeMap<usize, f64> = BTreeMap::new();
                for &(neighbor, w) in &graph.adj[node] {
                    *links.entry(communities[neighbor]).or_insert(0.0) += w;
                }

                // delta_Q of inserting the isolated node into c
                let gain = |c: usize, ki_in: f64| {
                    ki_in / m - self.resolution * community_degrees[c] * ki / (2.0 * m * m)
                };

                let stay = gain(current, links.get(&current).copied().unwrap_or(0.0));
                let mut best_community = current;
                let mut best_gain = stay;
                // Ascending ids: strict > keeps the lowest id among ties
                for (&target, &ki_in) in &links {
                    if target == current {
                        continue;
                    }
                    let g = gain(target, ki_in);
                    if g > best_gain {
                        best_gain = g;
                        best_community = target;
                    }
                }

                community_degrees[best_community] += ki;
                if best_community != current {
                    communities[node] = best_community;
                    moves += 1;
                    pass_gain += best_gain - stay;
                }
            }

            tracing::trace!(pass, moves, gain = pass_gain, "Louvain local moving pass");

            if moves == 0 {
                break;
            }
            any_moved = true;
            if pass_gain < self.min_modularity_gain {
                break;
            }
        }

        (communities, any_moved)
    }
}

/// Index of the highest value; ties keep the earliest.
fn first_best(values: impl Iterator<Item = f64>) -> usize {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in values.enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map_or(0, |(i, _)| i)
}

impl Default for Louvain {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityDetection for Louvain {
    fn detect<N: NodeId>(&self, graph: &Graph<N>) -> Result<Partition<N>> {
        if graph.is_empty() {
            return Err(Error::EmptyGraph);
        }
        let labels = self.run(&WeightedGraph::from_graph(graph));
        Partition::from_labels(graph, &labels)
    }

    fn resolution(&self) -> f64 {
        self.resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::community::modularity;

    fn two_triangles() -> Graph<u32> {
        Graph::from_edges([(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)]).unwrap()
    }

    #[test]
    fn test_louvain_triangle() {
        // Simple triangle - should be one community
        let graph = Graph::from_edges([(0, 1), (1, 2), (0, 2)]).unwrap();

        let communities = Louvain::new().detect(&graph).unwrap();

        assert_eq!(communities.len(), 3);
        assert_eq!(communities.labels(), &[0, 0, 0]);
    }

    #[test]
    fn test_louvain_two_cliques() {
        // Two triangles connected by a single edge
        let graph = two_triangles();

        for seed in [0, 1, 7, 42, 1234] {
            let communities = Louvain::new().with_seed(seed).detect(&graph).unwrap();

            assert_eq!(communities.len(), 6);
            assert_eq!(communities.labels(), &[0, 0, 0, 1, 1, 1], "seed {seed}");
        }
    }

    #[test]
    fn test_louvain_empty_graph() {
        let graph: Graph<u32> = Graph::new();
        let result = Louvain::new().detect(&graph);
        assert_eq!(result.unwrap_err(), Error::EmptyGraph);
    }

    #[test]
    fn test_louvain_single_node() {
        let mut graph = Graph::new();
        graph.add_node("solo");

        let communities = Louvain::new().detect(&graph).unwrap();

        assert_eq!(communities.len(), 1);
        assert_eq!(communities.community_of(&"solo"), Some(0));
    }

    #[test]
    fn test_louvain_disconnected() {
        // Two isolated nodes
        let mut graph = Graph::new();
        graph.add_node(0);
        graph.add_node(1);

        let communities = Louvain::new().detect(&graph).unwrap();

        // Disconnected nodes should be in separate communities
        assert_eq!(communities.labels(), &[0, 1]);
    }

    #[test]
    fn test_louvain_isolated_node_beside_edges() {
        let mut graph = Graph::from_edges([(0, 1), (1, 2), (0, 2)]).unwrap();
        graph.add_node(3);

        let communities = Louvain::new().detect(&graph).unwrap();
        assert_eq!(communities.labels(), &[0, 0, 0, 1]);
    }

    #[test]
    fn test_louvain_same_seed_same_partition() {
        let graph = Graph::from_edges([
            (0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (4, 5), (3, 5),
            (5, 6), (6, 7), (7, 8), (6, 8), (8, 0),
        ])
        .unwrap();
        let a = Louvain::new().with_seed(9).detect(&graph).unwrap();
        let b = Louvain::new().with_seed(9).detect(&graph).unwrap();
        assert_eq!(a.labels(), b.labels());
    }

    #[test]
    fn test_louvain_beats_singletons() {
        let graph = two_triangles();
        let found = Louvain::new().detect(&graph).unwrap();
        let q = modularity(&graph, &found).unwrap();
        let q0 = modularity(&graph, &Partition::singletons(&graph)).unwrap();
        assert!(q >= q0, "q={q} < singletons {q0}");
    }

    #[test]
    fn test_local_move_tie_goes_to_lowest_community() {
        // Triangles {0,1,2} and {3,4,5}, node 6 bridging 0 and 3. Visiting 6
        // first, singletons 0 and 3 offer the same gain; 6 joins 0's side.
        let graph = Graph::from_edges([
            (0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (6, 0), (6, 3),
        ])
        .unwrap();
        let base = WeightedGraph::from_graph(&graph);

        let (communities, moved) = Louvain::new().local_moving(&base, &[6, 0, 1, 2, 3, 4, 5]);
        assert!(moved);
        assert_eq!(communities, vec![2, 2, 2, 5, 5, 5, 2]);
    }

    #[test]
    fn test_tied_bridge_joins_lower_community_for_any_seed() {
        // Node 3 links only to 2 and 5; both placements give the same Q
        let mut graph = Graph::new();
        for v in 0..7 {
            graph.add_node(v);
        }
        for (a, b) in [
            (0, 1), (0, 2), (0, 4), (1, 2), (2, 3), (2, 5), (3, 5), (4, 5), (4, 6), (5, 6),
        ] {
            graph.add_edge(a, b).unwrap();
        }

        let low = Partition::from_labels(&graph, &[0, 0, 0, 0, 1, 1, 1]).unwrap();
        let high = Partition::from_labels(&graph, &[0, 0, 0, 1, 1, 1, 1]).unwrap();
        let q_low = modularity(&graph, &low).unwrap();
        let q_high = modularity(&graph, &high).unwrap();
        assert!((q_low - q_high).abs() < 1e-12);

        for seed in [0, 1, 7, 42, 1234] {
            let found = Louvain::new().with_seed(seed).detect(&graph).unwrap();
            assert_eq!(found.labels(), low.labels(), "seed {seed}");
        }
    }

    #[test]
    fn test_first_best_keeps_earliest_tie() {
        assert_eq!(first_best([0.3, 0.3, 0.1].into_iter()), 0);
        assert_eq!(first_best([0.1, 0.3, 0.3].into_iter()), 1);
        assert_eq!(first_best(std::iter::empty()), 0);
    }

    #[test]
    fn test_detect_best_of_equal_modularity_keeps_first_seed() {
        let mut graph = Graph::from_edges([(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]).unwrap();
        graph.add_node(6);

        let louvain = Louvain::new();
        let first = louvain.clone().with_seed(5);
        assert_eq!(first.seed(), 5);
        let expected = first.detect(&graph).unwrap();
        let best = louvain.detect_best_of(&graph, &[5, 1]).unwrap();
        assert_eq!(best.labels(), expected.labels());
        assert_eq!(best.labels(), &[0, 0, 0, 1, 1, 1, 2]);
    }

    #[test]
    fn test_detect_best_of() {
        let graph = two_triangles();
        let best = Louvain::new().detect_best_of(&graph, &[3, 4, 5]).unwrap();
        assert_eq!(best.community_count(), 2);

        assert_eq!(
            Louvain::new().detect_best_of(&graph, &[]).unwrap_err(),
            Error::InvalidCount { requested: 0 }
        );
    }
}
