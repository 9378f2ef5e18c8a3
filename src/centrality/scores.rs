//! Score maps and the Top-N selector shared by every ranking measure.

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use std::collections::HashMap;

/// Node → score mapping with one entry per graph node.
///
/// Entries keep the source graph's canonical order, which is what ties are
/// broken against when ranking.
#[derive(Debug, Clone)]
pub struct ScoreMap<N> {
    entries: Vec<(N, f64)>,
    index: HashMap<N, usize>,
}

impl<N: NodeId> ScoreMap<N> {
    /// Pair `scores` (indexed by `NodeIndex::index()`) with the graph's nodes.
    pub(crate) fn from_graph(graph: &Graph<N>, scores: Vec<f64>) -> Self {
        debug_assert_eq!(scores.len(), graph.node_count());
        graph.nodes().cloned().zip(scores).collect()
    }

    /// Score of `node`, if present.
    pub fn get(&self, node: &N) -> Option<f64> {
        self.index.get(node).map(|&i| self.entries[i].1)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(node, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, f64)> + '_ {
        self.entries.iter().map(|(n, s)| (n, *s))
    }

    /// Nodes in canonical order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.entries.iter().map(|(n, _)| n)
    }

    /// Scores in canonical order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, s)| *s)
    }

    /// The `n` highest-scoring nodes. See [`top_n`].
    pub fn top_n(&self, n: usize) -> Result<Vec<N>> {
        top_n(self, n)
    }

    /// Every entry ordered by descending score, ties in canonical order.
    pub fn ranking(&self) -> Vec<(N, f64)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// The `n` lowest-scoring nodes, lowest first: the tail of
    /// [`ScoreMap::ranking`] read backwards.
    pub fn bottom(&self, n: usize) -> Result<Vec<N>> {
        if n == 0 {
            return Err(Error::InvalidCount { requested: n });
        }
        Ok(self
            .ranking()
            .into_iter()
            .rev()
            .take(n)
            .map(|(node, _)| node)
            .collect())
    }

    /// The node ranked last by [`ScoreMap::ranking`].
    pub fn lowest(&self) -> Option<&N> {
        // Last of a stable descending sort: the minimum, latest in canonical order.
        let mut lowest: Option<&(N, f64)> = None;
        for entry in &self.entries {
            match lowest {
                Some(cur) if entry.1 > cur.1 => {}
                _ => lowest = Some(entry),
            }
        }
        lowest.map(|(n, _)| n)
    }

    /// Consume into a plain hash map.
    pub fn into_hash_map(self) -> HashMap<N, f64> {
        self.entries.into_iter().collect()
    }
}

impl<N: NodeId> FromIterator<(N, f64)> for ScoreMap<N> {
    fn from_iter<I: IntoIterator<Item = (N, f64)>>(iter: I) -> Self {
        let mut entries: Vec<(N, f64)> = Vec::new();
        let mut index = HashMap::new();
        for (node, score) in iter {
            match index.get(&node) {
                Some(&i) => entries[i] = (node, score),
                None => {
                    index.insert(node.clone(), entries.len());
                    entries.push((node, score));
                }
            }
        }
        Self { entries, index }
    }
}

/// Rank a score map and keep the first `min(n, len)` nodes.
///
/// Scores are strictly non-increasing along the result; equal scores keep
/// canonical order (stable sort). Fails with [`Error::InvalidCount`] if `n == 0`.
pub fn top_n<N: NodeId>(scores: &ScoreMap<N>, n: usize) -> Result<Vec<N>> {
    if n == 0 {
        return Err(Error::InvalidCount { requested: n });
    }
    let mut ranked: Vec<&(N, f64)> = scores.entries.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    Ok(ranked
        .into_iter()
        .take(n)
        .map(|(node, _)| node.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScoreMap<&'static str> {
        [("a", 1.0), ("b", 3.0), ("c", 1.0), ("d", 2.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_top_n_orders_by_score_then_canonical() {
        let scores = sample();
        assert_eq!(top_n(&scores, 4).unwrap(), vec!["b", "d", "a", "c"]);
        assert_eq!(top_n(&scores, 2).unwrap(), vec!["b", "d"]);
    }

    #[test]
    fn test_top_n_clamps_to_len() {
        let scores = sample();
        assert_eq!(top_n(&scores, 10).unwrap().len(), 4);
    }

    #[test]
    fn test_top_n_zero_is_invalid() {
        assert_eq!(
            top_n(&sample(), 0),
            Err(Error::InvalidCount { requested: 0 })
        );
    }

    #[test]
    fn test_lowest_matches_last_of_ranking() {
        let scores = sample();
        assert_eq!(scores.lowest(), Some(&"c"));
        assert_eq!(scores.ranking().last().map(|(n, _)| n), Some(&"c"));
        assert_eq!(scores.bottom(3).unwrap(), vec!["c", "a", "d"]);
        assert!(scores.bottom(0).is_err());
    }

    #[test]
    fn test_get_and_iter() {
        let scores = sample();
        assert_eq!(scores.get(&"d"), Some(2.0));
        assert_eq!(scores.get(&"z"), None);
        let nodes: Vec<_> = scores.nodes().copied().collect();
        assert_eq!(nodes, vec!["a", "b", "c", "d"]);

        let map = scores.into_hash_map();
        assert_eq!(map.len(), 4);
        assert_eq!(map["b"], 3.0);
    }
}
