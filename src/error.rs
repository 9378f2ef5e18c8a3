/// Result alias for `socnet`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the ranking and community primitives.
///
/// Every error signals a violated input precondition; none of them are
/// transient, so retrying the same call on the same graph fails the same way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The graph (or requested node set) has no nodes.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// A referenced node is not part of the graph.
    ///
    /// Carries the `Debug` rendering of the offending node.
    #[error("node {0} is not in the graph")]
    InvalidNode(String),

    /// A ranking was asked for zero entries.
    #[error("invalid count {requested}: must be at least 1")]
    InvalidCount {
        /// Requested count.
        requested: usize,
    },

    /// Graph is disconnected where a single component was required.
    #[error("graph has {components} connected components, expected 1")]
    DisconnectedGraph {
        /// Number of connected components found.
        components: usize,
    },

    /// Iteration did not reach the tolerance within the iteration cap.
    #[error("did not converge after {iterations} iterations")]
    ConvergenceFailure {
        /// Number of iterations attempted.
        iterations: usize,
    },

    /// A per-node vector did not match the graph's node count.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Found length.
        found: usize,
    },

    /// An edge joining a node to itself was supplied.
    #[error("self-loop on node {0} is not allowed")]
    SelfLoop(String),
}

impl Error {
    pub(crate) fn invalid_node<N: std::fmt::Debug>(node: &N) -> Self {
        Error::InvalidNode(format!("{node:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::EmptyGraph.to_string(), "graph has no nodes");
        assert_eq!(
            Error::invalid_node(&"alice").to_string(),
            "node \"alice\" is not in the graph"
        );
        assert_eq!(
            Error::DisconnectedGraph { components: 2 }.to_string(),
            "graph has 2 connected components, expected 1"
        );
        assert_eq!(
            Error::ConvergenceFailure { iterations: 5 }.to_string(),
            "did not converge after 5 iterations"
        );
    }
}
