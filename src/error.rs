use crate::types::NodeId;
use thiserror::Error;

/// Error type returned by every stage of the pipeline, from
/// [`build`](crate::kruskal::build) down to [`query`](crate::query::query).
///
/// A failure only aborts the operation that raised it. Structures built
/// earlier stay valid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BottleneckError {
    /// Identifier outside `[1, N]`.
    #[error("node {node} is not in the graph (valid nodes are 1..={node_count})")]
    InvalidNode { node: NodeId, node_count: usize },
    /// The two nodes do not belong to the same indexed tree.
    #[error("nodes {u} and {v} are not in the same indexed tree")]
    DisjointComponents { u: NodeId, v: NodeId },
    #[error("graph has no nodes")]
    EmptyGraph,
    /// A stage was used before the stages it depends on were completed.
    #[error("tree has not been built, indexed and prepared yet")]
    UnindexedTree,
}
