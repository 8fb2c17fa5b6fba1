//! # bottleneck_paths
//!
//! Minimum bottleneck path queries: for two nodes of a weighted undirected
//! graph, the heaviest edge on the path between them in a minimum spanning
//! forest.
//!
//! The pipeline runs strictly downward:
//! [`kruskal::build`] → [`tree_index::index`] → [`lifting::prepare`] → [`query::query`],
//! or all at once through [`QueryEngine`].
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).

pub mod debugging;
pub mod disjoint_set;
pub mod error;
pub mod input;
pub mod kruskal;
pub mod lifting;
pub mod query;
pub mod settings;
pub mod tree_index;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use error::BottleneckError;
pub use input::{from_file, from_str};
pub use query::{Answer, QueryEngine, QueryMode};
pub use settings::{EngineSettings, EngineSettingsBuilder};
pub use types::{Edge, Graph, NodeId, Weight};
