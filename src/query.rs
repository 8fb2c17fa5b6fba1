use crate::error::BottleneckError;
use crate::kruskal::{SpanningForest, build};
use crate::lifting::{LiftingTable, prepare};
use crate::settings::EngineSettings;
use crate::tree_index::{IndexedTree, index, index_forest};
use crate::types::{Graph, NodeId, Weight};
use hashbrown::HashMap;

/// What a query returns besides the bottleneck weight.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum QueryMode {
    /// Heaviest edge and LCA only.
    Bottleneck,
    /// Also the node sequence of the path.
    Path,
}

impl std::fmt::Display for QueryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryMode::Bottleneck => write!(f, "Bottleneck"),
            QueryMode::Path => write!(f, "Path"),
        }
    }
}

/// Answer to a single `(u, v)` query.
#[derive(Clone, Debug, PartialEq)]
pub struct Answer<W> {
    pub lca: NodeId,
    /// Heaviest edge on the path, `None` when `u == v`.
    pub max_weight: Option<W>,
    /// Nodes from `u` to `v`, both included. Only filled in [`QueryMode::Path`].
    pub path: Option<Vec<NodeId>>,
}

impl<W: Weight> std::fmt::Display for Answer<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max_weight {
            Some(w) => write!(f, "{}", w)?,
            None => write!(f, "-")?,
        }
        if let Some(path) = &self.path {
            let nodes: Vec<String> = path.iter().map(|v| v.to_string()).collect();
            write!(f, " [{}]", nodes.join(" "))?;
        }
        Ok(())
    }
}

/// Walks parent links from `u` and from `v` up to `lca` and glues the halves.
fn reconstruct_path<W: Weight>(
    tree: &IndexedTree<W>,
    u: NodeId,
    v: NodeId,
    lca: NodeId,
) -> Vec<NodeId> {
    let climb = |from: NodeId| {
        let mut nodes = Vec::new();
        let mut x = from;
        while x != lca {
            nodes.push(x);
            // indexed nodes always have a parent, roots point at themselves
            x = tree.parent(x).unwrap_or(lca);
        }
        nodes
    };

    let mut path = climb(u);
    path.push(lca);
    let mut back = climb(v);
    back.reverse();
    path.extend(back);
    path
}

/// Answers one query against a prepared table.
pub fn query<W: Weight>(
    table: &LiftingTable<W>,
    u: NodeId,
    v: NodeId,
    mode: QueryMode,
) -> Result<Answer<W>, BottleneckError> {
    let (lca, max_weight) = table.lca_and_max(u, v)?;
    let path = match mode {
        QueryMode::Bottleneck => None,
        QueryMode::Path => Some(reconstruct_path(table.tree(), u, v, lca)),
    };
    Ok(Answer {
        lca,
        max_weight,
        path,
    })
}

/// Answers every pair independently, in order. A failing pair only fails its
/// own entry.
pub fn query_batch<W: Weight>(
    table: &LiftingTable<W>,
    pairs: &[(NodeId, NodeId)],
    mode: QueryMode,
) -> Vec<Result<Answer<W>, BottleneckError>> {
    pairs.iter().map(|&(u, v)| query(table, u, v, mode)).collect()
}

/// Like [`query_batch`] in bottleneck mode, but answers repeated pairs (in
/// either order) from a cache.
fn query_batch_cached<W: Weight>(
    table: &LiftingTable<W>,
    pairs: &[(NodeId, NodeId)],
) -> Vec<Result<Answer<W>, BottleneckError>> {
    let mut cache: HashMap<(NodeId, NodeId), (NodeId, Option<W>)> = HashMap::new();
    pairs
        .iter()
        .map(|&(u, v)| {
            let key = (u.min(v), u.max(v));
            let (lca, max_weight) = match cache.get(&key) {
                Some(&hit) => hit,
                None => {
                    let fresh = table.lca_and_max(u, v)?;
                    cache.insert(key, fresh);
                    fresh
                }
            };
            Ok(Answer {
                lca,
                max_weight,
                path: None,
            })
        })
        .collect()
}

/// Owns every stage of the pipeline for one graph.
///
/// Stages run explicitly, in order: [`build`](QueryEngine::build),
/// [`index`](QueryEngine::index) (or [`index_forest`](QueryEngine::index_forest)),
/// [`prepare`](QueryEngine::prepare). Re-running a stage drops the stages after
/// it. Using a stage whose inputs are missing fails with
/// [`BottleneckError::UnindexedTree`]. A failing stage leaves what was built
/// before untouched.
///
/// ```
/// use bottleneck_paths::{EngineSettings, Graph, QueryEngine};
///
/// let graph = Graph::from_edges(4, [(1, 2, 5), (2, 3, 2), (3, 4, 9), (1, 3, 1)]).unwrap();
/// let engine = QueryEngine::run(graph, EngineSettings::default()).unwrap();
/// assert_eq!(engine.query(2, 4).unwrap().max_weight, Some(9));
/// ```
#[derive(Debug, Clone)]
pub struct QueryEngine<W> {
    graph: Graph<W>,
    settings: EngineSettings,
    forest: Option<SpanningForest<W>>,
    tree: Option<IndexedTree<W>>,
    table: Option<LiftingTable<W>>,
}

impl<W: Weight> QueryEngine<W> {
    pub fn new(graph: Graph<W>, settings: EngineSettings) -> Self {
        Self {
            graph,
            settings,
            forest: None,
            tree: None,
            table: None,
        }
    }

    /// Builds, indexes (following [`EngineSettings::root`]) and prepares in one go.
    pub fn run(graph: Graph<W>, settings: EngineSettings) -> Result<Self, BottleneckError> {
        let mut engine = Self::new(graph, settings);
        engine.build()?;
        match engine.settings.root {
            Some(root) => engine.index(root)?,
            None => engine.index_forest()?,
        };
        engine.prepare()?;
        Ok(engine)
    }

    pub fn build(&mut self) -> Result<&SpanningForest<W>, BottleneckError> {
        let forest = build(&self.graph)?;
        self.tree = None;
        self.table = None;
        Ok(&*self.forest.insert(forest))
    }

    pub fn index(&mut self, root: NodeId) -> Result<&IndexedTree<W>, BottleneckError> {
        let forest = self.forest.as_ref().ok_or(BottleneckError::UnindexedTree)?;
        let tree = index(forest, root)?;
        self.table = None;
        Ok(&*self.tree.insert(tree))
    }

    pub fn index_forest(&mut self) -> Result<&IndexedTree<W>, BottleneckError> {
        let forest = self.forest.as_ref().ok_or(BottleneckError::UnindexedTree)?;
        let tree = index_forest(forest)?;
        self.table = None;
        Ok(&*self.tree.insert(tree))
    }

    pub fn prepare(&mut self) -> Result<&LiftingTable<W>, BottleneckError> {
        let tree = self.tree.as_ref().ok_or(BottleneckError::UnindexedTree)?;
        let table = prepare(tree);
        Ok(&*self.table.insert(table))
    }

    /// Answers `(u, v)` in the configured [`QueryMode`].
    pub fn query(&self, u: NodeId, v: NodeId) -> Result<Answer<W>, BottleneckError> {
        let table = self.table.as_ref().ok_or(BottleneckError::UnindexedTree)?;
        query(table, u, v, self.settings.mode)
    }

    /// Answers all pairs in the configured [`QueryMode`].
    ///
    /// Before [`prepare`](QueryEngine::prepare) every entry is
    /// [`BottleneckError::UnindexedTree`].
    pub fn query_batch(
        &self,
        pairs: &[(NodeId, NodeId)],
    ) -> Vec<Result<Answer<W>, BottleneckError>> {
        let Some(table) = self.table.as_ref() else {
            return vec![Err(BottleneckError::UnindexedTree); pairs.len()];
        };
        if self.settings.cache_repeated && self.settings.mode == QueryMode::Bottleneck {
            query_batch_cached(table, pairs)
        } else {
            query_batch(table, pairs, self.settings.mode)
        }
    }

    pub fn graph(&self) -> &Graph<W> {
        &self.graph
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn forest(&self) -> Option<&SpanningForest<W>> {
        self.forest.as_ref()
    }

    pub fn tree(&self) -> Option<&IndexedTree<W>> {
        self.tree.as_ref()
    }

    pub fn table(&self) -> Option<&LiftingTable<W>> {
        self.table.as_ref()
    }
}
