use crate::error::BottleneckError;
use crate::kruskal::SpanningForest;
use crate::types::{NodeId, Weight};
use fixedbitset::FixedBitSet;
use petgraph::visit::{EdgeRef, NodeIndexable};
use std::collections::VecDeque;

/// A spanning forest rooted by BFS.
///
/// For every reached node it records depth, tree parent and the weight of the
/// edge to that parent. Nodes outside the indexed components stay unindexed and
/// every view returns `None` for them.
#[derive(Debug, Clone)]
pub struct IndexedTree<W> {
    // usize::MAX marks unindexed nodes, index 0 is unused
    depth: Vec<usize>,
    parent: Vec<usize>,
    parent_weight: Vec<W>,
    root: Vec<usize>,
    roots: Vec<NodeId>,
    max_depth: usize,
    indexed: usize,
}

impl<W: Weight> IndexedTree<W> {
    fn new(n: usize) -> Self {
        Self {
            depth: vec![usize::MAX; n + 1],
            parent: vec![usize::MAX; n + 1],
            parent_weight: vec![W::default(); n + 1],
            root: vec![usize::MAX; n + 1],
            roots: Vec::new(),
            max_depth: 0,
            indexed: 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.depth.len() - 1
    }

    /// Number of nodes reached by the indexing.
    pub fn indexed_count(&self) -> usize {
        self.indexed
    }

    pub fn is_indexed(&self, v: NodeId) -> bool {
        self.slot(v).is_some()
    }

    /// Roots in the order they were indexed.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Root of the tree containing `v`.
    pub fn root_of(&self, v: NodeId) -> Option<NodeId> {
        self.slot(v).map(|i| self.root[i] as NodeId)
    }

    /// Distance from the root, the root itself has depth 0.
    pub fn depth(&self, v: NodeId) -> Option<usize> {
        self.slot(v).map(|i| self.depth[i])
    }

    /// Tree parent. A root is its own parent.
    pub fn parent(&self, v: NodeId) -> Option<NodeId> {
        self.slot(v).map(|i| self.parent[i] as NodeId)
    }

    /// Weight of the edge to the parent, `None` for roots.
    pub fn parent_weight(&self, v: NodeId) -> Option<W> {
        self.slot(v)
            .filter(|&i| self.parent[i] != i)
            .map(|i| self.parent_weight[i])
    }

    /// Largest depth over all indexed nodes.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub(crate) fn check_node(&self, v: NodeId) -> Result<(), BottleneckError> {
        let n = self.node_count();
        if v == 0 || v as usize > n {
            return Err(BottleneckError::InvalidNode {
                node: v,
                node_count: n,
            });
        }
        Ok(())
    }

    // raw arrays for the lifting table
    pub(crate) fn raw_parent(&self) -> &[usize] {
        &self.parent
    }

    pub(crate) fn raw_parent_weight(&self) -> &[W] {
        &self.parent_weight
    }

    pub(crate) fn raw_depth(&self) -> &[usize] {
        &self.depth
    }

    fn slot(&self, v: NodeId) -> Option<usize> {
        let i = v as usize;
        (i < self.depth.len() && self.depth[i] != usize::MAX).then_some(i)
    }

    /// BFS from `root`. Nodes are marked when they are enqueued.
    fn bfs(&mut self, forest: &SpanningForest<W>, root: usize, visited: &mut FixedBitSet) {
        let g = forest.graph().as_petgraph();
        let mut queue = VecDeque::new();

        self.depth[root] = 0;
        self.parent[root] = root;
        self.root[root] = root;
        self.roots.push(root as NodeId);
        self.indexed += 1;
        visited.insert(root);
        queue.push_back(root);

        while let Some(u) = queue.pop_front() {
            for edge in g.edges(g.from_index(u - 1)) {
                let other = if g.to_index(edge.source()) == u - 1 {
                    edge.target()
                } else {
                    edge.source()
                };
                let v = g.to_index(other) + 1;
                if visited.contains(v) {
                    continue;
                }
                visited.insert(v);
                self.depth[v] = self.depth[u] + 1;
                self.parent[v] = u;
                self.parent_weight[v] = *edge.weight();
                self.root[v] = root;
                self.max_depth = self.max_depth.max(self.depth[v]);
                self.indexed += 1;
                queue.push_back(v);
            }
        }
    }
}

fn check_forest<W: Weight>(forest: &SpanningForest<W>) -> Result<(), BottleneckError> {
    if forest.node_count() == 0 {
        return Err(BottleneckError::EmptyGraph);
    }
    Ok(())
}

/// Roots the tree of `forest` containing `root` and indexes it.
///
/// Only `root`'s component is labelled. Use [`index_forest`] to label all of
/// them.
pub fn index<W: Weight>(
    forest: &SpanningForest<W>,
    root: NodeId,
) -> Result<IndexedTree<W>, BottleneckError> {
    check_forest(forest)?;
    let n = forest.node_count();
    let mut tree = IndexedTree::new(n);
    tree.check_node(root)?;

    let mut visited = FixedBitSet::with_capacity(n + 1);
    tree.bfs(forest, root as usize, &mut visited);
    Ok(tree)
}

/// Indexes every tree of `forest`, each rooted at its smallest node.
pub fn index_forest<W: Weight>(
    forest: &SpanningForest<W>,
) -> Result<IndexedTree<W>, BottleneckError> {
    check_forest(forest)?;
    let n = forest.node_count();
    let mut tree = IndexedTree::new(n);

    let mut visited = FixedBitSet::with_capacity(n + 1);
    for v in 1..=n {
        if !visited.contains(v) {
            tree.bfs(forest, v, &mut visited);
        }
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kruskal::build;
    use crate::testing::random_graphs::random_forest_graph;
    use crate::types::Graph;

    fn scenario_forest() -> SpanningForest<i64> {
        let g = Graph::from_edges(4, [(1, 2, 5), (2, 3, 2), (3, 4, 9), (1, 3, 1)]).unwrap();
        build(&g).unwrap()
    }

    fn two_triangles() -> SpanningForest<i64> {
        let g = Graph::from_edges(
            6,
            [(1, 2, 1), (2, 3, 2), (3, 1, 3), (4, 5, 4), (5, 6, 5), (6, 4, 6)],
        )
        .unwrap();
        build(&g).unwrap()
    }

    #[test]
    fn test_scenario_depths() {
        let tree = index(&scenario_forest(), 1).unwrap();
        assert_eq!(tree.depth(1), Some(0));
        assert_eq!(tree.depth(3), Some(1));
        assert_eq!(tree.depth(2), Some(2));
        assert_eq!(tree.depth(4), Some(2));
        assert_eq!(tree.max_depth(), 2);
        assert_eq!(tree.indexed_count(), 4);
        assert_eq!(tree.roots(), &[1]);
    }

    #[test]
    fn test_scenario_parents() {
        let tree = index(&scenario_forest(), 1).unwrap();
        assert_eq!(tree.parent(1), Some(1));
        assert_eq!(tree.parent_weight(1), None);
        assert_eq!(tree.parent(3), Some(1));
        assert_eq!(tree.parent_weight(3), Some(1));
        assert_eq!(tree.parent(2), Some(3));
        assert_eq!(tree.parent_weight(2), Some(2));
        assert_eq!(tree.parent(4), Some(3));
        assert_eq!(tree.parent_weight(4), Some(9));
    }

    #[test]
    fn test_other_root() {
        let tree = index(&scenario_forest(), 4).unwrap();
        assert_eq!(tree.depth(4), Some(0));
        assert_eq!(tree.depth(3), Some(1));
        assert_eq!(tree.depth(1), Some(2));
        assert_eq!(tree.depth(2), Some(2));
        assert_eq!(tree.root_of(2), Some(4));
    }

    #[test]
    fn test_invalid_root() {
        let forest = scenario_forest();
        assert_eq!(
            index(&forest, 5).unwrap_err(),
            BottleneckError::InvalidNode {
                node: 5,
                node_count: 4
            }
        );
        assert!(index(&forest, 0).is_err());
    }

    #[test]
    fn test_single_root_leaves_other_component() {
        let tree = index(&two_triangles(), 5).unwrap();
        for v in 4..=6 {
            assert!(tree.is_indexed(v));
            assert_eq!(tree.root_of(v), Some(5));
        }
        for v in 1..=3 {
            assert!(!tree.is_indexed(v));
            assert_eq!(tree.depth(v), None);
            assert_eq!(tree.parent(v), None);
        }
        assert_eq!(tree.indexed_count(), 3);
        assert_eq!(tree.depth(42), None);
    }

    #[test]
    fn test_index_forest() {
        let tree = index_forest(&two_triangles()).unwrap();
        assert_eq!(tree.roots(), &[1, 4]);
        assert_eq!(tree.indexed_count(), 6);
        assert_eq!(tree.root_of(3), Some(1));
        assert_eq!(tree.root_of(6), Some(4));
        assert_eq!(tree.parent_weight(4), None);
    }

    #[test]
    fn test_parent_is_one_level_up() {
        for seed in 0..30 {
            let g = random_forest_graph(40, 60, 1 + seed % 3, seed);
            let tree = index_forest(&build(&g).unwrap()).unwrap();
            assert_eq!(tree.indexed_count(), 40);
            for v in 1..=40 {
                let p = tree.parent(v).unwrap();
                if p == v {
                    assert_eq!(tree.depth(v), Some(0));
                    assert!(tree.roots().contains(&v));
                } else {
                    assert_eq!(tree.depth(v).unwrap(), tree.depth(p).unwrap() + 1);
                    assert_eq!(tree.root_of(v), tree.root_of(p));
                    assert!(tree.parent_weight(v).is_some());
                }
            }
        }
    }
}
