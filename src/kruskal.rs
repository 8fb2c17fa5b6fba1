use crate::disjoint_set::DisjointSet;
use crate::error::BottleneckError;
use crate::types::{Edge, Graph, NodeId, Weight};
use petgraph::visit::EdgeRef;
use radsort::sort_by_key;

/// Minimum spanning forest of a [`Graph`].
///
/// Holds its own copy of the selected edges, one tree per connected component
/// of the input graph.
#[derive(Debug, Clone)]
pub struct SpanningForest<W> {
    graph: Graph<W>,
    component_count: usize,
}

impl<W: Weight> SpanningForest<W> {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Always `node_count() - component_count()`.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Selected edges, in the order Kruskal accepted them.
    pub fn edges(&self) -> impl Iterator<Item = Edge<W>> + '_ {
        self.graph.edges()
    }

    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// `true` when the input graph was connected.
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Sum of the selected weights, `None` for a forest without edges.
    pub fn total_weight(&self) -> Option<W>
    where
        W: std::ops::Add<Output = W>,
    {
        self.graph
            .as_petgraph()
            .edge_references()
            .map(|e| *e.weight())
            .reduce(|acc, w| acc + w)
    }

    /// Node ids grouped by tree. Every group is sorted and groups are ordered
    /// by their smallest node.
    pub fn components(&self) -> Vec<Vec<NodeId>> {
        let n = self.node_count();
        let mut dsu = DisjointSet::new(n);
        for e in self.graph.edges() {
            let (a, b) = e.endpoints();
            // endpoints were validated when the graph was built
            let _ = dsu.union(a, b);
        }

        let mut group_of_root = vec![usize::MAX; n + 1];
        let mut groups: Vec<Vec<NodeId>> = Vec::with_capacity(self.component_count);
        for v in 1..=n as NodeId {
            let root = dsu.find(v).unwrap_or(v) as usize;
            if group_of_root[root] == usize::MAX {
                group_of_root[root] = groups.len();
                groups.push(Vec::new());
            }
            groups[group_of_root[root]].push(v);
        }
        groups
    }

    /// The forest as a plain graph, for renderers.
    pub fn graph(&self) -> &Graph<W> {
        &self.graph
    }
}

/// Builds a minimum spanning forest with Kruskal's algorithm.
///
/// Edges are visited by ascending weight. The sort is stable, so equal
/// weights are taken in input order and the result is reproducible.
///
/// Errors with [`BottleneckError::EmptyGraph`] if the graph has no nodes.
pub fn build<W: Weight>(graph: &Graph<W>) -> Result<SpanningForest<W>, BottleneckError> {
    let n = graph.node_count();
    if n == 0 {
        return Err(BottleneckError::EmptyGraph);
    }

    let g = graph.as_petgraph();
    let edges: Vec<(NodeId, NodeId, W)> = g
        .edge_references()
        .map(|e| (g[e.source()], g[e.target()], *e.weight()))
        .collect();
    let mut order: Vec<usize> = (0..edges.len()).collect();
    sort_by_key(&mut order, |&eid| edges[eid].2);

    let mut dsu = DisjointSet::new(n);
    let mut forest = Graph::new(n);
    for eid in order {
        if forest.edge_count() == n - 1 {
            break;
        }
        let (a, b, w) = edges[eid];
        // self-loops and cycle-closing edges are rejected here
        if dsu.union(a, b)? {
            forest.add_edge(a, b, w)?;
        }
    }

    Ok(SpanningForest {
        graph: forest,
        component_count: dsu.set_count(),
    })
}
