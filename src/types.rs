use crate::error::BottleneckError;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::fmt::{Debug, Display};

/// Node identifier. Valid identifiers of a graph with `N` nodes are `1..=N`.
pub type NodeId = u32;

/// Wrapper for petgraph's graph type. Node weights are the [`NodeId`]s.
pub type UnGraph<W> = petgraph::graph::UnGraph<NodeId, W>;

/// Edge weights the engine can work with.
///
/// Implemented for every primitive integer and float, i.e. everything
/// [`radsort`] can use as a sort key.
pub trait Weight: Copy + PartialOrd + Default + Debug + Display + radsort::Key {}

impl<T> Weight for T where T: Copy + PartialOrd + Default + Debug + Display + radsort::Key {}

/// Returns the heavier of two weights, preferring `a` on ties.
#[inline]
pub(crate) fn heavier<W: Weight>(a: W, b: W) -> W {
    if b > a { b } else { a }
}

/// Undirected edge with an optional weight.
///
/// Equality is symmetric in the endpoints. Weights are only compared when
/// both edges carry one.
#[derive(Clone, Copy, Debug)]
pub struct Edge<W> {
    a: NodeId,
    b: NodeId,
    weight: Option<W>,
}

impl<W> Edge<W> {
    pub fn new(a: NodeId, b: NodeId, weight: W) -> Self {
        Self {
            a,
            b,
            weight: Some(weight),
        }
    }

    pub fn unweighted(a: NodeId, b: NodeId) -> Self {
        Self { a, b, weight: None }
    }

    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    pub fn weight(&self) -> Option<&W> {
        self.weight.as_ref()
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

impl<W: PartialEq> PartialEq for Edge<W> {
    fn eq(&self, other: &Self) -> bool {
        let same_nodes = (self.a == other.a && self.b == other.b)
            || (self.a == other.b && self.b == other.a);
        let same_weight = match (&self.weight, &other.weight) {
            (Some(x), Some(y)) => x == y,
            _ => true,
        };
        same_nodes && same_weight
    }
}

impl<W: Display> Display for Edge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.weight {
            Some(w) => write!(f, "{} -- {} [{}]", self.a, self.b, w),
            None => write!(f, "{} -- {}", self.a, self.b),
        }
    }
}

/// Weighted undirected graph on nodes `1..=N`.
///
/// Edges keep their insertion order. Self-loops and parallel edges are
/// accepted; they simply never make it into a spanning forest.
#[derive(Clone, Debug)]
pub struct Graph<W> {
    inner: UnGraph<W>,
}

impl<W: Weight> Graph<W> {
    /// Creates a graph with nodes `1..=node_count` and no edges.
    pub fn new(node_count: usize) -> Self {
        let mut inner = UnGraph::with_capacity(node_count, 0);
        for id in 1..=node_count {
            inner.add_node(id as NodeId);
        }
        Self { inner }
    }

    /// Builds a graph from `(a, b, weight)` triples.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self, BottleneckError>
    where
        I: IntoIterator<Item = (NodeId, NodeId, W)>,
    {
        let mut graph = Self::new(node_count);
        for (a, b, w) in edges {
            graph.add_edge(a, b, w)?;
        }
        Ok(graph)
    }

    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: W) -> Result<(), BottleneckError> {
        let ia = self.node_index(a)?;
        let ib = self.node_index(b)?;
        self.inner.add_edge(ia, ib, weight);
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Node identifiers, `1..=N`.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.inner.node_weights().copied()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<W>> + '_ {
        self.inner.edge_references().map(|e| {
            Edge::new(
                self.inner[e.source()],
                self.inner[e.target()],
                *e.weight(),
            )
        })
    }

    /// Neighbours of `node` together with the weight of the connecting edge.
    pub fn neighbors(
        &self,
        node: NodeId,
    ) -> Result<impl Iterator<Item = (NodeId, W)> + '_, BottleneckError> {
        let idx = self.node_index(node)?;
        Ok(self
            .inner
            .edges(idx)
            .map(move |e| {
                let other = if e.source() == idx { e.target() } else { e.source() };
                (self.inner[other], *e.weight())
            }))
    }

    /// The underlying petgraph graph, for renderers and other collaborators.
    pub fn as_petgraph(&self) -> &UnGraph<W> {
        &self.inner
    }

    fn node_index(&self, node: NodeId) -> Result<NodeIndex, BottleneckError> {
        let n = self.inner.node_count();
        if node == 0 || node as usize > n {
            return Err(BottleneckError::InvalidNode {
                node,
                node_count: n,
            });
        }
        Ok(NodeIndex::new(node as usize - 1))
    }
}
