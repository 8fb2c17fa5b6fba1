use dot::{Edges, GraphWalk, Labeller, Nodes};

use crate::tree_index::IndexedTree;
use crate::types::{NodeId, Weight};

type Node = NodeId;

#[derive(Debug, Clone)]
struct Edge {
    child: Node,
    parent: Node,
    weight: String,
}

struct Tree {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    depth: Vec<usize>,
    roots: Vec<Node>,
}

impl<'a> Labeller<'a, Node, Edge> for Tree {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("T").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        dot::LabelText::label(format!("{}\ndepth:{}", n, self.depth[*n as usize]))
    }

    fn node_style(&self, _n: &Node) -> dot::Style {
        dot::Style::Filled
    }

    fn node_color(&self, n: &Node) -> Option<dot::LabelText<'a>> {
        let color = if self.roots.contains(n) { "green" } else { "lightblue" };
        Some(dot::LabelText::label(color))
    }

    fn edge_label(&self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label(e.weight.clone())
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for Tree {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.child
    }

    fn target(&self, e: &Edge) -> Node {
        e.parent
    }
}

/// Returns the indexed part of `tree` in DOT format.
///
/// Edges go from child to parent and are labelled with their weight. Roots are
/// green, other nodes show their depth.
///
/// Use returned string with `dot`, e.g. `dot -Tsvg > tree.svg`.
pub fn draw_indexed_tree<W: Weight>(tree: &IndexedTree<W>) -> String {
    let n = tree.node_count();
    let mut graph = Tree {
        nodes: Vec::new(),
        edges: Vec::new(),
        depth: vec![0; n + 1],
        roots: tree.roots().to_vec(),
    };

    for v in 1..=n as NodeId {
        let Some(depth) = tree.depth(v) else {
            continue;
        };
        graph.nodes.push(v);
        graph.depth[v as usize] = depth;
        if let (Some(parent), Some(w)) = (tree.parent(v), tree.parent_weight(v)) {
            graph.edges.push(Edge {
                child: v,
                parent,
                weight: w.to_string(),
            });
        }
    }

    let mut buffer = std::io::Cursor::new(Vec::new());
    // writing into memory cannot fail
    let _ = dot::render(&graph, &mut buffer);
    String::from_utf8_lossy(&buffer.into_inner()).into_owned()
}
