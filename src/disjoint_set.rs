use crate::error::BottleneckError;
use crate::types::NodeId;

/// Union-find over nodes `1..=N`.
///
/// Flat index arrays, path compression in `find`, union by size.
/// Only used to track connectivity while a spanning forest is built.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    // index 0 is unused to keep node ids as indices
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..=n).collect(),
            size: vec![1; n + 1],
            sets: n,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of disjoint sets left.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the representative of `x`'s set.
    ///
    /// Every node visited on the way is relinked directly to the root.
    pub fn find(&mut self, x: NodeId) -> Result<NodeId, BottleneckError> {
        let x = self.check(x)?;
        Ok(self.find_root(x) as NodeId)
    }

    /// Merges the sets of `x` and `y`.
    ///
    /// The root of `x` goes under the root of `y`, unless `x`'s set is strictly
    /// larger. Returns `false` if both were already in the same set.
    pub fn union(&mut self, x: NodeId, y: NodeId) -> Result<bool, BottleneckError> {
        let x = self.check(x)?;
        let y = self.check(y)?;
        let mut child = self.find_root(x);
        let mut root = self.find_root(y);
        if child == root {
            return Ok(false);
        }
        if self.size[child] > self.size[root] {
            std::mem::swap(&mut child, &mut root);
        }
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.sets -= 1;
        Ok(true)
    }

    pub fn connected(&mut self, x: NodeId, y: NodeId) -> Result<bool, BottleneckError> {
        Ok(self.find(x)? == self.find(y)?)
    }

    fn find_root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    fn check(&self, x: NodeId) -> Result<usize, BottleneckError> {
        let n = self.len();
        let idx = x as usize;
        if idx == 0 || idx > n {
            return Err(BottleneckError::InvalidNode {
                node: x,
                node_count: n,
            });
        }
        Ok(idx)
    }
}
