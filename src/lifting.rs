use crate::error::BottleneckError;
use crate::tree_index::IndexedTree;
use crate::types::{NodeId, Weight, heavier};

/// Binary-lifting table over an [`IndexedTree`].
///
/// `up[k][v]` is the ancestor of `v` at distance `2^k` and `max[k][v]` the
/// heaviest edge on that climb. Entries that would climb past a root point at
/// the root and are never read. The table is read-only once built, so a
/// shared reference can answer queries from several threads.
#[derive(Debug, Clone)]
pub struct LiftingTable<W> {
    tree: IndexedTree<W>,
    up: Vec<Vec<usize>>,
    max: Vec<Vec<W>>,
}

/// Folds `w` into the running maximum of a climb.
#[inline]
fn fold<W: Weight>(acc: Option<W>, w: W) -> Option<W> {
    Some(match acc {
        Some(a) => heavier(a, w),
        None => w,
    })
}

/// Preprocesses `tree` for logarithmic LCA and bottleneck queries.
///
/// Builds `floor(log2(max_depth)) + 1` levels with the doubling recurrence
/// `up[k][v] = up[k-1][up[k-1][v]]`.
pub fn prepare<W: Weight>(tree: &IndexedTree<W>) -> LiftingTable<W> {
    let levels = match tree.max_depth() {
        0 => 1,
        d => d.ilog2() as usize + 1,
    };

    let parent = tree.raw_parent();
    let weight = tree.raw_parent_weight();
    // unindexed nodes (and the unused slot 0) point at themselves
    let base: Vec<usize> = parent
        .iter()
        .enumerate()
        .map(|(v, &p)| if p == usize::MAX { v } else { p })
        .collect();

    let mut up = Vec::with_capacity(levels);
    let mut max = Vec::with_capacity(levels);
    up.push(base);
    max.push(weight.to_vec());

    for k in 1..levels {
        let (prev_up, prev_max) = (&up[k - 1], &max[k - 1]);
        let next_up: Vec<usize> = prev_up.iter().map(|&mid| prev_up[mid]).collect();
        let next_max: Vec<W> = prev_up
            .iter()
            .zip(prev_max)
            .map(|(&mid, &w)| heavier(w, prev_max[mid]))
            .collect();
        up.push(next_up);
        max.push(next_max);
    }

    LiftingTable {
        tree: tree.clone(),
        up,
        max,
    }
}

impl<W: Weight> LiftingTable<W> {
    /// Number of levels, i.e. powers of two, stored per node.
    pub fn levels(&self) -> usize {
        self.up.len()
    }

    /// The indexed tree this table was built from.
    pub fn tree(&self) -> &IndexedTree<W> {
        &self.tree
    }

    /// Both nodes must be indexed and belong to the same tree.
    fn check_pair(&self, u: NodeId, v: NodeId) -> Result<(), BottleneckError> {
        self.tree.check_node(u)?;
        self.tree.check_node(v)?;
        match (self.tree.root_of(u), self.tree.root_of(v)) {
            (Some(ru), Some(rv)) if ru == rv => Ok(()),
            _ => Err(BottleneckError::DisjointComponents { u, v }),
        }
    }

    /// Lowest common ancestor of `u` and `v` together with the heaviest edge on
    /// the tree path between them.
    ///
    /// The weight is `None` when `u == v`, since no edge is traversed.
    pub fn lca_and_max(
        &self,
        u: NodeId,
        v: NodeId,
    ) -> Result<(NodeId, Option<W>), BottleneckError> {
        self.check_pair(u, v)?;
        if u == v {
            return Ok((u, None));
        }

        let depth = self.tree.raw_depth();
        let (mut a, mut b) = (u as usize, v as usize);
        if depth[a] > depth[b] {
            std::mem::swap(&mut a, &mut b);
        }

        let mut best = None;
        let diff = depth[b] - depth[a];
        for k in (0..self.levels()).rev() {
            if diff & (1 << k) != 0 {
                best = fold(best, self.max[k][b]);
                b = self.up[k][b];
            }
        }
        if a == b {
            return Ok((a as NodeId, best));
        }

        for k in (0..self.levels()).rev() {
            if self.up[k][a] != self.up[k][b] {
                best = fold(best, self.max[k][a]);
                best = fold(best, self.max[k][b]);
                a = self.up[k][a];
                b = self.up[k][b];
            }
        }
        best = fold(best, self.max[0][a]);
        best = fold(best, self.max[0][b]);

        Ok((self.up[0][a] as NodeId, best))
    }

    pub fn lca(&self, u: NodeId, v: NodeId) -> Result<NodeId, BottleneckError> {
        self.lca_and_max(u, v).map(|(lca, _)| lca)
    }

    /// Heaviest edge on the path between `u` and `v`.
    pub fn bottleneck(&self, u: NodeId, v: NodeId) -> Result<Option<W>, BottleneckError> {
        self.lca_and_max(u, v).map(|(_, w)| w)
    }

    /// Ancestor of `v` exactly `k` edges up, `None` when `k` exceeds the depth of
    /// `v` or `v` is not indexed.
    pub fn kth_ancestor(&self, v: NodeId, k: usize) -> Result<Option<NodeId>, BottleneckError> {
        self.tree.check_node(v)?;
        let Some(depth) = self.tree.depth(v) else {
            return Ok(None);
        };
        if k > depth {
            return Ok(None);
        }

        let mut x = v as usize;
        for level in 0..self.levels() {
            if k & (1 << level) != 0 {
                x = self.up[level][x];
            }
        }
        Ok(Some(x as NodeId))
    }

    /// Number of tree edges between `u` and `v`.
    pub fn distance(&self, u: NodeId, v: NodeId) -> Result<usize, BottleneckError> {
        let lca = self.lca(u, v)?;
        let depth = self.tree.raw_depth();
        Ok(depth[u as usize] + depth[v as usize] - 2 * depth[lca as usize])
    }
}
