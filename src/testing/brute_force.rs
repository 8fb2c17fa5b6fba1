//! Slow reference answers the fast structures are checked against.

use crate::types::{Graph, NodeId, Weight, heavier};
use fixedbitset::FixedBitSet;

fn adjacency<W: Weight>(g: &Graph<W>) -> Vec<Vec<(usize, W)>> {
    let mut adj = vec![Vec::new(); g.node_count() + 1];
    for e in g.edges() {
        let (a, b) = e.endpoints();
        let w = *e.weight().unwrap();
        adj[a as usize].push((b as usize, w));
        adj[b as usize].push((a as usize, w));
    }
    adj
}

pub fn count_components<W: Weight>(g: &Graph<W>) -> usize {
    let n = g.node_count();
    let adj = adjacency(g);
    let mut seen = FixedBitSet::with_capacity(n + 1);
    let mut count = 0;
    for start in 1..=n {
        if seen.contains(start) {
            continue;
        }
        count += 1;
        seen.insert(start);
        let mut stack = vec![start];
        while let Some(u) = stack.pop() {
            for &(v, _) in &adj[u] {
                if !seen.contains(v) {
                    seen.insert(v);
                    stack.push(v);
                }
            }
        }
    }
    count
}

/// Weight of a minimum spanning forest, O(N^2) Prim restarted per component.
pub fn prim_weight(g: &Graph<i64>) -> Option<i64> {
    let n = g.node_count();
    let adj = adjacency(g);
    let mut in_tree = vec![false; n + 1];
    let mut best = vec![i64::MAX; n + 1];
    let mut total = None;

    for start in 1..=n {
        if in_tree[start] {
            continue;
        }
        best[start] = 0;
        loop {
            let next = (1..=n)
                .filter(|&v| !in_tree[v] && best[v] != i64::MAX)
                .min_by_key(|&v| best[v]);
            let Some(u) = next else { break };
            in_tree[u] = true;
            if u != start {
                total = Some(total.unwrap_or(0) + best[u]);
            }
            for &(v, w) in &adj[u] {
                if !in_tree[v] && w < best[v] {
                    best[v] = w;
                }
            }
        }
    }

    total
}

/// Node sequence from `u` to `v` in a forest found by DFS, `None` if unreachable.
pub fn forest_path<W: Weight>(forest: &Graph<W>, u: NodeId, v: NodeId) -> Option<Vec<NodeId>> {
    let n = forest.node_count();
    let adj = adjacency(forest);
    let mut parent = vec![usize::MAX; n + 1];
    let (u, v) = (u as usize, v as usize);
    parent[u] = u;
    let mut stack = vec![u];
    while let Some(x) = stack.pop() {
        for &(y, _) in &adj[x] {
            if parent[y] == usize::MAX {
                parent[y] = x;
                stack.push(y);
            }
        }
    }
    if parent[v] == usize::MAX {
        return None;
    }

    let mut path = vec![v as NodeId];
    let mut x = v;
    while x != u {
        x = parent[x];
        path.push(x as NodeId);
    }
    path.reverse();
    Some(path)
}

/// Heaviest edge along consecutive nodes of `path`, by linear scan.
pub fn path_max<W: Weight>(forest: &Graph<W>, path: &[NodeId]) -> Option<W> {
    let adj = adjacency(forest);
    path.windows(2)
        .map(|pair| {
            adj[pair[0] as usize]
                .iter()
                .find(|&&(y, _)| y == pair[1] as usize)
                .map(|&(_, w)| w)
                .unwrap()
        })
        .reduce(heavier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prim_on_small_graph() {
        let g = Graph::from_edges(4, [(1, 2, 5), (2, 3, 2), (3, 4, 9), (1, 3, 1)]).unwrap();
        assert_eq!(prim_weight(&g), Some(12));
        assert_eq!(count_components(&g), 1);
    }

    #[test]
    fn test_forest_path() {
        let g = Graph::from_edges(5, [(1, 3, 1), (2, 3, 2), (3, 4, 9)]).unwrap();
        assert_eq!(forest_path(&g, 2, 4), Some(vec![2, 3, 4]));
        assert_eq!(path_max(&g, &[2, 3, 4]), Some(9));
        assert_eq!(forest_path(&g, 1, 5), None);
        assert_eq!(count_components(&g), 2);
    }
}
