use crate::types::{Graph, NodeId};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Connected graph on `n` nodes with `m >= n - 1` edges and weights in `1..=max_weight`.
///
/// A random tree comes first, the rest are arbitrary (self-loops and parallel
/// edges included).
pub fn random_connected_graph(n: usize, m: usize, max_weight: i64, seed: usize) -> Graph<i64> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = Graph::new(n);

    for i in 2..=n {
        let j = rng.random_range(1..i);
        let w = rng.random_range(1..=max_weight);
        graph.add_edge(i as NodeId, j as NodeId, w).unwrap();
    }

    for _ in n.saturating_sub(1)..m {
        let s = rng.random_range(1..=n);
        let t = rng.random_range(1..=n);
        let w = rng.random_range(1..=max_weight);
        graph.add_edge(s as NodeId, t as NodeId, w).unwrap();
    }

    graph
}

/// Graph on `n` nodes split into (at most) `parts` groups with no edge between
/// groups. Node `v` belongs to group `(v - 1) % parts`. Roughly `m` edges.
pub fn random_forest_graph(n: usize, m: usize, parts: usize, seed: usize) -> Graph<i64> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = Graph::new(n);
    if n == 0 {
        return graph;
    }
    let parts = parts.clamp(1, n);

    for _ in 0..m {
        let s = rng.random_range(1..=n);
        let group = (s - 1) % parts;
        let members = (n - group).div_ceil(parts);
        let t = group + 1 + parts * rng.random_range(0..members);
        let w = rng.random_range(1..=100);
        graph.add_edge(s as NodeId, t as NodeId, w).unwrap();
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::brute_force::count_components;

    #[test]
    fn test_connected_graph_is_connected() {
        for seed in 0..10 {
            let g = random_connected_graph(15, 30, 9, seed);
            assert_eq!(g.node_count(), 15);
            assert_eq!(g.edge_count(), 30);
            assert_eq!(count_components(&g), 1);
        }
    }

    #[test]
    fn test_forest_graph_keeps_groups_apart() {
        for seed in 0..10 {
            let g = random_forest_graph(12, 40, 3, seed);
            for e in g.edges() {
                let (a, b) = e.endpoints();
                assert_eq!((a - 1) % 3, (b - 1) % 3);
            }
            assert!(count_components(&g) >= 3);
        }
    }
}
