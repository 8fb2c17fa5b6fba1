pub mod brute_force;
pub mod random_graphs;
