//! Graph builders, for demos, tests and benchmarks. Vertex labels are the decimal indices.

use rand::{Rng, SeedableRng};

use crate::graph::Graph;

/// Path 0 - 1 - ... - (n-1).
pub fn path(n: usize) -> Graph {
    let mut g = Graph::new();
    for u in 0..n {
        g.add_vertex(&u.to_string());
    }
    g.extend((1..n).map(|u| ((u - 1).to_string(), u.to_string())));
    g
}

/// Cycle on n vertices. n must be at least 3 to be a simple cycle.
pub fn cycle(n: usize) -> Graph {
    let mut g = path(n);
    if n >= 3 {
        g.add_edge(&(n - 1).to_string(), "0");
    }
    g
}

/// Star with center 0 and leaves 1..=leaves.
pub fn star(leaves: usize) -> Graph {
    let mut g = Graph::new();
    g.add_vertex("0");
    g.extend((1..=leaves).map(|u| ("0".to_owned(), u.to_string())));
    g
}

/// n vertices and up to m random edges, self-loops and repeats included. The same seed always
/// gives the same graph.
pub fn random_graph(n: usize, m: usize, seed: u64) -> Graph {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut g = Graph::new();
    for u in 0..n {
        g.add_vertex(&u.to_string());
    }
    if n == 0 {
        return g;
    }
    for _ in 0..m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        g.add_edge(&u.to_string(), &v.to_string());
    }
    g
}
