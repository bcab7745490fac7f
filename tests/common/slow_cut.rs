use std::collections::BTreeSet;

use articulation::graph::{Graph, Idx};

/// Number of connected components of the graph without the vertex `removed`.
#[allow(dead_code)]
fn components_without(g: &Graph, removed: Option<Idx>) -> usize {
    let n = g.vertex_count();
    let mut seen = vec![false; n];
    if let Some(r) = removed {
        seen[r] = true;
    }
    let mut count = 0;
    for u in 0..n {
        if seen[u] {
            continue;
        }
        count += 1;
        seen[u] = true;
        let mut stack = vec![u];
        while let Some(u) = stack.pop() {
            for &w in g.adjacency(u) {
                if !seen[w] {
                    seen[w] = true;
                    stack.push(w);
                }
            }
        }
    }
    count
}

/// Cut vertices straight from the definition, O(V * (V + E)).
#[allow(dead_code)]
pub fn slow_cut_vertices(g: &Graph) -> BTreeSet<String> {
    let base = components_without(g, None);
    (0..g.vertex_count())
        .filter(|&u| components_without(g, Some(u)) > base)
        .map(|u| g.label(u).to_owned())
        .collect()
}
