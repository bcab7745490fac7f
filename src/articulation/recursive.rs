//! Recursive depth-first search. Recursion depth is the depth of the DFS tree, so very long
//! paths can exhaust the call stack; prefer [`super::IterativeDfs`] for those.

use derivative::Derivative;

use super::{idxs_fmt, CutVertexFinder, PrettyIdx as I, EMPTY};
use crate::graph::{Graph, Idx};

#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveDfs;

impl CutVertexFinder for RecursiveDfs {
    fn cut_vertices(graph: &Graph) -> Vec<bool> {
        let mut search = Search::new(graph.vertex_count());
        for root in 0..graph.vertex_count() {
            if search.disc[root] == EMPTY {
                log::trace!("New DFS tree rooted at {root}");
                search.visit(graph, root, EMPTY);
            }
        }
        log::trace!("{search:?}");
        search.is_cut
    }
}

#[derive(Derivative)]
#[derivative(Debug)]
struct Search {
    /// Discovery time, EMPTY if not visited yet.
    #[derivative(Debug(format_with = "idxs_fmt"))]
    disc: Vec<usize>,
    /// Smallest discovery time reachable from the subtree using at most one back edge.
    #[derivative(Debug(format_with = "idxs_fmt"))]
    low: Vec<usize>,
    is_cut: Vec<bool>,
    time: usize,
}

impl Search {
    fn new(n: usize) -> Self {
        Self {
            disc: vec![EMPTY; n],
            low: vec![EMPTY; n],
            is_cut: vec![false; n],
            time: 0,
        }
    }

    /// Visits u, whose DFS parent is p (EMPTY for a root).
    fn visit(&mut self, graph: &Graph, u: Idx, p: Idx) {
        self.disc[u] = self.time;
        self.low[u] = self.time;
        self.time += 1;
        log::trace!("Visit {u} parent {} disc {}", I(p), self.disc[u]);

        let mut children = 0;
        for &w in graph.adjacency(u) {
            if w == p || w == u {
                continue;
            }
            if self.disc[w] == EMPTY {
                children += 1;
                self.visit(graph, w, u);
                self.low[u] = self.low[u].min(self.low[w]);
                if p != EMPTY && self.low[w] >= self.disc[u] {
                    self.is_cut[u] = true;
                }
            } else {
                // Back edge
                self.low[u] = self.low[u].min(self.disc[w]);
            }
        }

        if p == EMPTY && children > 1 {
            self.is_cut[u] = true;
        }
    }
}
