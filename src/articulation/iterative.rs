//! Depth-first search with an explicit stack of frames, one per vertex on the current DFS path.
//! Finds the same cut vertices as [`super::RecursiveDfs`] without using the call stack.

use std::ops::Bound::{Excluded, Unbounded};

use derivative::Derivative;

use super::{idx_fmt, CutVertexFinder, PrettyIdx as I, EMPTY};
use crate::graph::{Graph, Idx};

#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeDfs;

#[derive(Derivative)]
#[derivative(Debug)]
struct Frame {
    u: Idx,
    /// DFS parent, EMPTY for the root.
    #[derivative(Debug(format_with = "idx_fmt"))]
    parent: Idx,
    /// Last neighbor of u looked at, EMPTY if none yet.
    #[derivative(Debug(format_with = "idx_fmt"))]
    last: Idx,
}

impl Frame {
    /// Advances to the next neighbor of u, in index order.
    fn next_neighbor(&mut self, graph: &Graph) -> Option<Idx> {
        let adj = graph.adjacency(self.u);
        let next = if self.last == EMPTY {
            adj.first()
        } else {
            adj.range((Excluded(self.last), Unbounded)).next()
        };
        self.last = *next?;
        Some(self.last)
    }
}

impl CutVertexFinder for IterativeDfs {
    fn cut_vertices(graph: &Graph) -> Vec<bool> {
        let n = graph.vertex_count();
        let mut disc = vec![EMPTY; n];
        let mut low = vec![EMPTY; n];
        let mut is_cut = vec![false; n];
        let mut time = 0;
        let mut stack: Vec<Frame> = Vec::new();

        let mut visit = |u: Idx, parent: Idx, disc: &mut [usize], low: &mut [usize]| {
            disc[u] = time;
            low[u] = time;
            time += 1;
            log::trace!("Visit {u} parent {} disc {}", I(parent), disc[u]);
            Frame {
                u,
                parent,
                last: EMPTY,
            }
        };

        for root in 0..n {
            if disc[root] != EMPTY {
                continue;
            }
            log::trace!("New DFS tree rooted at {root}");
            let mut root_children = 0;
            stack.push(visit(root, EMPTY, &mut disc, &mut low));

            while let Some(top) = stack.last_mut() {
                let (u, parent) = (top.u, top.parent);
                if let Some(w) = top.next_neighbor(graph) {
                    if w == parent || w == u {
                        continue;
                    }
                    if disc[w] == EMPTY {
                        stack.push(visit(w, u, &mut disc, &mut low));
                    } else {
                        // Back edge
                        low[u] = low[u].min(disc[w]);
                    }
                    continue;
                }
                // All neighbors of u done, return to its parent.
                stack.pop();
                let Some(p) = stack.last() else {
                    continue;
                };
                debug_assert_eq!(p.u, parent);
                low[parent] = low[parent].min(low[u]);
                if p.parent == EMPTY {
                    root_children += 1;
                } else if low[u] >= disc[parent] {
                    log::trace!("{parent} separates subtree of {u}, path {stack:?}");
                    is_cut[parent] = true;
                }
            }

            if root_children > 1 {
                is_cut[root] = true;
            }
        }
        is_cut
    }
}
