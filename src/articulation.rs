//! Articulation points (cut vertices) of a [`Graph`].
//!
//! A vertex is an articulation point if removing it increases the number of connected
//! components. Every finder runs a depth-first search from each unvisited vertex, keeping the
//! discovery time and the low-link value of each vertex:
//! - a DFS root is a cut vertex iff it has more than one DFS child;
//! - any other vertex u is a cut vertex iff some DFS child w has `low[w] >= disc[u]`.
//!
//! Self-loops and the edge back to the DFS parent are never used to lower a low-link value.

use std::collections::BTreeSet;
use std::fmt::Formatter;
use std::marker::PhantomData;

use crate::graph::{Graph, Idx};

pub mod iterative;
pub mod recursive;

pub use iterative::IterativeDfs;
pub use recursive::RecursiveDfs;

/// Marks unvisited vertices and missing DFS parents.
pub(crate) const EMPTY: Idx = usize::MAX;

pub(crate) fn idx_fmt(u: &Idx, f: &mut Formatter) -> std::fmt::Result {
    if *u == EMPTY {
        write!(f, "∅")
    } else {
        write!(f, "{u}")
    }
}

#[allow(clippy::ptr_arg)]
pub(crate) fn idxs_fmt(us: &Vec<Idx>, f: &mut Formatter) -> std::fmt::Result {
    f.debug_list()
        .entries(us.iter().map(|&u| PrettyIdx(u)))
        .finish()
}

/// Used to pretty print an Idx, outputting ∅ if it is EMPTY.
pub(crate) struct PrettyIdx(pub Idx);

impl std::fmt::Display for PrettyIdx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        idx_fmt(&self.0, f)
    }
}

impl std::fmt::Debug for PrettyIdx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

/// Strategy to find the cut vertices of a graph.
pub trait CutVertexFinder {
    /// One flag per vertex index, true iff it is an articulation point.
    fn cut_vertices(graph: &Graph) -> Vec<bool>;
}

/// Snapshot of an analysis. Not updated when the graph changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticulationResult {
    pub articulation_points: BTreeSet<String>,
    /// |V| + |E| of the analysed graph.
    pub complexity: usize,
}

impl ArticulationResult {
    pub fn is_articulation_point(&self, label: &str) -> bool {
        self.articulation_points.contains(label)
    }
}

/// Size of the graph, |V| + |E|. Self-loops count as edges.
pub fn complexity(graph: &Graph) -> usize {
    graph.vertex_count() + graph.edge_count()
}

/// Runs a [`CutVertexFinder`] and maps its flags back to labels.
pub struct ArticulationAnalyzer<F: CutVertexFinder = IterativeDfs>(PhantomData<F>);

impl<F: CutVertexFinder> ArticulationAnalyzer<F> {
    pub fn analyze(graph: &Graph) -> ArticulationResult {
        let flags = F::cut_vertices(graph);
        debug_assert_eq!(flags.len(), graph.vertex_count());
        let articulation_points: BTreeSet<String> = flags
            .iter()
            .enumerate()
            .filter(|(_, &is_cut)| is_cut)
            .map(|(u, _)| graph.label(u).to_owned())
            .collect();
        let complexity = complexity(graph);
        log::debug!(
            "Found {} articulation points, complexity {}",
            articulation_points.len(),
            complexity
        );
        ArticulationResult {
            articulation_points,
            complexity,
        }
    }
}

/// Analyses the graph with [`IterativeDfs`].
pub fn analyze(graph: &Graph) -> ArticulationResult {
    ArticulationAnalyzer::<IterativeDfs>::analyze(graph)
}

impl Graph {
    /// Same as [`analyze`].
    pub fn analyze(&self) -> ArticulationResult {
        analyze(self)
    }
}
