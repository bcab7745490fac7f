//! Incrementally built undirected graph, addressed by vertex label.
//!
//! Labels are mapped to dense indices in insertion order, and those indices back the adjacency
//! sets that the articulation-point finders traverse. Indices are never reused.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Debug, Formatter};

use debug_tree::TreeBuilder;

use crate::error::{GraphError, Result};

/// Dense vertex index, in 0..vertex_count().
pub type Idx = usize;

#[derive(Clone, Default)]
pub struct Graph {
    /// idx -> label
    labels: Vec<String>,
    /// label -> idx
    label_to_idx: BTreeMap<String, Idx>,
    /// Symmetric. A self-loop on u stores u in adj[u].
    adj: Vec<BTreeSet<Idx>>,
    edge_count: usize,
}

impl Debug for Graph {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let builder = TreeBuilder::new();
        let _b = builder.add_branch(&format!(
            "Graph |V| = {} |E| = {}",
            self.vertex_count(),
            self.edge_count()
        ));
        for (u, label) in self.labels.iter().enumerate() {
            let _v = builder.add_branch(&format!("[{u}] {label:?}"));
            for &w in &self.adj[u] {
                builder.add_leaf(&format!("[{w}] {:?}", self.labels[w]));
            }
        }
        writeln!(f, "{}", builder.string())
    }
}

impl Graph {
    /// Empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex. Returns whether it was added, that is, false if the label already existed.
    pub fn add_vertex(&mut self, label: &str) -> bool {
        let before = self.vertex_count();
        self.ensure_vertex(label);
        before != self.vertex_count()
    }

    /// Adds an undirected edge between a and b, creating missing endpoints. Returns whether it
    /// was added. (a, b) and (b, a) are the same edge.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        let u = self.ensure_vertex(a);
        let v = self.ensure_vertex(b);
        if !self.adj[u].insert(v) {
            return false;
        }
        self.adj[v].insert(u);
        self.edge_count += 1;
        log::trace!("Added edge {a:?} {b:?} ({u} {v})");
        true
    }

    fn ensure_vertex(&mut self, label: &str) -> Idx {
        if let Some(&u) = self.label_to_idx.get(label) {
            return u;
        }
        let u = self.labels.len();
        self.labels.push(label.to_owned());
        self.label_to_idx.insert(label.to_owned(), u);
        self.adj.push(BTreeSet::new());
        log::trace!("Added vertex {label:?} as {u}");
        u
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of distinct edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.label_to_idx.contains_key(label)
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.label_to_idx.get(a), self.label_to_idx.get(b)) {
            (Some(&u), Some(&v)) => self.adj[u].contains(&v),
            _ => false,
        }
    }

    /// Labels adjacent to the given vertex, ordered by index. A vertex with a self-loop is its
    /// own neighbor.
    pub fn neighbors(&self, label: &str) -> Result<impl Iterator<Item = &str> + '_> {
        let u = self.index_of(label)?;
        Ok(self.adj[u].iter().map(|&w| self.labels[w].as_str()))
    }

    pub fn degree(&self, label: &str) -> Result<usize> {
        Ok(self.adj[self.index_of(label)?].len())
    }

    /// All labels, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Each edge exactly once, with the endpoint added first on the left.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.adj.iter().enumerate().flat_map(move |(u, adj)| {
            adj.range(u..)
                .map(move |&v| (self.labels[u].as_str(), self.labels[v].as_str()))
        })
    }

    /// Dense index of a label.
    pub fn index_of(&self, label: &str) -> Result<Idx> {
        self.label_to_idx
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(label.to_owned()))
    }

    // INDEX-BASED ACCESS
    // They panic if the index doesn't exist.

    /// Label of index u.
    pub fn label(&self, u: Idx) -> &str {
        &self.labels[u]
    }

    /// Neighbor indices of u.
    pub fn adjacency(&self, u: Idx) -> &BTreeSet<Idx> {
        &self.adj[u]
    }
}

impl<A: AsRef<str>, B: AsRef<str>> Extend<(A, B)> for Graph {
    fn extend<T: IntoIterator<Item = (A, B)>>(&mut self, edges: T) {
        for (a, b) in edges {
            self.add_edge(a.as_ref(), b.as_ref());
        }
    }
}

impl<A: AsRef<str>, B: AsRef<str>> FromIterator<(A, B)> for Graph {
    fn from_iter<T: IntoIterator<Item = (A, B)>>(edges: T) -> Self {
        let mut g = Self::new();
        g.extend(edges);
        g
    }
}
