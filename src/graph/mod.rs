pub mod community;

use crate::error::{GfResult, GlyphForgeError};
use std::collections::{BTreeMap, HashMap};

/// Weighted undirected co-occurrence graph over the distinct tokens of a
/// section. Nodes are interned in first-appearance order; edges are keyed
/// `(min, max)` so insertion order never affects the final weights.
#[derive(Debug, Clone, Default)]
pub struct CooccurrenceGraph {
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    edges: BTreeMap<(usize, usize), u32>,
}

impl CooccurrenceGraph {
    /// Slides a window over the token sequence and counts every pair
    /// `(tokens[i], tokens[i + j])` for offsets `1..window_size`. A repeated
    /// token string pairs with itself only as the same node, which is
    /// skipped: the graph carries no self loops. Empty input is a valid
    /// empty graph.
    pub fn build(tokens: &[String], window_size: usize) -> GfResult<Self> {
        if window_size == 0 {
            return Err(GlyphForgeError::Config(
                "window size must be at least 1".to_string(),
            ));
        }

        let mut graph = Self::default();
        for token in tokens {
            graph.intern(token);
        }

        for i in 0..tokens.len() {
            for j in 1..window_size {
                if i + j >= tokens.len() {
                    break;
                }
                let a = graph.index[&tokens[i]];
                let b = graph.index[&tokens[i + j]];
                if a == b {
                    continue;
                }
                let key = (a.min(b), a.max(b));
                *graph.edges.entry(key).or_insert(0) += 1;
            }
        }

        Ok(graph)
    }

    /// Assembles a graph directly from weighted unordered pairs. Nodes are
    /// interned in the order they first appear; self pairs are skipped and
    /// repeated pairs accumulate.
    pub fn from_weighted_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, u32)>,
    {
        let mut graph = Self::default();
        for (a, b, w) in edges {
            let ia = graph.intern(a);
            let ib = graph.intern(b);
            if ia == ib {
                continue;
            }
            *graph.edges.entry((ia.min(ib), ia.max(ib))).or_insert(0) += w;
        }
        graph
    }

    fn intern(&mut self, token: &str) -> usize {
        if let Some(&idx) = self.index.get(token) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(token.to_string());
        self.index.insert(token.to_string(), idx);
        idx
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Edges in ascending `(min, max)` node-index order.
    pub fn edges(&self) -> impl Iterator<Item = ((usize, usize), u32)> + '_ {
        self.edges.iter().map(|(&k, &w)| (k, w))
    }

    pub fn edge_weight(&self, a: &str, b: &str) -> u32 {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) if ia != ib => self
                .edges
                .get(&(ia.min(ib), ia.max(ib)))
                .copied()
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Sum of all edge weights (the `m` of the modularity null model).
    pub fn total_weight(&self) -> f64 {
        self.edges.values().map(|&w| w as f64).sum()
    }

    /// Weighted degree per node, indexed by node id.
    pub fn weighted_degrees(&self) -> Vec<f64> {
        let mut degrees = vec![0.0; self.nodes.len()];
        for (&(a, b), &w) in &self.edges {
            degrees[a] += w as f64;
            degrees[b] += w as f64;
        }
        degrees
    }
}
