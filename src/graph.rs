//! petgraph DiGraph wrapper for the causal structure of a plot.
//!
//! Nodes are structural symbols; an edge `from -> to` means `from` causes
//! `to`. The graph is built from a fixed template and is never checked for
//! cycles or other validity properties.

use std::collections::BTreeMap;

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::roles::Symbol;

/// Directed causal graph over the symbols present in a template.
#[derive(Debug, Clone, Default)]
pub struct CausalGraph {
    pub digraph: DiGraph<Symbol, ()>,
    /// Maps symbol → petgraph NodeIndex.
    pub node_index: BTreeMap<Symbol, NodeIndex>,
}

impl CausalGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. No-op if the symbol is already present.
    pub fn add_node(&mut self, symbol: Symbol) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&symbol) {
            return idx;
        }
        let idx = self.digraph.add_node(symbol);
        self.node_index.insert(symbol, idx);
        idx
    }

    /// Add a directed edge, creating missing endpoints.
    pub fn add_edge(&mut self, from: Symbol, to: Symbol) {
        let a = self.add_node(from);
        let b = self.add_node(to);
        self.digraph.add_edge(a, b, ());
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.node_index.contains_key(&symbol)
    }

    /// Symbols in insertion order.
    pub fn nodes(&self) -> Vec<Symbol> {
        self.digraph.node_indices().map(|i| self.digraph[i]).collect()
    }

    /// `(from, to)` pairs in insertion order.
    pub fn edge_list(&self) -> Vec<(Symbol, Symbol)> {
        self.digraph
            .edge_indices()
            .filter_map(|e| self.digraph.edge_endpoints(e))
            .map(|(a, b)| (self.digraph[a], self.digraph[b]))
            .collect()
    }

    /// Direct causes of `symbol`, sorted.
    pub fn parents(&self, symbol: Symbol) -> Vec<Symbol> {
        self.neighbors(symbol, Direction::Incoming)
    }

    /// Direct effects of `symbol`, sorted.
    pub fn children(&self, symbol: Symbol) -> Vec<Symbol> {
        self.neighbors(symbol, Direction::Outgoing)
    }

    fn neighbors(&self, symbol: Symbol, dir: Direction) -> Vec<Symbol> {
        let Some(&idx) = self.node_index.get(&symbol) else {
            return Vec::new();
        };
        let mut out: Vec<Symbol> = self
            .digraph
            .neighbors_directed(idx, dir)
            .map(|n| self.digraph[n])
            .collect();
        out.sort();
        out.dedup();
        out
    }

    /// Causal order of the symbols, or `None` if the edges form a cycle.
    ///
    /// Renderers draw nodes in this order so causes are painted first.
    pub fn topological_order(&self) -> Option<Vec<Symbol>> {
        toposort(&self.digraph, None)
            .ok()
            .map(|order| order.into_iter().map(|i| self.digraph[i]).collect())
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_graph.rs"]
mod tests;
