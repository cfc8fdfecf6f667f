//! Project reference graph with redundant-edge analysis
//!
//! Nodes are projects identified by display name, edges point from a project
//! to the project it references. The graph is built only through
//! [`ProjectGraph::add_edge`]; nodes appear on first reference and are never
//! removed. Parallel edges are kept, so inserting the same reference twice
//! draws it twice.

use petgraph::Direction;
use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use thiserror::Error;
use tracing::trace;

pub mod ancestry;
pub mod reduction;

pub use reduction::{AnalyzedEdge, ReducedEdges, analyze_edges, apply_reduction};

/// Errors raised by graph inspection
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Circular project reference detected: {cycle}")]
    CircularReference { cycle: String },
}

/// A project in the reference graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNode {
    /// Display name (project file name without extension)
    pub name: String,
}

impl ProjectNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Directed graph of project references
#[derive(Debug, Clone)]
pub struct ProjectGraph {
    /// Directed graph: nodes = projects, edges = references
    graph: DiGraph<ProjectNode, ()>,
    /// Map from project name to node index for fast lookup
    node_map: HashMap<String, NodeIndex>,
}

impl ProjectGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Return the node for `name`, creating it with no edges if absent
    fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(name) {
            return idx;
        }

        let idx = self.graph.add_node(ProjectNode::new(name));
        self.node_map.insert(name.to_string(), idx);
        idx
    }

    /// Add a reference edge `from -> to`, creating either endpoint on demand
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let from_idx = self.ensure_node(from);
        let to_idx = self.ensure_node(to);
        trace!("Adding edge: {} --> {}", from, to);
        self.graph.add_edge(from_idx, to_idx, ());
    }

    /// Remove one `from -> to` edge; both adjacency lists lose the entry
    ///
    /// Only the reduction pass prunes edges, nodes always stay.
    pub(crate) fn remove_edge(&mut self, from: NodeIndex, to: NodeIndex) -> bool {
        match self.graph.find_edge(from, to) {
            Some(edge) => {
                self.graph.remove_edge(edge);
                true
            }
            None => false,
        }
    }

    /// Direct predecessors of a node, in insertion order
    pub(crate) fn predecessor_indices(&self, node: NodeIndex) -> Vec<NodeIndex> {
        // petgraph walks adjacency newest-first
        let mut preds: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(node, Direction::Incoming)
            .collect();
        preds.reverse();
        preds
    }

    /// Direct successors of a node, in insertion order
    pub(crate) fn successor_indices(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut succs: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(node, Direction::Outgoing)
            .collect();
        succs.reverse();
        succs
    }

    /// Node indices in insertion order
    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Name of the node at `idx`
    pub(crate) fn name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].name
    }

    /// Look up a node index by project name
    pub fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.node_map.get(name).copied()
    }

    /// Names of the projects referencing `name`, in insertion order
    pub fn predecessors(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.node_index(name)?;
        Some(
            self.predecessor_indices(idx)
                .into_iter()
                .map(|p| self.name(p))
                .collect(),
        )
    }

    /// Names of the projects `name` references, in insertion order
    pub fn successors(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.node_index(name)?;
        Some(
            self.successor_indices(idx)
                .into_iter()
                .map(|s| self.name(s))
                .collect(),
        )
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check if a project exists in the graph
    pub fn contains(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// Get an iterator over all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &ProjectNode> {
        self.graph.node_weights()
    }

    /// Check if the graph contains cycles
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Return the members of one reference cycle, if any
    pub fn detect_cycle(&self) -> Option<Vec<String>> {
        if !self.has_cycles() {
            return None;
        }

        tarjan_scc(&self.graph)
            .into_iter()
            .find(|component| {
                component.len() > 1
                    || self.graph.find_edge(component[0], component[0]).is_some()
            })
            .map(|component| {
                let mut names: Vec<String> = component
                    .iter()
                    .map(|&idx| self.name(idx).to_string())
                    .collect();
                // tarjan yields members in reverse discovery order
                names.reverse();
                names
            })
    }

    /// Fail when the graph has a reference cycle
    pub fn ensure_acyclic(&self) -> Result<(), GraphError> {
        match self.detect_cycle() {
            Some(cycle) => Err(GraphError::CircularReference {
                cycle: cycle.join(" → "),
            }),
            None => Ok(()),
        }
    }
}

impl Default for ProjectGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
