//! Applying a [`ReductionAction`] to redundant edges
//!
//! Two entry points share the same predicate: [`analyze_edges`] +
//! [`apply_reduction`] filter a read-only graph at render time, while
//! [`ProjectGraph::transitive_reduction`] prunes the graph in place.
//!
//! Edges are visited node by node in insertion order, and for each node
//! predecessor by predecessor in insertion order. Highlight indices refer to
//! positions in that sequence.

use super::ProjectGraph;
use crate::primitives::ReductionAction;
use tracing::{debug, trace};

/// One reference edge with its redundancy verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedEdge {
    pub from: String,
    pub to: String,
    pub redundant: bool,
}

/// Edges left after applying a reduction action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReducedEdges {
    /// Edges to draw, in traversal order
    pub edges: Vec<AnalyzedEdge>,
    /// Zero-based positions of edges to highlight
    pub highlighted: Vec<usize>,
}

/// Classify every edge of the graph in traversal order
pub fn analyze_edges(graph: &ProjectGraph) -> Vec<AnalyzedEdge> {
    let mut analyzed = Vec::with_capacity(graph.edge_count());

    for node in graph.node_indices() {
        for parent in graph.predecessor_indices(node) {
            let redundant = graph.parent_is_redundant_at(parent, node);
            trace!(
                from = graph.name(parent),
                to = graph.name(node),
                redundant,
                "Analyzed edge"
            );
            analyzed.push(AnalyzedEdge {
                from: graph.name(parent).to_string(),
                to: graph.name(node).to_string(),
                redundant,
            });
        }
    }

    analyzed
}

/// Decide which analyzed edges are drawn and which are highlighted
pub fn apply_reduction(analyzed: &[AnalyzedEdge], action: ReductionAction) -> ReducedEdges {
    let mut reduced = ReducedEdges::default();

    for (index, edge) in analyzed.iter().enumerate() {
        match action {
            ReductionAction::None => reduced.edges.push(edge.clone()),
            ReductionAction::Color => {
                reduced.edges.push(edge.clone());
                if edge.redundant {
                    reduced.highlighted.push(index);
                }
            }
            ReductionAction::Remove => {
                if !edge.redundant {
                    reduced.edges.push(edge.clone());
                }
            }
        }
    }

    debug!(
        %action,
        total = analyzed.len(),
        kept = reduced.edges.len(),
        highlighted = reduced.highlighted.len(),
        "Applied reduction"
    );

    reduced
}

impl ProjectGraph {
    /// Remove every redundant reference edge from the graph
    ///
    /// Each node's predecessors are snapshotted before pruning, but each
    /// verdict is taken against the graph as already pruned. Returns the
    /// number of removed edges.
    pub fn transitive_reduction(&mut self) -> usize {
        let mut removed = 0;
        let nodes: Vec<_> = self.node_indices().collect();

        for node in nodes {
            for parent in self.predecessor_indices(node) {
                if self.parent_is_redundant_at(parent, node) && self.remove_edge(parent, node) {
                    debug!(
                        "Pruned redundant edge: {} --> {}",
                        self.name(parent),
                        self.name(node)
                    );
                    removed += 1;
                }
            }
        }

        removed
    }
}

#[cfg(test)]
mod tests {
    include!("reduction.test.rs");
}
