//! Ancestor queries behind the redundant-edge heuristic
//!
//! An edge `parent -> node` is redundant when `parent` can also be reached
//! upward from one of `node`'s grandparents. Only the grandparent set is
//! inspected, so longer detours that never pass through a grandparent go
//! unnoticed.

use super::ProjectGraph;
use petgraph::graph::NodeIndex;
use std::collections::HashSet;

impl ProjectGraph {
    /// True if `target` is `from` or one of its transitive predecessors
    pub(crate) fn ancestor_exists_at(&self, target: NodeIndex, from: NodeIndex) -> bool {
        let mut visited = HashSet::new();
        let mut stack = vec![from];

        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            stack.extend(
                self.predecessor_indices(current)
                    .into_iter()
                    .filter(|p| !visited.contains(p)),
            );
        }

        false
    }

    /// True if the direct edge `parent -> node` is implied by a longer path
    pub(crate) fn parent_is_redundant_at(&self, parent: NodeIndex, node: NodeIndex) -> bool {
        self.predecessor_indices(node)
            .into_iter()
            .flat_map(|p| self.predecessor_indices(p))
            .any(|grandparent| self.ancestor_exists_at(parent, grandparent))
    }

    /// True if a project named `target` is `from` or sits above it
    ///
    /// Unknown names are never ancestors.
    pub fn ancestor_exists(&self, target: &str, from: &str) -> bool {
        match (self.node_index(target), self.node_index(from)) {
            (Some(target), Some(from)) => self.ancestor_exists_at(target, from),
            _ => false,
        }
    }

    /// True if the reference `parent -> node` is made redundant by a detour
    /// through one of `node`'s grandparents
    pub fn parent_is_redundant(&self, parent: &str, node: &str) -> bool {
        match (self.node_index(parent), self.node_index(node)) {
            (Some(parent), Some(node)) => self.parent_is_redundant_at(parent, node),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("ancestry.test.rs");
}
