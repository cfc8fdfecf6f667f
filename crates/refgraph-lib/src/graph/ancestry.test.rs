// Tests for the ancestor search and the two-hop redundancy heuristic

use super::*;

fn graph_from(edges: &[(&str, &str)]) -> ProjectGraph {
    let mut graph = ProjectGraph::new();
    for (from, to) in edges {
        graph.add_edge(from, to);
    }
    graph
}

#[test]
fn test_node_is_its_own_ancestor() {
    let graph = graph_from(&[("A", "B")]);
    assert!(graph.ancestor_exists("A", "A"));
    assert!(graph.ancestor_exists("B", "B"));
}

#[test]
fn test_ancestor_follows_predecessors_upward() {
    let graph = graph_from(&[("A", "B"), ("B", "C"), ("C", "D")]);

    assert!(graph.ancestor_exists("A", "D"));
    assert!(graph.ancestor_exists("B", "D"));
    // Successors are never ancestors
    assert!(!graph.ancestor_exists("D", "A"));
    assert!(!graph.ancestor_exists("C", "B"));
}

#[test]
fn test_unknown_names_are_not_ancestors() {
    let graph = graph_from(&[("A", "B")]);
    assert!(!graph.ancestor_exists("Missing", "B"));
    assert!(!graph.ancestor_exists("A", "Missing"));
    assert!(!graph.parent_is_redundant("Missing", "B"));
}

#[test]
fn test_shortcut_edge_is_redundant() {
    // A -> B -> C plus the shortcut A -> C
    let graph = graph_from(&[("A", "B"), ("B", "C"), ("A", "C")]);

    assert!(graph.parent_is_redundant("A", "C"));
    assert!(!graph.parent_is_redundant("B", "C"));
    assert!(!graph.parent_is_redundant("A", "B"));
}

#[test]
fn test_plain_diamond_has_no_redundant_edge() {
    let graph = graph_from(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);

    // A is D's only grandparent and reaches neither B nor C
    assert!(!graph.parent_is_redundant("B", "D"));
    assert!(!graph.parent_is_redundant("C", "D"));
}

#[test]
fn test_diamond_with_shortcut_flags_the_shortcut() {
    let graph = graph_from(&[
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("C", "D"),
        ("A", "D"),
    ]);

    assert!(graph.parent_is_redundant("A", "D"));
    assert!(!graph.parent_is_redundant("B", "D"));
    assert!(!graph.parent_is_redundant("C", "D"));
}

#[test]
fn test_detour_through_grandparent_is_detected() {
    // A->B->D, A->C->D, B->E->D
    let graph = graph_from(&[
        ("A", "B"),
        ("B", "D"),
        ("A", "C"),
        ("C", "D"),
        ("B", "E"),
        ("E", "D"),
    ]);

    // B is a grandparent of D through E
    assert!(graph.parent_is_redundant("B", "D"));
    assert!(!graph.parent_is_redundant("C", "D"));
    assert!(!graph.parent_is_redundant("E", "D"));
}

#[test]
fn test_redundancy_is_scoped_to_grandparents() {
    // A->B->C->D->E plus A->E: A is an ancestor of every grandparent of E
    let reachable = graph_from(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("A", "E")]);
    assert!(reachable.parent_is_redundant("A", "E"));

    // Z's only grandparent is X, which reaches neither W nor Y
    let local = graph_from(&[("X", "Y"), ("Y", "Z"), ("W", "Z")]);
    assert!(!local.parent_is_redundant("W", "Z"));
    assert!(!local.parent_is_redundant("Y", "Z"));
}

#[test]
fn test_redundancy_is_relative_to_the_child() {
    // A->B->C with A->C, and A->F directly
    let graph = graph_from(&[("A", "B"), ("B", "C"), ("A", "C"), ("A", "F")]);

    assert!(graph.parent_is_redundant("A", "C"));
    assert!(!graph.parent_is_redundant("A", "F"));
}

#[test]
fn test_no_grandparents_never_redundant() {
    let single = graph_from(&[("A", "B")]);
    assert!(!single.parent_is_redundant("A", "B"));

    let roots_only = graph_from(&[("A", "C"), ("B", "C")]);
    assert!(!roots_only.parent_is_redundant("A", "C"));
    assert!(!roots_only.parent_is_redundant("B", "C"));
}

#[test]
fn test_parallel_edges_share_the_verdict() {
    let graph = graph_from(&[("A", "B"), ("B", "C"), ("A", "C"), ("A", "C")]);
    assert!(graph.parent_is_redundant("A", "C"));
}

#[test]
fn test_search_terminates_on_cycles() {
    let graph = graph_from(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D"), ("B", "D")]);

    assert!(graph.ancestor_exists("A", "D"));
    assert!(!graph.ancestor_exists("D", "A"));
    // D's grandparents are B (via C) and A (via B); B reaches itself
    assert!(graph.parent_is_redundant("B", "D"));
    // A's only grandparent is B, and B climbs through A back to C
    assert!(graph.parent_is_redundant("C", "A"));
}
