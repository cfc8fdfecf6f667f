// Tests for render-time reduction and in-place pruning

use super::*;

fn graph_from(edges: &[(&str, &str)]) -> ProjectGraph {
    let mut graph = ProjectGraph::new();
    for (from, to) in edges {
        graph.add_edge(from, to);
    }
    graph
}

fn pairs(edges: &[AnalyzedEdge]) -> Vec<(&str, &str)> {
    edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect()
}

fn shortcut_diamond() -> ProjectGraph {
    graph_from(&[
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("C", "D"),
        ("A", "D"),
    ])
}

// ============================================================================
// analyze_edges
// ============================================================================

#[test]
fn test_analyze_edges_visits_node_then_predecessor() {
    let graph = shortcut_diamond();
    let analyzed = analyze_edges(&graph);

    assert_eq!(
        pairs(&analyzed),
        vec![("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("A", "D")]
    );
    let flags: Vec<bool> = analyzed.iter().map(|e| e.redundant).collect();
    assert_eq!(flags, vec![false, false, false, false, true]);
}

#[test]
fn test_analyze_edges_empty_graph() {
    assert!(analyze_edges(&ProjectGraph::new()).is_empty());
}

#[test]
fn test_parallel_edges_are_analyzed_separately() {
    let graph = graph_from(&[("A", "B"), ("B", "C"), ("A", "C"), ("A", "C")]);
    let analyzed = analyze_edges(&graph);

    assert_eq!(
        pairs(&analyzed),
        vec![("A", "B"), ("B", "C"), ("A", "C"), ("A", "C")]
    );
    assert_eq!(analyzed.iter().filter(|e| e.redundant).count(), 2);
}

#[test]
fn test_parallel_edges_without_detour_stay_unflagged() {
    let graph = graph_from(&[("A", "B"), ("A", "B"), ("B", "C")]);
    let analyzed = analyze_edges(&graph);

    assert_eq!(analyzed.len(), 3);
    assert!(analyzed.iter().all(|e| !e.redundant));
}

// ============================================================================
// apply_reduction
// ============================================================================

#[test]
fn test_none_keeps_everything_without_highlights() {
    let analyzed = analyze_edges(&shortcut_diamond());
    let reduced = apply_reduction(&analyzed, ReductionAction::None);

    assert_eq!(reduced.edges, analyzed);
    assert!(reduced.highlighted.is_empty());
}

#[test]
fn test_color_keeps_everything_and_records_indices() {
    let analyzed = analyze_edges(&shortcut_diamond());
    let reduced = apply_reduction(&analyzed, ReductionAction::Color);

    assert_eq!(reduced.edges.len(), analyzed.len());
    assert_eq!(reduced.highlighted, vec![4]);
}

#[test]
fn test_remove_drops_flagged_edges() {
    let analyzed = analyze_edges(&shortcut_diamond());
    let reduced = apply_reduction(&analyzed, ReductionAction::Remove);

    assert_eq!(
        pairs(&reduced.edges),
        vec![("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]
    );
    assert!(reduced.highlighted.is_empty());
}

#[test]
fn test_remove_output_is_subset_of_none_output() {
    let graph = graph_from(&[
        ("A", "B"),
        ("B", "D"),
        ("A", "C"),
        ("C", "D"),
        ("B", "E"),
        ("E", "D"),
        ("A", "D"),
    ]);
    let analyzed = analyze_edges(&graph);
    let none = apply_reduction(&analyzed, ReductionAction::None);
    let remove = apply_reduction(&analyzed, ReductionAction::Remove);

    assert!(remove.edges.len() < none.edges.len());
    for edge in &remove.edges {
        assert!(none.edges.contains(edge));
    }
}

#[test]
fn test_reduction_is_pure() {
    let graph = shortcut_diamond();
    let analyzed = analyze_edges(&graph);
    let _ = apply_reduction(&analyzed, ReductionAction::Remove);

    assert_eq!(graph.edge_count(), 5);
    assert_eq!(analyze_edges(&graph), analyzed);
}

// ============================================================================
// transitive_reduction
// ============================================================================

#[test]
fn test_transitive_reduction_prunes_shortcut() {
    let mut graph = shortcut_diamond();
    let removed = graph.transitive_reduction();

    assert_eq!(removed, 1);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.predecessors("D").unwrap(), vec!["B", "C"]);
    assert_eq!(graph.successors("A").unwrap(), vec!["B", "C"]);
}

#[test]
fn test_transitive_reduction_keeps_isolated_nodes() {
    let mut graph = graph_from(&[("A", "B"), ("B", "C"), ("A", "C")]);
    graph.transitive_reduction();

    assert_eq!(graph.node_count(), 3);
    assert!(graph.contains("A"));
    assert!(graph.contains("C"));
}

#[test]
fn test_transitive_reduction_agrees_with_analysis() {
    let mut graph = graph_from(&[
        ("A", "B"),
        ("B", "D"),
        ("A", "C"),
        ("C", "D"),
        ("B", "E"),
        ("E", "D"),
        ("A", "D"),
    ]);
    let before = analyze_edges(&graph);
    let expected = apply_reduction(&before, ReductionAction::Remove);

    graph.transitive_reduction();
    let after = analyze_edges(&graph);

    assert_eq!(pairs(&after), pairs(&expected.edges));
}

#[test]
fn test_transitive_reduction_removes_parallel_shortcuts() {
    let mut graph = graph_from(&[("A", "B"), ("B", "C"), ("A", "C"), ("A", "C")]);
    let removed = graph.transitive_reduction();

    assert_eq!(removed, 2);
    assert_eq!(graph.predecessors("C").unwrap(), vec!["B"]);
}

#[test]
fn test_transitive_reduction_noop_without_redundancy() {
    let mut graph = graph_from(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);
    assert_eq!(graph.transitive_reduction(), 0);
    assert_eq!(graph.edge_count(), 4);
}
