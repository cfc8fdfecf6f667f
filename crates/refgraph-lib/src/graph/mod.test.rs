// Tests for the project reference graph model

use super::*;

// ============================================================================
// Basic Graph Operations
// ============================================================================

#[test]
fn test_new_graph_is_empty() {
    let graph = ProjectGraph::new();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_add_edge_creates_both_endpoints() {
    let mut graph = ProjectGraph::new();
    graph.add_edge("App", "Core");

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.contains("App"));
    assert!(graph.contains("Core"));
    assert_eq!(graph.successors("App").unwrap(), vec!["Core"]);
    assert_eq!(graph.predecessors("Core").unwrap(), vec!["App"]);
    assert!(graph.predecessors("App").unwrap().is_empty());
    assert!(graph.successors("Core").unwrap().is_empty());
}

#[test]
fn test_nodes_are_unique_per_name() {
    let mut graph = ProjectGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("B", "C");
    graph.add_edge("A", "C");

    assert_eq!(graph.node_count(), 3);
    let names: Vec<&str> = graph.nodes().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_node_order_follows_first_reference() {
    let mut graph = ProjectGraph::new();
    graph.add_edge("Web", "Domain");
    graph.add_edge("Tests", "Web");
    graph.add_edge("Domain", "Shared");

    let names: Vec<&str> = graph.nodes().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Web", "Domain", "Tests", "Shared"]);
}

#[test]
fn test_adjacency_lists_keep_insertion_order() {
    let mut graph = ProjectGraph::new();
    graph.add_edge("B", "D");
    graph.add_edge("C", "D");
    graph.add_edge("A", "D");
    graph.add_edge("D", "X");
    graph.add_edge("D", "Y");

    assert_eq!(graph.predecessors("D").unwrap(), vec!["B", "C", "A"]);
    assert_eq!(graph.successors("D").unwrap(), vec!["X", "Y"]);
}

#[test]
fn test_adjacency_is_symmetric() {
    let mut graph = ProjectGraph::new();
    let edges = [
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("C", "D"),
        ("B", "E"),
        ("E", "D"),
        ("A", "B"),
    ];
    for (from, to) in edges {
        graph.add_edge(from, to);
    }

    for node in graph.nodes() {
        let name = node.name.as_str();
        for succ in graph.successors(name).unwrap() {
            let preds = graph.predecessors(succ).unwrap();
            let forward = graph
                .successors(name)
                .unwrap()
                .iter()
                .filter(|s| **s == succ)
                .count();
            let backward = preds.iter().filter(|p| **p == name).count();
            assert_eq!(forward, backward, "{} -> {} must be mirrored", name, succ);
        }
    }
}

#[test]
fn test_parallel_edges_are_kept() {
    let mut graph = ProjectGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("A", "B");

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.predecessors("B").unwrap(), vec!["A", "A"]);
    assert_eq!(graph.successors("A").unwrap(), vec!["B", "B"]);
}

#[test]
fn test_unknown_node_queries() {
    let graph = ProjectGraph::new();
    assert!(graph.predecessors("Missing").is_none());
    assert!(graph.successors("Missing").is_none());
    assert!(graph.node_index("Missing").is_none());
}

// ============================================================================
// Cycle Detection
// ============================================================================

#[test]
fn test_acyclic_graph_has_no_cycle() {
    let mut graph = ProjectGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("B", "C");
    graph.add_edge("A", "C");

    assert!(!graph.has_cycles());
    assert!(graph.detect_cycle().is_none());
    assert!(graph.ensure_acyclic().is_ok());
}

#[test]
fn test_detect_cycle_reports_members() {
    let mut graph = ProjectGraph::new();
    graph.add_edge("Root", "A");
    graph.add_edge("A", "B");
    graph.add_edge("B", "C");
    graph.add_edge("C", "A");

    assert!(graph.has_cycles());
    let mut cycle = graph.detect_cycle().unwrap();
    cycle.sort();
    assert_eq!(cycle, vec!["A", "B", "C"]);

    let err = graph.ensure_acyclic().unwrap_err();
    assert!(err.to_string().starts_with("Circular project reference detected:"));
}

#[test]
fn test_self_reference_is_a_cycle() {
    let mut graph = ProjectGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("B", "B");

    assert_eq!(graph.detect_cycle().unwrap(), vec!["B"]);
}
