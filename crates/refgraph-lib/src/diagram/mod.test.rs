use super::*;

fn graph_from(edges: &[(&str, &str)]) -> ProjectGraph {
    let mut graph = ProjectGraph::new();
    for (from, to) in edges {
        graph.add_edge(from, to);
    }
    graph
}

fn diamond() -> ProjectGraph {
    graph_from(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")])
}

fn edge_lines(flowchart: &str) -> Vec<&str> {
    flowchart.lines().filter(|l| l.contains(" --> ")).collect()
}

fn directive_lines(flowchart: &str) -> Vec<&str> {
    flowchart
        .lines()
        .filter(|l| l.starts_with("linkStyle"))
        .collect()
}

// ============================================================================
// Flowchart text
// ============================================================================

#[test]
fn test_diamond_none() {
    let chart = render_flowchart(&diamond(), GraphDirection::TD, ReductionAction::None);

    assert_eq!(
        chart,
        "flowchart TD\nA --> B\nA --> C\nB --> D\nC --> D\n"
    );
}

#[test]
fn test_diamond_color_has_nothing_to_highlight() {
    let chart = render_flowchart(&diamond(), GraphDirection::TD, ReductionAction::Color);

    assert!(chart.starts_with("flowchart TD\n"));
    assert_eq!(edge_lines(&chart).len(), 4);
    assert!(directive_lines(&chart).is_empty());
}

#[test]
fn test_diamond_remove_keeps_all_four_edges() {
    let chart = render_flowchart(&diamond(), GraphDirection::TD, ReductionAction::Remove);

    assert_eq!(edge_lines(&chart).len(), 4);
    assert!(directive_lines(&chart).is_empty());
}

#[test]
fn test_shortcut_color_emits_link_style() {
    let mut graph = diamond();
    graph.add_edge("A", "D");
    let chart = render_flowchart(&graph, GraphDirection::LR, ReductionAction::Color);

    assert_eq!(
        chart,
        "flowchart LR\n\
         A --> B\n\
         A --> C\n\
         B --> D\n\
         C --> D\n\
         A --> D\n\
         linkStyle 4 stroke:#f00,stroke-width:2px;\n"
    );
}

#[test]
fn test_shortcut_remove_drops_edge_and_directive() {
    let mut graph = diamond();
    graph.add_edge("A", "D");
    let chart = render_flowchart(&graph, GraphDirection::BT, ReductionAction::Remove);

    assert_eq!(
        chart,
        "flowchart BT\nA --> B\nA --> C\nB --> D\nC --> D\n"
    );
}

#[test]
fn test_multiple_highlights_are_comma_joined() {
    let graph = graph_from(&[
        ("A", "B"),
        ("B", "D"),
        ("A", "C"),
        ("C", "D"),
        ("B", "E"),
        ("E", "D"),
        ("A", "D"),
    ]);
    let chart = render_flowchart(&graph, GraphDirection::TD, ReductionAction::Color);

    // Order: A->B | B->D C->D E->D A->D | A->C | B->E
    assert_eq!(
        directive_lines(&chart),
        vec!["linkStyle 1,4 stroke:#f00,stroke-width:2px;"]
    );
}

#[test]
fn test_color_line_count_matches_none() {
    let graph = graph_from(&[("A", "B"), ("B", "C"), ("A", "C"), ("C", "D")]);
    let none = render_flowchart(&graph, GraphDirection::TD, ReductionAction::None);
    let color = render_flowchart(&graph, GraphDirection::TD, ReductionAction::Color);

    assert_eq!(edge_lines(&none), edge_lines(&color));
    assert_eq!(color.lines().count(), none.lines().count() + 1);
}

#[test]
fn test_remove_lines_are_subset_of_none() {
    let graph = graph_from(&[("A", "B"), ("B", "C"), ("A", "C"), ("C", "D"), ("B", "D")]);
    let none = render_flowchart(&graph, GraphDirection::TD, ReductionAction::None);
    let remove = render_flowchart(&graph, GraphDirection::TD, ReductionAction::Remove);

    let none_lines = edge_lines(&none);
    let remove_lines = edge_lines(&remove);
    assert!(remove_lines.len() < none_lines.len());
    for line in remove_lines {
        assert!(none_lines.contains(&line));
    }
}

#[test]
fn test_parallel_edges_render_twice() {
    let graph = graph_from(&[("A", "B"), ("B", "C"), ("A", "C"), ("A", "C")]);
    let chart = render_flowchart(&graph, GraphDirection::LR, ReductionAction::Color);

    let lines = edge_lines(&chart);
    assert_eq!(lines.iter().filter(|l| **l == "A --> C").count(), 2);
    assert_eq!(
        directive_lines(&chart),
        vec!["linkStyle 2,3 stroke:#f00,stroke-width:2px;"]
    );
}

#[test]
fn test_empty_graph_renders_header_only() {
    let chart = render_flowchart(&ProjectGraph::new(), GraphDirection::RL, ReductionAction::Color);
    assert_eq!(chart, "flowchart RL\n");
}

#[test]
fn test_remove_never_highlights_even_with_indices() {
    let reduced = ReducedEdges {
        edges: Vec::new(),
        highlighted: vec![0, 1],
    };
    let chart = render_reduced(&reduced, GraphDirection::TD, ReductionAction::Remove);
    assert!(directive_lines(&chart).is_empty());
}

// ============================================================================
// HTML document
// ============================================================================

#[test]
fn test_html_embeds_flowchart_verbatim() {
    let chart = "flowchart TD\nA --> B\n";
    let html = render_html(chart).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<pre class=\"mermaid\">\nflowchart TD\nA --> B\n\n    </pre>"));
    assert!(html.contains("<script type=\"module\">"));
    assert!(html.contains(&format!("import mermaid from '{}';", MERMAID_MODULE_URL)));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_render_document_combines_both_steps() {
    let graph = diamond();
    let html = render_document(&graph, GraphDirection::TD, ReductionAction::None).unwrap();
    let chart = render_flowchart(&graph, GraphDirection::TD, ReductionAction::None);

    assert_eq!(html, render_html(&chart).unwrap());
}

#[test]
fn test_page_template_does_not_escape_markup() {
    let page = PageTemplate::new().unwrap();
    let html = page
        .render("flowchart LR\nA --> B\nlinkStyle 0 stroke:#f00,stroke-width:2px;\n")
        .unwrap();

    assert!(html.contains("A --> B\n"));
    assert!(!html.contains("&gt;"));
    assert!(html.contains("linkStyle 0 stroke:#f00,stroke-width:2px;"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn test_page_template_renders_exact_document() {
    let html = render_html("flowchart TD\n").unwrap();
    assert_eq!(
        html,
        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             \x20 <body>\n\
             \x20   <pre class=\"mermaid\">\n\
             flowchart TD\n\
             \n\
             \x20   </pre>\n\
             \x20   <script type=\"module\">\n\
             \x20     import mermaid from '{}';\n\
             \x20   </script>\n\
             \x20 </body>\n\
             </html>\n",
            MERMAID_MODULE_URL
        )
    );
}
