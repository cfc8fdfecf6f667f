// Tests for restore graph parsing

use super::*;
use serde_json::json;

// ============================================================================
// Test Utilities
// ============================================================================

/// Minimal project entry with the given references and dependencies
fn project_entry(references: &[&str], dependencies: &[(&str, &str)]) -> Value {
    let refs: serde_json::Map<String, Value> = references
        .iter()
        .map(|r| (r.to_string(), json!({ "projectPath": r })))
        .collect();
    let deps: serde_json::Map<String, Value> = dependencies
        .iter()
        .map(|(name, version)| (name.to_string(), json!({ "target": "Package", "version": version })))
        .collect();

    json!({
        "restore": {
            "frameworks": {
                "net8.0": { "projectReferences": refs }
            }
        },
        "frameworks": {
            "net8.0": { "dependencies": deps }
        }
    })
}

fn document(entries: Vec<(&str, Value)>) -> Value {
    let mut restore = serde_json::Map::new();
    let mut projects = serde_json::Map::new();
    for (key, entry) in entries {
        restore.insert(key.to_string(), json!({}));
        projects.insert(key.to_string(), entry);
    }
    json!({ "format": 1, "restore": restore, "projects": projects })
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn test_project_display_name() {
    assert_eq!(project_display_name("/src/App/App.csproj"), "App");
    assert_eq!(project_display_name("C:\\src\\Core\\Core.csproj"), "Core");
    assert_eq!(project_display_name("My.Lib.Tests.csproj"), "My.Lib.Tests");
    assert_eq!(project_display_name("NoExtension"), "NoExtension");
}

#[test]
fn test_is_restore_graph() {
    assert!(is_restore_graph(Path::new("out/App.sln.rg")));
    assert!(!is_restore_graph(Path::new("App.sln")));
    assert!(!is_restore_graph(Path::new("App.csproj")));
}

#[test]
fn test_dependency_edge_mermaid_label() {
    let edge = DependencyEdge {
        project: "App".to_string(),
        dependency: "Serilog".to_string(),
        version: "[3.1.1, )".to_string(),
    };
    assert_eq!(edge.to_mermaid(), "App -->|\"[3.1.1, )\"| Serilog");
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_project_references() {
    let doc = document(vec![
        (
            "/src/App/App.csproj",
            project_entry(&["/src/Core/Core.csproj", "/src/Data/Data.csproj"], &[]),
        ),
        ("/src/Data/Data.csproj", project_entry(&["/src/Core/Core.csproj"], &[])),
        ("/src/Core/Core.csproj", project_entry(&[], &[])),
    ]);

    let parsed = parse_restore_document(&doc, GraphMode::Projects).unwrap();

    assert!(parsed.failures.is_empty());
    assert!(parsed.dependencies.is_empty());
    assert_eq!(parsed.graph.edge_count(), 3);
    let names: Vec<&str> = parsed.graph.nodes().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["App", "Core", "Data"]);
    assert_eq!(parsed.graph.predecessors("Core").unwrap(), vec!["App", "Data"]);
}

#[test]
fn test_document_key_order_is_preserved() {
    let text = r#"{
        "restore": { "/z/Zeta.csproj": {}, "/a/Alpha.csproj": {} },
        "projects": {
            "/a/Alpha.csproj": { "restore": { "frameworks": { "net8.0": { "projectReferences": {} } } } },
            "/z/Zeta.csproj": { "restore": { "frameworks": { "net8.0": { "projectReferences": {
                "/m/Mid.csproj": {}, "/b/Beta.csproj": {}
            } } } } }
        }
    }"#;

    let parsed = parse_restore_graph(text, GraphMode::Projects).unwrap();
    assert_eq!(parsed.graph.successors("Zeta").unwrap(), vec!["Mid", "Beta"]);
}

#[test]
fn test_malformed_project_is_skipped() {
    let doc = document(vec![
        ("/src/Broken/Broken.csproj", json!({ "restore": { "frameworks": { "net8.0": {} } } })),
        ("/src/App/App.csproj", project_entry(&["/src/Core/Core.csproj"], &[])),
    ]);

    let parsed = parse_restore_document(&doc, GraphMode::Projects).unwrap();

    assert_eq!(parsed.graph.edge_count(), 1);
    assert_eq!(parsed.graph.successors("App").unwrap(), vec!["Core"]);
    assert!(!parsed.graph.contains("Broken"));
    assert_eq!(
        parsed.failures,
        vec![ProjectFailure {
            key: "/src/Broken/Broken.csproj".to_string(),
            reason: "missing 'projectReferences'".to_string(),
        }]
    );
}

#[test]
fn test_project_missing_from_projects_is_skipped() {
    let mut doc = document(vec![("/src/App/App.csproj", project_entry(&["/src/Core/Core.csproj"], &[]))]);
    doc["restore"]["/src/Ghost/Ghost.csproj"] = json!({});

    let parsed = parse_restore_document(&doc, GraphMode::Projects).unwrap();

    assert_eq!(parsed.graph.edge_count(), 1);
    assert_eq!(parsed.failures.len(), 1);
    assert_eq!(parsed.failures[0].key, "/src/Ghost/Ghost.csproj");
}

#[test]
fn test_complete_mode_collects_dependencies_without_graphing() {
    let doc = document(vec![(
        "/src/App/App.csproj",
        project_entry(
            &["/src/Core/Core.csproj"],
            &[("Serilog", "[3.1.1, )"), ("Dapper", "[2.1.0, )")],
        ),
    )]);

    let parsed = parse_restore_document(&doc, GraphMode::Complete).unwrap();

    assert_eq!(parsed.graph.node_count(), 2);
    assert_eq!(parsed.graph.edge_count(), 1);
    assert!(!parsed.graph.contains("Serilog"));
    let labels: Vec<String> = parsed.dependencies.iter().map(|d| d.to_mermaid()).collect();
    assert_eq!(
        labels,
        vec![
            "App -->|\"[3.1.1, )\"| Serilog",
            "App -->|\"[2.1.0, )\"| Dapper",
        ]
    );
}

#[test]
fn test_projects_mode_ignores_dependencies() {
    let doc = document(vec![(
        "/src/App/App.csproj",
        project_entry(&[], &[("Serilog", "[3.1.1, )")]),
    )]);

    let parsed = parse_restore_document(&doc, GraphMode::Projects).unwrap();
    assert!(parsed.dependencies.is_empty());
}

#[test]
fn test_complete_mode_keeps_references_of_project_without_frameworks() {
    let doc = document(vec![(
        "/src/App/App.csproj",
        json!({
            "restore": { "frameworks": { "net8.0": { "projectReferences": { "/src/Core/Core.csproj": {} } } } }
        }),
    )]);

    let parsed = parse_restore_document(&doc, GraphMode::Complete).unwrap();

    assert_eq!(parsed.graph.successors("App").unwrap(), vec!["Core"]);
    assert_eq!(parsed.failures.len(), 1);
    assert_eq!(parsed.failures[0].reason, "missing 'frameworks' entry");
}

#[test]
fn test_complete_mode_without_dependencies_is_fine() {
    let doc = document(vec![(
        "/src/App/App.csproj",
        json!({
            "restore": { "frameworks": { "net8.0": { "projectReferences": {} } } },
            "frameworks": { "net8.0": {} }
        }),
    )]);

    let parsed = parse_restore_document(&doc, GraphMode::Complete).unwrap();
    assert!(parsed.failures.is_empty());
    assert!(parsed.dependencies.is_empty());
}

#[test]
fn test_missing_sections_are_fatal() {
    let no_restore = json!({ "projects": {} });
    let err = parse_restore_document(&no_restore, GraphMode::Projects).unwrap_err();
    assert!(matches!(err, RestoreGraphError::MissingSection { field: "restore" }));

    let no_projects = json!({ "restore": {} });
    let err = parse_restore_document(&no_projects, GraphMode::Projects).unwrap_err();
    assert!(matches!(err, RestoreGraphError::MissingSection { field: "projects" }));
}

#[test]
fn test_invalid_json_is_reported() {
    let err = parse_restore_graph("{ not json", GraphMode::Projects).unwrap_err();
    assert!(matches!(err, RestoreGraphError::JsonParseError { .. }));
}

#[test]
fn test_read_restore_graph_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("App.sln.rg");
    let doc = document(vec![("/src/App/App.csproj", project_entry(&["/src/Core/Core.csproj"], &[]))]);
    std::fs::write(&path, doc.to_string()).unwrap();

    let parsed = read_restore_graph(&path, GraphMode::Projects).unwrap();
    assert_eq!(parsed.graph.edge_count(), 1);

    let missing = read_restore_graph(&dir.path().join("missing.rg"), GraphMode::Projects);
    assert!(matches!(missing, Err(RestoreGraphError::FileReadError { .. })));
}
