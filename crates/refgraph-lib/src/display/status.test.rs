use super::*;

#[test]
fn test_status_output_does_not_panic() {
    let styling = StyleManager::new(false);
    let status = StatusDisplay::new(&styling);

    status.success("Done!");
    status.warning("skipped project");
    status.written("Graph", "/tmp/App.sln.html");
}

#[test]
fn test_written_line_without_color() {
    let styling = StyleManager::new(false);
    assert_eq!(
        format_written(&styling, "Graph", "/tmp/App.sln.html"),
        "Graph written to: /tmp/App.sln.html"
    );
}

#[test]
fn test_written_line_with_color_keeps_path() {
    let styling = StyleManager::new(true);
    let line = format_written(&styling, "Graph", "/tmp/App.sln.html");

    assert!(line.starts_with("Graph written to: "));
    assert!(line.contains("/tmp/App.sln.html"));
    assert!(line.contains('\u{1b}'));
}

#[test]
fn test_plain_symbols_without_color() {
    let styling = StyleManager::new(false);
    assert_eq!(styling.format_success("Done!"), "✓ Done!");
    assert_eq!(styling.format_warning("careful"), "! careful");
}
