//! Mermaid flowchart rendering
//!
//! The flowchart text is built from the reduced edge list and embedded in a
//! standalone HTML page rendered from an embedded handlebars template. The
//! page imports Mermaid from a CDN, which renders the chart when the file is
//! opened in a browser.

use crate::graph::{ProjectGraph, ReducedEdges, analyze_edges, apply_reduction};
use crate::primitives::{GraphDirection, ReductionAction};
use handlebars::Handlebars;
use serde::Serialize;
use std::fmt::Write;
use thiserror::Error;
use tracing::debug;

/// Mermaid ES module imported by the generated page
pub const MERMAID_MODULE_URL: &str =
    "https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.esm.min.mjs";

/// Style applied to highlighted edges
pub const HIGHLIGHT_STYLE: &str = "stroke:#f00,stroke-width:2px;";

/// Render the graph as Mermaid flowchart text
pub fn render_flowchart(
    graph: &ProjectGraph,
    direction: GraphDirection,
    action: ReductionAction,
) -> String {
    let analyzed = analyze_edges(graph);
    let reduced = apply_reduction(&analyzed, action);
    render_reduced(&reduced, direction, action)
}

/// Render an already reduced edge list as Mermaid flowchart text
pub fn render_reduced(
    reduced: &ReducedEdges,
    direction: GraphDirection,
    action: ReductionAction,
) -> String {
    let mut out = format!("flowchart {}\n", direction);

    for edge in &reduced.edges {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{} --> {}", edge.from, edge.to);
    }

    let wants_highlight = match action {
        ReductionAction::Color | ReductionAction::None => !reduced.highlighted.is_empty(),
        ReductionAction::Remove => false,
    };
    if wants_highlight {
        let indices: Vec<String> = reduced.highlighted.iter().map(|i| i.to_string()).collect();
        let _ = writeln!(out, "linkStyle {} {}", indices.join(","), HIGHLIGHT_STYLE);
    }

    debug!(
        %direction,
        edges = reduced.edges.len(),
        highlighted = reduced.highlighted.len(),
        "Rendered flowchart"
    );

    out
}

/// Name the page template is registered under
pub const PAGE_TEMPLATE: &str = "diagram.html";

/// Diagram page rendering errors
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template registration error: {message}")]
    RegistrationError { message: String },

    #[error("Template rendering error: {message}")]
    RenderError { message: String },
}

/// Variables available to the page template
#[derive(Debug, Serialize)]
struct PageContext<'a> {
    flowchart: &'a str,
    mermaid_url: &'a str,
}

/// Handlebars registry holding the embedded page template
pub struct PageTemplate {
    handlebars: Handlebars<'static>,
}

impl PageTemplate {
    /// Register the embedded page template
    pub fn new() -> Result<Self, TemplateError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars
            .register_template_string(
                PAGE_TEMPLATE,
                include_str!("../../templates/diagram.html.template"),
            )
            .map_err(|e| TemplateError::RegistrationError {
                message: format!("Failed to register template '{}': {}", PAGE_TEMPLATE, e),
            })?;

        Ok(Self { handlebars })
    }

    /// Embed flowchart text verbatim in the page
    pub fn render(&self, flowchart: &str) -> Result<String, TemplateError> {
        let context = PageContext {
            flowchart,
            mermaid_url: MERMAID_MODULE_URL,
        };
        self.handlebars
            .render(PAGE_TEMPLATE, &context)
            .map_err(|e| TemplateError::RenderError {
                message: format!("Failed to render template '{}': {}", PAGE_TEMPLATE, e),
            })
    }
}

/// Wrap flowchart text in a self-contained HTML page
pub fn render_html(flowchart: &str) -> Result<String, TemplateError> {
    PageTemplate::new()?.render(flowchart)
}

/// Render the complete HTML document for a graph
pub fn render_document(
    graph: &ProjectGraph,
    direction: GraphDirection,
    action: ReductionAction,
) -> Result<String, TemplateError> {
    render_html(&render_flowchart(graph, direction, action))
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
