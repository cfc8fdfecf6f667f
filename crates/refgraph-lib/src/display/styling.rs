//! Semantic styling for status output
//!
//! Wraps `console` styles so callers ask for intent (success, warning,
//! highlight) rather than colors. With color disabled every style is a no-op.

use console::Style;

/// Style manager resolving semantic intents to terminal styles
#[derive(Debug, Clone)]
pub struct StyleManager {
    color: bool,
}

impl StyleManager {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn apply(&self, style: Style, text: &str) -> String {
        style.force_styling(self.color).apply_to(text).to_string()
    }

    /// Style text with semantic success intent
    pub fn style_success(&self, text: &str) -> String {
        self.apply(Style::new().green(), text)
    }

    /// Style text with semantic warning intent
    pub fn style_warning(&self, text: &str) -> String {
        self.apply(Style::new().yellow(), text)
    }

    /// Style text that should stand out, such as file paths
    pub fn style_highlight(&self, text: &str) -> String {
        self.apply(Style::new().blue().bold(), text)
    }

    /// Format success message with symbol and styling
    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.style_success("✓"), message)
    }

    /// Format warning message with symbol and styling
    pub fn format_warning(&self, message: &str) -> String {
        format!("{} {}", self.style_warning("!"), message)
    }
}
