//! Status display for user feedback
//!
//! User-facing lines go to stdout (or stderr for warnings); diagnostics stay
//! in tracing.

use super::styling::StyleManager;

/// Status display manager for semantic user feedback
pub struct StatusDisplay<'a> {
    styling: &'a StyleManager,
}

impl<'a> StatusDisplay<'a> {
    pub(crate) fn new(styling: &'a StyleManager) -> Self {
        Self { styling }
    }

    /// Display a success status
    ///
    /// Output: `✓ Done!`
    pub fn success(&self, message: &str) {
        println!("{}", self.styling.format_success(message));
    }

    /// Display a warning status
    ///
    /// Output: `! project 'Broken' skipped: missing 'projectReferences'`
    pub fn warning(&self, message: &str) {
        eprintln!("{}", self.styling.format_warning(message));
    }

    /// Report where an output file was written
    ///
    /// Output: `Graph written to: /work/App.sln.html` with the path highlighted
    pub fn written(&self, label: &str, path: &str) {
        println!("{}", format_written(self.styling, label, path));
    }
}

/// Text of a "written to" line
pub fn format_written(styling: &StyleManager, label: &str, path: &str) -> String {
    format!("{} written to: {}", label, styling.style_highlight(path))
}

#[cfg(test)]
mod tests {
    include!("status.test.rs");
}
