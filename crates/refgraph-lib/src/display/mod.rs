//! Terminal display system
//!
//! Semantic APIs for user-facing communication. Separates concerns between
//! logging (tracing) and what the user is told about the run.

pub mod status;
pub mod styling;

pub use status::StatusDisplay;
pub use styling::StyleManager;

/// Display manager for one run
#[derive(Debug, Clone)]
pub struct Display {
    styling: StyleManager,
}

impl Display {
    /// Create a display; `color` selects ANSI styling
    pub fn new(color: bool) -> Self {
        Self {
            styling: StyleManager::new(color),
        }
    }

    /// Status updates with semantic intent
    pub fn status(&self) -> StatusDisplay<'_> {
        StatusDisplay::new(&self.styling)
    }
}
