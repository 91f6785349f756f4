//! Renderers for classification outcomes
//!
//! Plain renderers turn a finished [`ClassifyOutcome`] into text; the `tui`
//! module hosts the interactive front end.

use crate::types::ClassifyOutcome;

/// Simple trait for rendering a classification outcome
pub trait OutputRenderer {
    /// Render the outcome to a string in the specific format
    fn render(&self, outcome: &ClassifyOutcome) -> String;
}

pub mod json;
pub mod text;
pub mod tui;

pub use json::JsonRenderer;
pub use text::TextRenderer;
pub use tui::TuiRenderer;
