//! Plain text renderer

use super::OutputRenderer;
use crate::types::ClassifyOutcome;

/// Renders an outcome as aligned `label: value` lines
#[derive(Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl OutputRenderer for TextRenderer {
    fn render(&self, outcome: &ClassifyOutcome) -> String {
        match outcome {
            ClassifyOutcome::Completed(fields) => format!(
                "Detected Intent:  {}\nAssigned Agent:   {}\nProcessing Time:  {}",
                fields.intent, fields.agent, fields.processing_time
            ),
            ClassifyOutcome::Rejected(err) => err.to_string(),
            ClassifyOutcome::Failed(err) => format!("Classification failed: {}", err),
            ClassifyOutcome::Unavailable => "Message input not available".to_string(),
        }
    }
}
