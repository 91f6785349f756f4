//! JSON renderer for structured output

use super::OutputRenderer;
use crate::types::ClassifyOutcome;
use serde_json::{json, Value};

/// JSON renderer that produces structured JSON output
pub struct JsonRenderer {
    /// Whether to pretty-print the JSON output
    pub pretty: bool,
}

impl JsonRenderer {
    /// Create a new JSON renderer with pretty printing
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a JSON renderer with compact output
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    fn to_value(outcome: &ClassifyOutcome) -> Value {
        match outcome {
            ClassifyOutcome::Completed(fields) => json!({
                "status": "completed",
                "intent": fields.intent,
                "agent": fields.agent,
                "processing_time": fields.processing_time,
            }),
            ClassifyOutcome::Rejected(err) => json!({
                "status": "rejected",
                "error": err.to_string(),
            }),
            ClassifyOutcome::Failed(err) => json!({
                "status": "failed",
                "error": err.to_string(),
            }),
            ClassifyOutcome::Unavailable => json!({ "status": "unavailable" }),
        }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for JsonRenderer {
    fn render(&self, outcome: &ClassifyOutcome) -> String {
        let value = Self::to_value(outcome);
        if self.pretty {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
        } else {
            value.to_string()
        }
    }
}
