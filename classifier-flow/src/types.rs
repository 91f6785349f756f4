use crate::error::ClassifierError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Body sent to the classification endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub customer_message: String,
}

impl ClassificationRequest {
    /// Build a request from raw user input.
    ///
    /// Surrounding whitespace is trimmed; `None` is returned when nothing is left.
    pub fn from_input(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                customer_message: trimmed.to_string(),
            })
        }
    }
}

/// Successful classification returned by the backend.
///
/// Values are opaque; no check is made against a known set of intents or agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResponse {
    pub intent: String,
    pub recommended_agent: String,
    /// Echo of the submitted message, when the backend includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The four fixed stages shown while a message is processed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FlowStep {
    Received,
    Analyzing,
    Classifying,
    Routing,
}

impl FlowStep {
    /// All steps in flow order
    pub const ALL: [FlowStep; 4] = [
        FlowStep::Received,
        FlowStep::Analyzing,
        FlowStep::Classifying,
        FlowStep::Routing,
    ];

    /// 1-based position of the step
    pub fn number(self) -> u8 {
        match self {
            FlowStep::Received => 1,
            FlowStep::Analyzing => 2,
            FlowStep::Classifying => 3,
            FlowStep::Routing => 4,
        }
    }

    /// Look up a step by its 1-based position
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(FlowStep::Received),
            2 => Some(FlowStep::Analyzing),
            3 => Some(FlowStep::Classifying),
            4 => Some(FlowStep::Routing),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlowStep::Received => "Message Received",
            FlowStep::Analyzing => "AI Analysis",
            FlowStep::Classifying => "Intent Classification",
            FlowStep::Routing => "Agent Assignment",
        }
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl fmt::Display for FlowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Visual status of a single flow step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepStatus {
    #[default]
    Idle,
    Active,
    Completed,
}

/// Display-ready result of a classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultFields {
    pub intent: String,
    pub agent: String,
    pub processing_time: String,
}

impl ResultFields {
    /// Format raw backend values and the elapsed time for display
    pub fn format(intent: &str, agent: &str, elapsed: Duration) -> Self {
        Self {
            intent: format_intent(intent),
            agent: format_agent(agent),
            processing_time: format_processing_time(elapsed),
        }
    }
}

/// `billing_issue` becomes `BILLING ISSUE`; hyphens are kept
pub fn format_intent(raw: &str) -> String {
    raw.replace('_', " ").to_uppercase()
}

/// `tier-2-support` becomes `TIER 2 SUPPORT`; underscores are kept
pub fn format_agent(raw: &str) -> String {
    raw.replace('-', " ").to_uppercase()
}

/// Seconds with two decimals and a trailing `s`
pub fn format_processing_time(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}

/// Stages of a single `classify` attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifyPhase {
    #[default]
    Idle,
    Validating,
    StepReceived,
    StepAnalyzing,
    StepClassifying,
    StepRouting,
    Done,
    Error,
}

/// How a `classify` attempt ended
#[derive(Debug)]
pub enum ClassifyOutcome {
    /// The message input is not present in the view; nothing happened
    Unavailable,
    /// The message was empty; no request was sent
    Rejected(ClassifierError),
    /// Results were rendered
    Completed(ResultFields),
    /// The request or response failed; the flow was reset
    Failed(ClassifierError),
}

impl ClassifyOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ClassifyOutcome::Completed(_))
    }

    pub fn fields(&self) -> Option<&ResultFields> {
        match self {
            ClassifyOutcome::Completed(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClassifierError> {
        match self {
            ClassifyOutcome::Rejected(err) | ClassifyOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}
