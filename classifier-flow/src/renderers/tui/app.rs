use crate::config::{ClassifierConfig, ExampleMessage};
use crate::error::ClassifierError;
use crate::page::{PageSnapshot, PageView};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// UI feedback for user actions
#[derive(Debug, Clone)]
pub struct ActionFeedback {
    pub message: String,
    pub feedback_type: FeedbackType,
    pub timestamp: Instant,
    pub is_brief: bool,
}

/// Type of feedback to show different colors/styles
#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackType {
    Success,
    Warning,
    Error,
    Info,
}

/// Main TUI application state
pub struct TuiApp {
    /// Page shared with the classification widget
    pub page: Arc<PageView>,
    /// Sample messages bound to F2 and up
    pub examples: Vec<ExampleMessage>,
    /// Where requests go, for the title bar
    pub endpoint: String,
    /// Action feedback to show to user
    pub action_feedback: Option<ActionFeedback>,
    /// Whether to show help overlay
    pub show_help: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    /// A classification thread is running
    pub classification_running: bool,
    /// Alerts already turned into feedback
    alerts_seen: usize,
}

impl TuiApp {
    pub fn new(page: Arc<PageView>, config: &ClassifierConfig) -> Self {
        let endpoint = config
            .endpoint
            .url()
            .map(|url| url.to_string())
            .unwrap_or_else(|_| config.endpoint.base_url.clone());
        let alerts_seen = page.alert_count();

        Self {
            page,
            examples: config.examples.clone(),
            endpoint,
            action_feedback: None,
            show_help: false,
            should_quit: false,
            classification_running: false,
            alerts_seen,
        }
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.page.snapshot()
    }

    /// True while a request is in flight or the trigger is disabled
    pub fn is_busy(&self) -> bool {
        self.classification_running || self.page.snapshot().is_busy()
    }

    pub fn example(&self, index: usize) -> Option<&ExampleMessage> {
        self.examples.get(index)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Show feedback message to user
    pub fn show_feedback(&mut self, message: &str, feedback_type: FeedbackType) {
        self.action_feedback = Some(ActionFeedback {
            message: message.to_string(),
            feedback_type,
            timestamp: Instant::now(),
            is_brief: true,
        });
    }

    /// Show feedback that stays on screen longer
    pub fn show_persistent_feedback(&mut self, message: &str, feedback_type: FeedbackType) {
        self.action_feedback = Some(ActionFeedback {
            message: message.to_string(),
            feedback_type,
            timestamp: Instant::now(),
            is_brief: false,
        });
    }

    /// Clear old feedback messages
    pub fn clear_old_feedback(&mut self) {
        if let Some(ref feedback) = self.action_feedback {
            let max_age = if feedback.is_brief {
                Duration::from_secs(2)
            } else {
                Duration::from_secs(5)
            };
            if feedback.timestamp.elapsed() > max_age {
                self.action_feedback = None;
            }
        }
    }

    /// Turn alerts raised on the page since the last call into feedback
    pub fn sync_alerts(&mut self) {
        let snapshot = self.page.snapshot();
        if snapshot.alerts.len() <= self.alerts_seen {
            return;
        }
        if let Some(latest) = snapshot.alerts.last() {
            let feedback_type = if *latest == ClassifierError::EmptyMessage.to_string() {
                FeedbackType::Warning
            } else {
                FeedbackType::Error
            };
            self.show_persistent_feedback(latest, feedback_type);
        }
        self.alerts_seen = snapshot.alerts.len();
    }
}
