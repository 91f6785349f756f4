use crate::error::{ClassifierError, Result};
use crate::traits::{ClassifierClient, FlowView};
use crate::types::{
    ClassificationRequest, ClassificationResponse, FlowStep, ResultFields, StepStatus,
};
use std::sync::Mutex;

/// Mock classification client for testing
pub struct MockClassifierClient {
    pub response: Option<ClassificationResponse>,
    pub failure_status: Option<u16>,
    pub requests: Mutex<Vec<ClassificationRequest>>,
}

impl MockClassifierClient {
    pub fn new() -> Self {
        Self {
            response: None,
            failure_status: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, intent: &str, agent: &str) -> Self {
        self.response = Some(ClassificationResponse {
            intent: intent.to_string(),
            recommended_agent: agent.to_string(),
            message: None,
        });
        self
    }

    pub fn with_status_failure(mut self, status: u16) -> Self {
        self.failure_status = Some(status);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for MockClassifierClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierClient for MockClassifierClient {
    async fn classify(&self, request: &ClassificationRequest) -> Result<ClassificationResponse> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(status) = self.failure_status {
            return Err(ClassifierError::http_status(status, None));
        }

        self.response
            .clone()
            .ok_or_else(|| ClassifierError::invalid_response("mock has no response"))
    }
}

/// Everything a [`RecordingView`] saw, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    SetInput(String),
    Step(FlowStep, StepStatus),
    ShowResult(ResultFields),
    HideResult,
    Busy(bool),
    Alert(String),
}

/// View that records every call
pub struct RecordingView {
    pub input: Option<String>,
    pub trigger: bool,
    pub events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn with_input(input: &str) -> Self {
        Self {
            input: Some(input.to_string()),
            trigger: true,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn without_input() -> Self {
        Self {
            input: None,
            trigger: true,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn without_trigger(mut self) -> Self {
        self.trigger = false;
        self
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl FlowView for RecordingView {
    fn input_value(&self) -> Option<String> {
        self.input.clone()
    }

    fn has_trigger(&self) -> bool {
        self.trigger
    }

    fn set_input_value(&self, value: &str) {
        self.record(ViewEvent::SetInput(value.to_string()));
    }

    fn set_step_status(&self, step: FlowStep, status: StepStatus) {
        self.record(ViewEvent::Step(step, status));
    }

    fn show_result(&self, fields: &ResultFields) {
        self.record(ViewEvent::ShowResult(fields.clone()));
    }

    fn hide_result(&self) {
        self.record(ViewEvent::HideResult);
    }

    fn set_busy(&self, busy: bool) {
        self.record(ViewEvent::Busy(busy));
    }

    fn alert(&self, message: &str) {
        self.record(ViewEvent::Alert(message.to_string()));
    }
}
