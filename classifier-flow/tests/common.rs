//! Shared helpers for classifier-flow integration tests

#![allow(dead_code)]

use classifier_flow::{
    ClassifierConfig, EndpointConfig, FlowStep, FlowTiming, FlowView, HttpClassifierClient,
    MessageClassifierWidget, PageView, ResultFields, StepStatus,
};
use serde_json::json;
use std::sync::{Arc, Mutex};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const CLASSIFY_PATH: &str = "/api/classify";

/// Endpoint pointing at a mock server
pub fn endpoint_for(server: &MockServer) -> EndpointConfig {
    EndpointConfig {
        base_url: server.uri(),
        path: CLASSIFY_PATH.to_string(),
        timeout_seconds: Some(5),
    }
}

/// Configuration pointing at a mock server with no step delays
pub fn instant_config(server: &MockServer) -> ClassifierConfig {
    ClassifierConfig {
        endpoint: endpoint_for(server),
        timing: FlowTiming::instant(),
        ..ClassifierConfig::default()
    }
}

/// Widget over a shared page, wired to the mock server
pub fn page_widget(
    server: &MockServer,
) -> (
    MessageClassifierWidget<HttpClassifierClient, Arc<PageView>>,
    Arc<PageView>,
) {
    let page = Arc::new(PageView::new());
    let widget = classifier_flow::page_widget(&instant_config(server), page.clone())
        .expect("widget should build");
    (widget, page)
}

/// Mount a successful classification response
pub async fn mount_success(server: &MockServer, intent: &str, agent: &str) {
    Mock::given(method("POST"))
        .and(path(CLASSIFY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "intent": intent,
            "recommended_agent": agent,
            "message": "echo"
        })))
        .mount(server)
        .await;
}

/// Mount an error status with the backend's error body
pub async fn mount_status(server: &MockServer, status: u16, error: &str) {
    Mock::given(method("POST"))
        .and(path(CLASSIFY_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "error": error })))
        .mount(server)
        .await;
}

/// Step change recorded by [`StepLog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepChange {
    pub step: FlowStep,
    pub status: StepStatus,
}

/// View that wraps a page and logs every step change
pub struct StepLog {
    pub page: PageView,
    pub changes: Mutex<Vec<StepChange>>,
}

impl StepLog {
    pub fn with_input(input: &str) -> Self {
        let page = PageView::new();
        page.set_input_value(input);
        Self {
            page,
            changes: Mutex::new(Vec::new()),
        }
    }

    pub fn changes(&self) -> Vec<StepChange> {
        self.changes.lock().unwrap().clone()
    }
}

impl FlowView for StepLog {
    fn input_value(&self) -> Option<String> {
        self.page.input_value()
    }

    fn has_trigger(&self) -> bool {
        self.page.has_trigger()
    }

    fn set_input_value(&self, value: &str) {
        self.page.set_input_value(value)
    }

    fn set_step_status(&self, step: FlowStep, status: StepStatus) {
        self.changes.lock().unwrap().push(StepChange { step, status });
        self.page.set_step_status(step, status)
    }

    fn show_result(&self, fields: &ResultFields) {
        self.page.show_result(fields)
    }

    fn hide_result(&self) {
        self.page.hide_result()
    }

    fn set_busy(&self, busy: bool) {
        self.page.set_busy(busy)
    }

    fn alert(&self, message: &str) {
        self.page.alert(message)
    }
}
