//! Headless page implementing the widget's DOM contract
//!
//! A [`PageView`] holds the state of every element the widget touches, keyed by
//! the same identifiers the web page uses. Elements left out of the
//! [`PageLayout`] behave like missing DOM nodes: reads return nothing and
//! writes are ignored.

use crate::traits::FlowView;
use crate::types::{FlowStep, ResultFields, StepStatus};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

/// Trigger label while idle
pub const TRIGGER_LABEL: &str = "🚀 Classify & Route Message";
/// Trigger label while a request is in flight
pub const BUSY_LABEL: &str = "Processing...";

/// Identifiers of the page elements the widget reads or writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementId {
    CustomerMessage,
    ClassifyButton,
    Step(FlowStep),
    ResultPanel,
    DetectedIntent,
    AssignedAgent,
    ProcessingTime,
}

impl ElementId {
    /// Every element of a complete page
    pub fn all() -> Vec<ElementId> {
        let mut ids = vec![ElementId::CustomerMessage, ElementId::ClassifyButton];
        ids.extend(FlowStep::ALL.iter().map(|step| ElementId::Step(*step)));
        ids.extend([
            ElementId::ResultPanel,
            ElementId::DetectedIntent,
            ElementId::AssignedAgent,
            ElementId::ProcessingTime,
        ]);
        ids
    }

    /// The element's id attribute on the web page
    pub fn dom_id(&self) -> String {
        match self {
            ElementId::CustomerMessage => "customerMessage".to_string(),
            ElementId::ClassifyButton => "classifyBtn".to_string(),
            ElementId::Step(step) => format!("step{}", step.number()),
            ElementId::ResultPanel => "resultPanel".to_string(),
            ElementId::DetectedIntent => "detectedIntent".to_string(),
            ElementId::AssignedAgent => "assignedAgent".to_string(),
            ElementId::ProcessingTime => "processingTime".to_string(),
        }
    }

    /// Parse an id attribute back into an element
    pub fn from_dom_id(id: &str) -> Option<ElementId> {
        ElementId::all().into_iter().find(|element| element.dom_id() == id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dom_id())
    }
}

/// Which elements exist on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    present: BTreeSet<ElementId>,
}

impl PageLayout {
    /// A page with every element present
    pub fn full() -> Self {
        Self {
            present: ElementId::all().into_iter().collect(),
        }
    }

    /// A page with no elements at all
    pub fn empty() -> Self {
        Self {
            present: BTreeSet::new(),
        }
    }

    pub fn with(mut self, element: ElementId) -> Self {
        self.present.insert(element);
        self
    }

    pub fn without(mut self, element: ElementId) -> Self {
        self.present.remove(&element);
        self
    }

    pub fn contains(&self, element: ElementId) -> bool {
        self.present.contains(&element)
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::full()
    }
}

/// Point-in-time copy of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    /// `None` when the message input is absent
    pub input: Option<String>,
    pub trigger_enabled: bool,
    pub trigger_label: String,
    /// Status of each step, in flow order
    pub steps: [StepStatus; 4],
    pub result_visible: bool,
    pub detected_intent: String,
    pub assigned_agent: String,
    pub processing_time: String,
    /// Every alert raised so far, oldest first
    pub alerts: Vec<String>,
}

impl PageSnapshot {
    pub fn step(&self, step: FlowStep) -> StepStatus {
        self.steps[step.index()]
    }

    pub fn all_steps_idle(&self) -> bool {
        self.steps.iter().all(|status| *status == StepStatus::Idle)
    }

    pub fn is_busy(&self) -> bool {
        !self.trigger_enabled
    }
}

#[derive(Debug)]
struct PageState {
    input: String,
    trigger_enabled: bool,
    trigger_label: String,
    steps: [StepStatus; 4],
    result_visible: bool,
    detected_intent: String,
    assigned_agent: String,
    processing_time: String,
    alerts: Vec<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            input: String::new(),
            trigger_enabled: true,
            trigger_label: TRIGGER_LABEL.to_string(),
            steps: [StepStatus::Idle; 4],
            result_visible: false,
            detected_intent: String::new(),
            assigned_agent: String::new(),
            processing_time: String::new(),
            alerts: Vec::new(),
        }
    }
}

/// In-memory page that can be shared between the widget and a renderer
#[derive(Debug)]
pub struct PageView {
    layout: PageLayout,
    state: Mutex<PageState>,
}

impl PageView {
    /// Create a page with every element present
    pub fn new() -> Self {
        Self::with_layout(PageLayout::full())
    }

    pub fn with_layout(layout: PageLayout) -> Self {
        Self {
            layout,
            state: Mutex::new(PageState::default()),
        }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let state = self.lock();
        PageSnapshot {
            input: self
                .layout
                .contains(ElementId::CustomerMessage)
                .then(|| state.input.clone()),
            trigger_enabled: state.trigger_enabled,
            trigger_label: state.trigger_label.clone(),
            steps: state.steps,
            result_visible: state.result_visible,
            detected_intent: state.detected_intent.clone(),
            assigned_agent: state.assigned_agent.clone(),
            processing_time: state.processing_time.clone(),
            alerts: state.alerts.clone(),
        }
    }

    /// Append a character to the message input
    pub fn push_input(&self, c: char) {
        if self.layout.contains(ElementId::CustomerMessage) {
            self.lock().input.push(c);
        }
    }

    /// Remove the last character of the message input
    pub fn pop_input(&self) {
        if self.layout.contains(ElementId::CustomerMessage) {
            self.lock().input.pop();
        }
    }

    /// Number of alerts raised so far
    pub fn alert_count(&self) -> usize {
        self.lock().alerts.len()
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        // state is plain data, so a poisoned lock is still usable
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for PageView {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowView for PageView {
    fn input_value(&self) -> Option<String> {
        if self.layout.contains(ElementId::CustomerMessage) {
            Some(self.lock().input.clone())
        } else {
            None
        }
    }

    fn has_trigger(&self) -> bool {
        self.layout.contains(ElementId::ClassifyButton)
    }

    fn set_input_value(&self, value: &str) {
        if self.layout.contains(ElementId::CustomerMessage) {
            self.lock().input = value.to_string();
        }
    }

    fn set_step_status(&self, step: FlowStep, status: StepStatus) {
        if self.layout.contains(ElementId::Step(step)) {
            self.lock().steps[step.index()] = status;
        }
    }

    fn show_result(&self, fields: &ResultFields) {
        let mut state = self.lock();
        if self.layout.contains(ElementId::DetectedIntent) {
            state.detected_intent = fields.intent.clone();
        }
        if self.layout.contains(ElementId::AssignedAgent) {
            state.assigned_agent = fields.agent.clone();
        }
        if self.layout.contains(ElementId::ProcessingTime) {
            state.processing_time = fields.processing_time.clone();
        }
        if self.layout.contains(ElementId::ResultPanel) {
            state.result_visible = true;
        }
    }

    fn hide_result(&self) {
        if self.layout.contains(ElementId::ResultPanel) {
            self.lock().result_visible = false;
        }
    }

    fn set_busy(&self, busy: bool) {
        if !self.layout.contains(ElementId::ClassifyButton) {
            return;
        }
        let mut state = self.lock();
        state.trigger_enabled = !busy;
        state.trigger_label = if busy { BUSY_LABEL } else { TRIGGER_LABEL }.to_string();
    }

    fn alert(&self, message: &str) {
        self.lock().alerts.push(message.to_string());
    }
}
