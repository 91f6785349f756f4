//! The message classification workflow
//!
//! [`MessageClassifierWidget`] validates the message, walks the four flow
//! steps around a single classification request and renders the outcome. It
//! talks to the user interface only through [`FlowView`], so the same
//! workflow drives the headless page, the console view and the TUI.

use crate::config::FlowTiming;
use crate::error::{ClassifierError, Result};
use crate::traits::{ClassifierClient, FlowView};
use crate::types::{
    ClassificationRequest, ClassifyOutcome, ClassifyPhase, FlowStep, ResultFields, StepStatus,
};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use tracing::Instrument;

/// Releases the trigger control when dropped
struct BusyGuard<'a, V: FlowView> {
    view: &'a V,
}

impl<'a, V: FlowView> BusyGuard<'a, V> {
    fn engage(view: &'a V) -> Self {
        view.set_busy(true);
        Self { view }
    }
}

impl<V: FlowView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_busy(false);
    }
}

/// Drives one classification at a time through a [`FlowView`]
pub struct MessageClassifierWidget<C, V> {
    client: C,
    view: V,
    timing: FlowTiming,
    phase: Mutex<ClassifyPhase>,
}

impl<C: ClassifierClient, V: FlowView> MessageClassifierWidget<C, V> {
    /// Create a widget with the default step timing
    pub fn new(client: C, view: V) -> Self {
        Self {
            client,
            view,
            timing: FlowTiming::default(),
            phase: Mutex::new(ClassifyPhase::Idle),
        }
    }

    pub fn with_timing(mut self, timing: FlowTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn timing(&self) -> FlowTiming {
        self.timing
    }

    /// Phase the most recent attempt reached
    pub fn phase(&self) -> ClassifyPhase {
        *self.phase.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Put a sample message into the input
    pub fn fill_example(&self, text: &str) {
        self.view.set_input_value(text);
    }

    /// Return every step to idle and hide the result panel
    pub fn reset_flow(&self) {
        for step in FlowStep::ALL {
            self.view.set_step_status(step, StepStatus::Idle);
        }
        self.view.hide_result();
    }

    /// Mark step `number` (1-4) active; other numbers are ignored
    pub fn activate_step(&self, number: u8) {
        self.set_step(number, StepStatus::Active);
    }

    /// Mark step `number` (1-4) completed; other numbers are ignored
    pub fn complete_step(&self, number: u8) {
        self.set_step(number, StepStatus::Completed);
    }

    /// Format the backend values and show them
    pub fn render_results(&self, intent: &str, agent: &str, elapsed: Duration) -> ResultFields {
        let fields = ResultFields::format(intent, agent, elapsed);
        self.view.show_result(&fields);
        fields
    }

    /// Classify whatever is in the message input.
    ///
    /// Never returns an error: failures are surfaced through the view and
    /// reported in the returned [`ClassifyOutcome`]. The trigger control is
    /// re-enabled on every path once the flow has started.
    pub async fn classify(&self) -> ClassifyOutcome {
        let attempt = uuid::Uuid::new_v4();
        self.classify_attempt()
            .instrument(tracing::info_span!("classify", %attempt))
            .await
    }

    async fn classify_attempt(&self) -> ClassifyOutcome {
        self.transition(ClassifyPhase::Validating);

        let raw = match self.view.input_value() {
            Some(raw) if self.view.has_trigger() => raw,
            _ => {
                tracing::error!("required elements not found");
                self.transition(ClassifyPhase::Idle);
                return ClassifyOutcome::Unavailable;
            }
        };

        let Some(request) = ClassificationRequest::from_input(&raw) else {
            let err = ClassifierError::EmptyMessage;
            tracing::debug!("rejected empty message");
            self.view.alert(&err.to_string());
            self.transition(ClassifyPhase::Idle);
            return ClassifyOutcome::Rejected(err);
        };

        self.reset_flow();
        let started = Instant::now();
        let _busy = BusyGuard::engage(&self.view);

        match self.run_steps(&request, started).await {
            Ok(fields) => {
                self.transition(ClassifyPhase::Done);
                tracing::info!(
                    intent = %fields.intent,
                    agent = %fields.agent,
                    processing_time = %fields.processing_time,
                    "classification complete"
                );
                ClassifyOutcome::Completed(fields)
            }
            Err(err) => {
                tracing::debug!(error = %err, "classification failed");
                self.view.alert(&format!("Classification failed: {}", err));
                self.reset_flow();
                self.transition(ClassifyPhase::Error);
                ClassifyOutcome::Failed(err)
            }
        }
    }

    async fn run_steps(
        &self,
        request: &ClassificationRequest,
        started: Instant,
    ) -> Result<ResultFields> {
        self.transition(ClassifyPhase::StepReceived);
        self.activate(FlowStep::Received);
        pause(self.timing.received()).await;
        self.complete(FlowStep::Received);

        self.transition(ClassifyPhase::StepAnalyzing);
        self.activate(FlowStep::Analyzing);
        let response = self.client.classify(request).await?;
        pause(self.timing.analysis()).await;
        self.complete(FlowStep::Analyzing);

        self.transition(ClassifyPhase::StepClassifying);
        self.activate(FlowStep::Classifying);
        pause(self.timing.classification()).await;
        self.complete(FlowStep::Classifying);

        self.transition(ClassifyPhase::StepRouting);
        self.activate(FlowStep::Routing);
        pause(self.timing.routing()).await;
        self.complete(FlowStep::Routing);

        Ok(self.render_results(
            &response.intent,
            &response.recommended_agent,
            started.elapsed(),
        ))
    }

    fn set_step(&self, number: u8, status: StepStatus) {
        match FlowStep::from_number(number) {
            Some(step) => self.view.set_step_status(step, status),
            None => tracing::debug!(number, ?status, "ignoring unknown flow step"),
        }
    }

    fn activate(&self, step: FlowStep) {
        self.view.set_step_status(step, StepStatus::Active);
    }

    fn complete(&self, step: FlowStep) {
        self.view.set_step_status(step, StepStatus::Completed);
    }

    fn transition(&self, phase: ClassifyPhase) {
        tracing::debug!(?phase, "classify phase");
        *self.phase.lock().unwrap_or_else(|p| p.into_inner()) = phase;
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockClassifierClient, RecordingView, ViewEvent};

    fn widget(
        client: MockClassifierClient,
        view: RecordingView,
    ) -> MessageClassifierWidget<MockClassifierClient, RecordingView> {
        MessageClassifierWidget::new(client, view).with_timing(FlowTiming::instant())
    }

    #[tokio::test]
    async fn test_whitespace_is_rejected_without_request() {
        let widget = widget(
            MockClassifierClient::new().with_response("general", "general-agent"),
            RecordingView::with_input("   \n\t"),
        );

        let outcome = widget.classify().await;

        assert!(matches!(outcome, ClassifyOutcome::Rejected(ClassifierError::EmptyMessage)));
        assert_eq!(widget.client().request_count(), 0);
        assert_eq!(
            widget.view().events(),
            vec![ViewEvent::Alert("Please enter a customer message".to_string())]
        );
        assert_eq!(widget.phase(), ClassifyPhase::Idle);
    }

    #[tokio::test]
    async fn test_missing_input_does_nothing() {
        let widget = widget(MockClassifierClient::new(), RecordingView::without_input());

        let outcome = widget.classify().await;

        assert!(matches!(outcome, ClassifyOutcome::Unavailable));
        assert!(widget.view().events().is_empty());
        assert_eq!(widget.client().request_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_trigger_does_nothing() {
        let widget = widget(
            MockClassifierClient::new().with_response("general", "general-agent"),
            RecordingView::with_input("hello").without_trigger(),
        );

        let outcome = widget.classify().await;

        assert!(matches!(outcome, ClassifyOutcome::Unavailable));
        assert!(widget.view().events().is_empty());
        assert_eq!(widget.client().request_count(), 0);
        assert_eq!(widget.phase(), ClassifyPhase::Idle);
    }

    #[tokio::test]
    async fn test_success_event_sequence() {
        let widget = widget(
            MockClassifierClient::new().with_response("billing_issue", "tier-2-support"),
            RecordingView::with_input("  I was double charged  "),
        );

        let outcome = widget.classify().await;
        let fields = outcome.fields().cloned().unwrap();
        assert_eq!(fields.intent, "BILLING ISSUE");
        assert_eq!(fields.agent, "TIER 2 SUPPORT");

        let requests = widget.client().requests.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].customer_message, "I was double charged");

        let mut expected: Vec<ViewEvent> = FlowStep::ALL
            .iter()
            .map(|step| ViewEvent::Step(*step, StepStatus::Idle))
            .collect();
        expected.push(ViewEvent::HideResult);
        expected.push(ViewEvent::Busy(true));
        for step in FlowStep::ALL {
            expected.push(ViewEvent::Step(step, StepStatus::Active));
            expected.push(ViewEvent::Step(step, StepStatus::Completed));
        }
        expected.push(ViewEvent::ShowResult(fields));
        expected.push(ViewEvent::Busy(false));

        assert_eq!(widget.view().events(), expected);
        assert_eq!(widget.phase(), ClassifyPhase::Done);
    }

    #[tokio::test]
    async fn test_failure_resets_and_releases_trigger() {
        let widget = widget(
            MockClassifierClient::new().with_status_failure(500),
            RecordingView::with_input("where is my parcel"),
        );

        let outcome = widget.classify().await;
        assert!(matches!(
            outcome.error(),
            Some(ClassifierError::HttpStatus { status: 500, .. })
        ));
        assert_eq!(widget.phase(), ClassifyPhase::Error);

        let events = widget.view().events();
        let alert_at = events
            .iter()
            .position(|e| e == &ViewEvent::Alert("Classification failed: HTTP error! status: 500".to_string()))
            .unwrap();

        // step 2 was left active, then everything was reset after the alert
        assert!(events[..alert_at].contains(&ViewEvent::Step(FlowStep::Analyzing, StepStatus::Active)));
        assert!(!events[..alert_at].contains(&ViewEvent::Step(FlowStep::Analyzing, StepStatus::Completed)));
        let tail = &events[alert_at + 1..];
        assert_eq!(tail.len(), 6);
        assert_eq!(tail[4], ViewEvent::HideResult);
        assert_eq!(tail[5], ViewEvent::Busy(false));
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_timing_processing_time() {
        let widget = MessageClassifierWidget::new(
            MockClassifierClient::new().with_response("delivery_problems", "logistics-team"),
            RecordingView::with_input("late parcel"),
        );

        let outcome = widget.classify().await;
        assert_eq!(outcome.fields().unwrap().processing_time, "3.40s");
    }

    #[test]
    fn test_step_helpers_ignore_unknown_numbers() {
        let widget = widget(MockClassifierClient::new(), RecordingView::with_input(""));

        widget.activate_step(0);
        widget.complete_step(9);
        assert!(widget.view().events().is_empty());

        widget.activate_step(3);
        widget.complete_step(3);
        assert_eq!(
            widget.view().events(),
            vec![
                ViewEvent::Step(FlowStep::Classifying, StepStatus::Active),
                ViewEvent::Step(FlowStep::Classifying, StepStatus::Completed),
            ]
        );
    }

    #[test]
    fn test_fill_example_sets_input() {
        let widget = widget(MockClassifierClient::new(), RecordingView::with_input(""));
        widget.fill_example("Please cancel my order");
        assert_eq!(
            widget.view().events(),
            vec![ViewEvent::SetInput("Please cancel my order".to_string())]
        );
    }
}
