use crate::ui;
use classifier_flow::{FlowStep, FlowView, ResultFields, StepStatus};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
struct ConsoleState {
    input: String,
    spinner: Option<(FlowStep, ProgressBar)>,
    result: Option<ResultFields>,
    alerts: Vec<String>,
}

/// Console rendering of the classification flow.
///
/// Each active step gets a spinner that turns into a ✅ line when the step
/// completes. Alerts are collected, not printed, so the caller decides how to
/// report them.
pub struct ConsoleView {
    show_progress: bool,
    state: Mutex<ConsoleState>,
}

impl ConsoleView {
    pub fn new(message: &str, show_progress: bool) -> Self {
        Self {
            show_progress,
            state: Mutex::new(ConsoleState {
                input: message.to_string(),
                ..ConsoleState::default()
            }),
        }
    }

    pub fn result(&self) -> Option<ResultFields> {
        self.lock().result.clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ConsoleState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn spinner(step: FlowStep) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.set_message(step.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

impl FlowView for ConsoleView {
    fn input_value(&self) -> Option<String> {
        Some(self.lock().input.clone())
    }

    fn set_input_value(&self, value: &str) {
        self.lock().input = value.to_string();
    }

    fn set_step_status(&self, step: FlowStep, status: StepStatus) {
        if !self.show_progress {
            return;
        }

        let mut state = self.lock();
        match status {
            StepStatus::Active => {
                if let Some((_, previous)) = state.spinner.take() {
                    previous.finish_and_clear();
                }
                state.spinner = Some((step, Self::spinner(step)));
            }
            StepStatus::Completed => {
                if let Some((active, pb)) = state.spinner.take() {
                    if active == step {
                        pb.finish_and_clear();
                    } else {
                        state.spinner = Some((active, pb));
                    }
                }
                ui::step_done(step);
            }
            StepStatus::Idle => {
                if matches!(&state.spinner, Some((active, _)) if *active == step) {
                    if let Some((_, pb)) = state.spinner.take() {
                        pb.finish_and_clear();
                    }
                }
            }
        }
    }

    fn show_result(&self, fields: &ResultFields) {
        self.lock().result = Some(fields.clone());
    }

    fn hide_result(&self) {
        self.lock().result = None;
    }

    fn set_busy(&self, busy: bool) {
        tracing::trace!(busy, "console busy state");
    }

    fn alert(&self, message: &str) {
        self.lock().alerts.push(message.to_string());
    }
}
