use crate::error::Result;
use crate::types::{
    ClassificationRequest, ClassificationResponse, FlowStep, ResultFields, StepStatus,
};
use std::future::Future;
use std::sync::Arc;

/// Trait for classification backends
pub trait ClassifierClient: Send + Sync {
    /// Classify a single customer message
    fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> impl Future<Output = Result<ClassificationResponse>> + Send;
}

/// Everything the classification workflow needs from a user interface.
///
/// Implementations must tolerate missing elements: writes to an absent
/// element are silent no-ops.
pub trait FlowView: Send + Sync {
    /// Current text of the message input, or `None` if there is no input
    fn input_value(&self) -> Option<String>;

    /// Whether the trigger control exists
    fn has_trigger(&self) -> bool {
        true
    }

    fn set_input_value(&self, value: &str);

    fn set_step_status(&self, step: FlowStep, status: StepStatus);

    /// Write the result fields and reveal the result panel
    fn show_result(&self, fields: &ResultFields);

    fn hide_result(&self);

    /// Disable (busy) or re-enable the trigger control
    fn set_busy(&self, busy: bool);

    /// Surface a message to the user
    fn alert(&self, message: &str);
}

impl<T: FlowView + ?Sized> FlowView for Arc<T> {
    fn input_value(&self) -> Option<String> {
        (**self).input_value()
    }

    fn has_trigger(&self) -> bool {
        (**self).has_trigger()
    }

    fn set_input_value(&self, value: &str) {
        (**self).set_input_value(value)
    }

    fn set_step_status(&self, step: FlowStep, status: StepStatus) {
        (**self).set_step_status(step, status)
    }

    fn show_result(&self, fields: &ResultFields) {
        (**self).show_result(fields)
    }

    fn hide_result(&self) {
        (**self).hide_result()
    }

    fn set_busy(&self, busy: bool) {
        (**self).set_busy(busy)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}
