use crate::types::{ClassifyOutcome, ResultFields};

/// Top-level application messages (unidirectional flow)
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Quit,
    ToggleHelp,
    Input(InputMsg),
    /// Copy the example at this index into the message input
    FillExample(usize),
    ResetFlow,
    Classify,
    Exec(ExecMsg),
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMsg {
    Char(char),
    Backspace,
    Clear,
}

/// Messages sent back by the background classification thread
#[derive(Debug, Clone, PartialEq)]
pub enum ExecMsg {
    Finished(OutcomeSummary),
    Failed(String),
}

/// Cloneable summary of a [`ClassifyOutcome`]
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeSummary {
    Completed(ResultFields),
    Rejected,
    Failed(String),
    Unavailable,
}

impl From<&ClassifyOutcome> for OutcomeSummary {
    fn from(outcome: &ClassifyOutcome) -> Self {
        match outcome {
            ClassifyOutcome::Completed(fields) => OutcomeSummary::Completed(fields.clone()),
            ClassifyOutcome::Rejected(_) => OutcomeSummary::Rejected,
            ClassifyOutcome::Failed(err) => OutcomeSummary::Failed(err.to_string()),
            ClassifyOutcome::Unavailable => OutcomeSummary::Unavailable,
        }
    }
}
