use super::app::{FeedbackType, TuiApp};
use super::msg::{ExecMsg, InputMsg, Msg, OutcomeSummary};
use crate::traits::FlowView;

/// Side effects produced by the reducer. The main loop should execute them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Start a classification on a background thread
    Classify,
    /// Put this text into the message input through the widget
    FillExample(String),
    ResetFlow,
    Quit,
}

pub fn update(app: &mut TuiApp, msg: Msg) -> Effect {
    match msg {
        Msg::Quit => {
            app.quit();
            Effect::Quit
        }
        Msg::ToggleHelp => {
            app.toggle_help();
            Effect::None
        }
        Msg::Input(input) => {
            if app.is_busy() {
                return Effect::None;
            }
            match input {
                InputMsg::Char(c) => app.page.push_input(c),
                InputMsg::Backspace => app.page.pop_input(),
                InputMsg::Clear => app.page.set_input_value(""),
            }
            Effect::None
        }
        Msg::FillExample(index) => match app.example(index) {
            Some(example) if !app.is_busy() => {
                let text = example.message.clone();
                let label = format!("Loaded example: {}", example.label);
                app.show_feedback(&label, FeedbackType::Info);
                Effect::FillExample(text)
            }
            Some(_) => Effect::None,
            None => {
                app.show_feedback(
                    &format!("No example bound to F{}", index + 2),
                    FeedbackType::Warning,
                );
                Effect::None
            }
        },
        Msg::ResetFlow => {
            if app.is_busy() {
                app.show_feedback("Wait for the current classification to finish", FeedbackType::Warning);
                Effect::None
            } else {
                Effect::ResetFlow
            }
        }
        Msg::Classify => {
            if app.is_busy() {
                app.show_feedback("Classification already in progress", FeedbackType::Warning);
                Effect::None
            } else {
                app.classification_running = true;
                Effect::Classify
            }
        }
        Msg::Exec(em) => {
            app.classification_running = false;
            match em {
                ExecMsg::Finished(OutcomeSummary::Completed(fields)) => {
                    app.show_feedback(
                        &format!("Routed to {} in {}", fields.agent, fields.processing_time),
                        FeedbackType::Success,
                    );
                }
                ExecMsg::Finished(OutcomeSummary::Unavailable) => {
                    app.show_feedback("Message input not available", FeedbackType::Error);
                }
                // the widget raised an alert for these; sync_alerts shows it
                ExecMsg::Finished(OutcomeSummary::Rejected)
                | ExecMsg::Finished(OutcomeSummary::Failed(_)) => app.sync_alerts(),
                ExecMsg::Failed(err) => {
                    app.show_persistent_feedback(
                        &format!("Execution failed: {}", err),
                        FeedbackType::Error,
                    );
                }
            }
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassifierConfig;
    use crate::page::PageView;
    use crate::types::ResultFields;
    use std::sync::Arc;
    use std::time::Duration;

    fn app() -> TuiApp {
        TuiApp::new(Arc::new(PageView::new()), &ClassifierConfig::default())
    }

    #[test]
    fn test_typing_edits_page_input() {
        let mut app = app();
        update(&mut app, Msg::Input(InputMsg::Char('h')));
        update(&mut app, Msg::Input(InputMsg::Char('i')));
        update(&mut app, Msg::Input(InputMsg::Char('!')));
        update(&mut app, Msg::Input(InputMsg::Backspace));
        assert_eq!(app.snapshot().input.as_deref(), Some("hi"));

        update(&mut app, Msg::Input(InputMsg::Clear));
        assert_eq!(app.snapshot().input.as_deref(), Some(""));
    }

    #[test]
    fn test_classify_is_refused_while_busy() {
        let mut app = app();
        assert_eq!(update(&mut app, Msg::Classify), Effect::Classify);
        assert!(app.classification_running);

        assert_eq!(update(&mut app, Msg::Classify), Effect::None);
        let feedback = app.action_feedback.clone().unwrap();
        assert_eq!(feedback.feedback_type, FeedbackType::Warning);

        // input is locked while the request runs
        update(&mut app, Msg::Input(InputMsg::Char('x')));
        assert_eq!(app.snapshot().input.as_deref(), Some(""));
    }

    #[test]
    fn test_busy_trigger_blocks_classify() {
        let mut app = app();
        app.page.set_busy(true);
        assert_eq!(update(&mut app, Msg::Classify), Effect::None);
        assert_eq!(update(&mut app, Msg::ResetFlow), Effect::None);
    }

    #[test]
    fn test_fill_example() {
        let mut app = app();
        let expected = app.examples[1].message.clone();
        assert_eq!(
            update(&mut app, Msg::FillExample(1)),
            Effect::FillExample(expected)
        );
        assert_eq!(update(&mut app, Msg::FillExample(99)), Effect::None);
        assert!(app
            .action_feedback
            .unwrap()
            .message
            .contains("No example bound to F101"));
    }

    #[test]
    fn test_exec_completion_clears_running() {
        let mut app = app();
        update(&mut app, Msg::Classify);
        let fields = ResultFields::format("general", "general-agent", Duration::from_secs(3));
        update(
            &mut app,
            Msg::Exec(ExecMsg::Finished(OutcomeSummary::Completed(fields))),
        );
        assert!(!app.classification_running);
        let feedback = app.action_feedback.unwrap();
        assert_eq!(feedback.feedback_type, FeedbackType::Success);
        assert_eq!(feedback.message, "Routed to GENERAL AGENT in 3.00s");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert_eq!(update(&mut app, Msg::Quit), Effect::Quit);
        assert!(app.should_quit);
    }
}
