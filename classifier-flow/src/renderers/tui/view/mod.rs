use crate::page::PageSnapshot;
use crate::renderers::tui::{
    app::{ActionFeedback, FeedbackType, TuiApp},
    theme::{KeyHints, TuiTheme, UiSymbols},
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::*,
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

pub mod flow;
pub mod result;

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &TuiApp) {
    let snapshot = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(6), // Message input
            Constraint::Length(5), // Flow steps
            Constraint::Min(5),    // Results
            Constraint::Length(3), // Status/help bar
        ])
        .split(f.area());

    draw_title_bar(f, app, chunks[0]);
    draw_input_panel(f, &snapshot, chunks[1]);
    flow::draw_flow_panel(f, &snapshot, chunks[2]);
    result::draw_result_panel(f, &snapshot, chunks[3]);
    draw_status_bar(f, chunks[4]);

    if app.show_help {
        draw_help_overlay(f, app);
    }

    if let Some(ref feedback) = app.action_feedback {
        draw_feedback_popup(f, feedback);
    }
}

fn draw_title_bar(f: &mut Frame, app: &TuiApp, area: Rect) {
    let title_text = format!("Customer Message Classifier | {}", app.endpoint);
    let title = Paragraph::new(title_text)
        .style(TuiTheme::primary_text_style().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(TuiTheme::focused_block("Intent Router"));

    f.render_widget(title, area);
}

fn draw_input_panel(f: &mut Frame, snapshot: &PageSnapshot, area: Rect) {
    let block = TuiTheme::focused_block("Customer Message");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let text = match snapshot.input.as_deref() {
        Some(input) if snapshot.trigger_enabled => format!("{}▏", input),
        Some(input) => input.to_string(),
        None => "(message input unavailable)".to_string(),
    };
    let input = Paragraph::new(text)
        .style(TuiTheme::primary_text_style())
        .wrap(Wrap { trim: false });
    f.render_widget(input, rows[0]);

    let button = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", snapshot.trigger_label),
        TuiTheme::button_style(snapshot.trigger_enabled),
    )))
    .alignment(Alignment::Right);
    f.render_widget(button, rows[1]);
}

fn draw_status_bar(f: &mut Frame, area: Rect) {
    let key_hints = KeyHints::format_key_hints(&KeyHints::main_help());
    let help_title = format!("{} Quick Help", UiSymbols::HELP);
    let status = Paragraph::new(key_hints)
        .style(TuiTheme::secondary_text_style())
        .alignment(Alignment::Center)
        .block(TuiTheme::normal_block(&help_title))
        .wrap(Wrap { trim: true });

    f.render_widget(status, area);
}

fn draw_help_overlay(f: &mut Frame, app: &TuiApp) {
    let area = centered_rect(70, 60, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(format!("{} Keyboard shortcuts", UiSymbols::HELP)),
        Line::from(""),
        Line::from(KeyHints::format_key_hints(&KeyHints::main_help())),
        Line::from(""),
        Line::from("Examples:"),
    ];
    for (index, example) in app.examples.iter().enumerate().take(8) {
        lines.push(Line::from(format!(
            "  F{}  {}",
            index + 2,
            example.label
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Press F1 or Esc to close this help"));

    let help = Paragraph::new(lines)
        .style(TuiTheme::primary_text_style())
        .block(TuiTheme::focused_block("Help"))
        .wrap(Wrap { trim: false });
    f.render_widget(help, area);
}

fn draw_feedback_popup(f: &mut Frame, feedback: &ActionFeedback) {
    let area = centered_rect(60, 20, f.area());
    f.render_widget(Clear, area);

    let (symbol, style, title) = match feedback.feedback_type {
        FeedbackType::Success => (UiSymbols::SUCCESS, TuiTheme::success_style(), "Success"),
        FeedbackType::Warning => (UiSymbols::WARNING, TuiTheme::warning_style(), "Warning"),
        FeedbackType::Error => (UiSymbols::ERROR, TuiTheme::error_style(), "Error"),
        FeedbackType::Info => (UiSymbols::INFO, TuiTheme::info_style(), "Info"),
    };

    let popup = Paragraph::new(format!("{} {}", symbol, feedback.message))
        .style(style)
        .alignment(Alignment::Center)
        .block(TuiTheme::normal_block(title))
        .wrap(Wrap { trim: true });
    f.render_widget(popup, area);
}

/// Helper to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassifierConfig;
    use crate::page::PageView;
    use crate::traits::FlowView;
    use crate::types::{FlowStep, ResultFields, StepStatus};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::Duration;

    fn rendered_text(app: &TuiApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draws_flow_and_results() {
        let page = Arc::new(PageView::new());
        page.set_input_value("I was charged twice");
        page.set_step_status(FlowStep::Received, StepStatus::Completed);
        page.set_step_status(FlowStep::Analyzing, StepStatus::Active);
        page.show_result(&ResultFields::format(
            "billing_issue",
            "tier-2-support",
            Duration::from_millis(3400),
        ));
        let app = TuiApp::new(page, &ClassifierConfig::default());

        let text = rendered_text(&app);
        assert!(text.contains("I was charged twice"));
        assert!(text.contains("Message Received"));
        assert!(text.contains("BILLING ISSUE"));
        assert!(text.contains("TIER 2 SUPPORT"));
        assert!(text.contains("3.40s"));
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 20, outer);
        assert!(inner.width <= 60);
        assert!(inner.x >= 20);
    }
}
