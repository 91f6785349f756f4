use crate::page::PageSnapshot;
use crate::renderers::tui::theme::TuiTheme;
use ratatui::{
    layout::Alignment,
    prelude::*,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Draw the result panel, or a placeholder while it is hidden
pub fn draw_result_panel(f: &mut Frame, snapshot: &PageSnapshot, area: Rect) {
    if !snapshot.result_visible {
        let placeholder = Paragraph::new(if snapshot.is_busy() {
            "Classifying..."
        } else {
            "Type a customer message and press Enter"
        })
        .style(TuiTheme::secondary_text_style())
        .alignment(Alignment::Center)
        .block(TuiTheme::normal_block("Result"));
        f.render_widget(placeholder, area);
        return;
    }

    let lines = vec![
        result_line("Detected Intent", &snapshot.detected_intent),
        result_line("Assigned Agent", &snapshot.assigned_agent),
        result_line("Processing Time", &snapshot.processing_time),
    ];

    let panel = Paragraph::new(lines).block(TuiTheme::focused_block("Result"));
    f.render_widget(panel, area);
}

fn result_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<17}", format!("{}:", label)), TuiTheme::secondary_text_style()),
        Span::styled(value.to_string(), TuiTheme::success_style()),
    ])
}
