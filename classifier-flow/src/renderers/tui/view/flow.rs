use crate::page::PageSnapshot;
use crate::renderers::tui::theme::{TuiTheme, UiSymbols};
use crate::types::FlowStep;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::*,
    widgets::Paragraph,
};

/// Draw the four flow steps side by side
pub fn draw_flow_panel(f: &mut Frame, snapshot: &PageSnapshot, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (step, column) in FlowStep::ALL.iter().zip(columns.iter()) {
        let status = snapshot.step(*step);
        let body = format!("{}\n{}", UiSymbols::step(status), step.label());
        let cell = Paragraph::new(body)
            .style(TuiTheme::step_style(status))
            .alignment(Alignment::Center)
            .block(TuiTheme::step_block(&format!("Step {}", step.number()), status));
        f.render_widget(cell, *column);
    }
}
