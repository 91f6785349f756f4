//! TUI Design System and Theme
//!
//! This module provides consistent colors, styles, and UI components for the TUI

use crate::types::StepStatus;
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// TUI Color Scheme
pub struct TuiTheme;

impl TuiTheme {
    // Primary Colors
    pub const FOCUS: Color = Color::Rgb(97, 175, 239); // Bright Blue
    pub const SUCCESS: Color = Color::Rgb(152, 195, 121); // Green
    pub const WARNING: Color = Color::Rgb(229, 192, 123); // Yellow
    pub const ERROR: Color = Color::Rgb(224, 108, 117); // Red
    pub const INFO: Color = Color::Rgb(198, 120, 221); // Purple

    // UI Colors
    pub const TEXT_PRIMARY: Color = Color::Rgb(171, 178, 191); // Light Gray
    pub const TEXT_SECONDARY: Color = Color::Rgb(92, 99, 112); // Dark Gray
    pub const BORDER_NORMAL: Color = Color::Rgb(92, 99, 112);
    pub const BORDER_FOCUSED: Color = Color::Rgb(97, 175, 239);

    /// Get style for error messages
    pub fn error_style() -> Style {
        Style::default().fg(Self::ERROR).add_modifier(Modifier::BOLD)
    }

    /// Get style for warning messages
    pub fn warning_style() -> Style {
        Style::default().fg(Self::WARNING).add_modifier(Modifier::BOLD)
    }

    /// Get style for success messages
    pub fn success_style() -> Style {
        Style::default().fg(Self::SUCCESS).add_modifier(Modifier::BOLD)
    }

    /// Get style for info messages
    pub fn info_style() -> Style {
        Style::default().fg(Self::INFO)
    }

    /// Get style for primary text
    pub fn primary_text_style() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    /// Get style for secondary text
    pub fn secondary_text_style() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style for a flow step in the given status
    pub fn step_style(status: StepStatus) -> Style {
        match status {
            StepStatus::Idle => Self::secondary_text_style(),
            StepStatus::Active => Style::default()
                .fg(Self::WARNING)
                .add_modifier(Modifier::BOLD),
            StepStatus::Completed => Self::success_style(),
        }
    }

    /// Create a focused block with enhanced styling
    pub fn focused_block(title: &str) -> Block<'static> {
        Block::default()
            .title(format!(" {} {} ", UiSymbols::FOCUSED_INDICATOR, title))
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(Self::BORDER_FOCUSED)
                    .add_modifier(Modifier::BOLD),
            )
            .title_style(Style::default().fg(Self::FOCUS).add_modifier(Modifier::BOLD))
    }

    /// Create a normal block with standard styling
    pub fn normal_block(title: &str) -> Block<'static> {
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Self::BORDER_NORMAL))
            .title_style(Style::default().fg(Self::TEXT_PRIMARY))
    }

    /// Block for a flow step, bordered in the step's status color
    pub fn step_block(title: &str, status: StepStatus) -> Block<'static> {
        let border = match status {
            StepStatus::Idle => Style::default().fg(Self::BORDER_NORMAL),
            StepStatus::Active => Style::default().fg(Self::WARNING),
            StepStatus::Completed => Style::default().fg(Self::SUCCESS),
        };
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(border)
            .title_style(Self::step_style(status))
    }

    /// Create an action button style
    pub fn button_style(enabled: bool) -> Style {
        if enabled {
            Style::default()
                .bg(Self::FOCUS)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::Black).fg(Self::TEXT_SECONDARY)
        }
    }
}

/// UI Symbols for consistent iconography
pub struct UiSymbols;

impl UiSymbols {
    pub const FOCUSED_INDICATOR: &'static str = "►";

    // Status symbols
    pub const SUCCESS: &'static str = "✓";
    pub const ERROR: &'static str = "✗";
    pub const WARNING: &'static str = "⚠";
    pub const INFO: &'static str = "ℹ";
    pub const HELP: &'static str = "❓";

    // Step symbols
    pub const IDLE: &'static str = "○";
    pub const ACTIVE: &'static str = "◉";
    pub const COMPLETED: &'static str = "✓";

    pub fn step(status: StepStatus) -> &'static str {
        match status {
            StepStatus::Idle => Self::IDLE,
            StepStatus::Active => Self::ACTIVE,
            StepStatus::Completed => Self::COMPLETED,
        }
    }
}

/// Key hint formatting for consistent display
pub struct KeyHints;

impl KeyHints {
    /// Format a key hint with consistent styling
    pub fn format_key_hint(key: &str, description: &str) -> String {
        format!("[{}] {}", key, description)
    }

    /// Format multiple key hints separated by pipes
    pub fn format_key_hints(hints: &[(&str, &str)]) -> String {
        hints
            .iter()
            .map(|(key, desc)| Self::format_key_hint(key, desc))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub fn main_help() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Enter", "Classify"),
            ("F2-F9", "Examples"),
            ("Ctrl+L", "Reset"),
            ("Ctrl+U", "Clear"),
            ("F1", "Help"),
            ("Esc", "Quit"),
        ]
    }
}
