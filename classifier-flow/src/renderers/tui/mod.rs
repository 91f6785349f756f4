//! Terminal User Interface for the classification flow
//!
//! This module hosts the widget on a headless page and renders that page with
//! ratatui, so typing, examples and the step animation behave like the web page.

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod events;
#[cfg(feature = "tui")]
pub mod exec;
#[cfg(feature = "tui")]
pub mod msg;
#[cfg(feature = "tui")]
pub mod theme;
#[cfg(feature = "tui")]
pub mod update;
#[cfg(feature = "tui")]
pub mod view;

#[cfg(feature = "tui")]
pub use app::TuiApp;

use crate::config::ClassifierConfig;
#[cfg(not(feature = "tui"))]
use crate::error::ClassifierError;
use crate::error::Result;

#[cfg(feature = "tui")]
use crate::{error::ClassifierError, page::PageView, PageWidget};

#[cfg(feature = "tui")]
use ratatui::{backend::CrosstermBackend, Terminal};

#[cfg(feature = "tui")]
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

#[cfg(feature = "tui")]
use std::{
    io::{self, Stdout},
    sync::Arc,
};

/// Interactive renderer for the classification flow
pub struct TuiRenderer {
    #[cfg_attr(not(feature = "tui"), allow(dead_code))]
    config: ClassifierConfig,
}

impl TuiRenderer {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }
}

#[cfg(feature = "tui")]
impl TuiRenderer {
    /// Run the interface until the user quits
    pub fn run(&self) -> Result<()> {
        let page = Arc::new(PageView::new());
        let widget = Arc::new(crate::page_widget(&self.config, page.clone())?);
        let app = TuiApp::new(page, &self.config);

        let mut terminal = Self::setup_terminal()?;
        let result = Self::run_app(&mut terminal, app, widget);

        // Always try to restore terminal, even if the app failed
        if let Err(restore_err) = Self::restore_terminal(&mut terminal) {
            eprintln!("Failed to restore terminal: {}", restore_err);
        }

        result
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()
            .map_err(|e| ClassifierError::general(format!("Failed to enable raw mode: {}", e)))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| {
            ClassifierError::general(format!("Failed to enter alternate screen: {}", e))
        })?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
            .map_err(|e| ClassifierError::general(format!("Failed to create terminal: {}", e)))
    }

    /// Restore terminal after TUI
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()
            .map_err(|e| ClassifierError::general(format!("Failed to disable raw mode: {}", e)))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(|e| {
            ClassifierError::general(format!("Failed to leave alternate screen: {}", e))
        })?;
        terminal
            .show_cursor()
            .map_err(|e| ClassifierError::general(format!("Failed to show cursor: {}", e)))?;
        Ok(())
    }

    /// Run the main TUI loop
    fn run_app(
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        mut app: TuiApp,
        widget: Arc<PageWidget>,
    ) -> Result<()> {
        let (tx, rx) = std::sync::mpsc::channel::<msg::ExecMsg>();
        let mut execution_handle: Option<std::thread::JoinHandle<()>> = None;

        loop {
            app.clear_old_feedback();

            while let Ok(message) = rx.try_recv() {
                update::update(&mut app, msg::Msg::Exec(message));
                if let Some(handle) = execution_handle.take() {
                    let _ = handle.join();
                }
            }

            terminal
                .draw(|f| view::draw(f, &app))
                .map_err(|e| ClassifierError::general(format!("Failed to draw: {}", e)))?;

            if let Some(msg) = events::next_msg(&app)? {
                match update::update(&mut app, msg) {
                    update::Effect::Quit => {
                        // no cancellation: a running attempt finishes on its own thread
                        if let Some(handle) = execution_handle.take() {
                            std::thread::spawn(move || {
                                let _ = handle.join();
                            });
                        }
                        break;
                    }
                    update::Effect::Classify => {
                        if execution_handle.is_none() {
                            execution_handle = Some(exec::spawn(tx.clone(), widget.clone()));
                        }
                    }
                    update::Effect::FillExample(text) => widget.fill_example(&text),
                    update::Effect::ResetFlow => widget.reset_flow(),
                    update::Effect::None => {}
                }
            }
        }
        Ok(())
    }
}

// Provide a stub when TUI feature is disabled
#[cfg(not(feature = "tui"))]
impl TuiRenderer {
    pub fn run(&self) -> Result<()> {
        Err(ClassifierError::general(
            "TUI feature not compiled. Use the classify command instead.",
        ))
    }
}
