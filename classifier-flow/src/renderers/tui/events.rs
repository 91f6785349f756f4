use super::app::TuiApp;
use super::msg::{InputMsg, Msg};
use crate::error::{ClassifierError, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Poll for input and map it to a message
pub fn next_msg(app: &TuiApp) -> Result<Option<Msg>> {
    if !event::poll(Duration::from_millis(100))
        .map_err(|e| ClassifierError::general(format!("Failed to poll events: {}", e)))?
    {
        return Ok(None);
    }

    match event::read()
        .map_err(|e| ClassifierError::general(format!("Failed to read event: {}", e)))?
    {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(app, key)),
        // resize and everything else just triggers a redraw
        _ => Ok(None),
    }
}

/// Map a key press to a message
pub fn map_key(app: &TuiApp, key: KeyEvent) -> Option<Msg> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if app.show_help {
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) => Some(Msg::ToggleHelp),
            KeyCode::Char('c') if ctrl => Some(Msg::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Msg::Quit),
        KeyCode::Char('c') if ctrl => Some(Msg::Quit),
        KeyCode::F(1) => Some(Msg::ToggleHelp),
        // plain Enter and Ctrl+Enter both submit
        KeyCode::Enter => Some(Msg::Classify),
        KeyCode::Char('l') if ctrl => Some(Msg::ResetFlow),
        KeyCode::Char('u') if ctrl => Some(Msg::Input(InputMsg::Clear)),
        KeyCode::F(n) if (2..=9).contains(&n) => Some(Msg::FillExample(usize::from(n - 2))),
        KeyCode::Backspace => Some(Msg::Input(InputMsg::Backspace)),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Msg::Input(InputMsg::Char(c)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassifierConfig;
    use crate::page::PageView;
    use std::sync::Arc;

    fn app() -> TuiApp {
        TuiApp::new(Arc::new(PageView::new()), &ClassifierConfig::default())
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_submit_keys() {
        let app = app();
        assert_eq!(
            map_key(&app, key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Msg::Classify)
        );
        assert_eq!(
            map_key(&app, key(KeyCode::Enter, KeyModifiers::CONTROL)),
            Some(Msg::Classify)
        );
    }

    #[test]
    fn test_text_entry() {
        let app = app();
        assert_eq!(
            map_key(&app, key(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(Msg::Input(InputMsg::Char('Q')))
        );
        assert_eq!(
            map_key(&app, key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Msg::Input(InputMsg::Char('q')))
        );
        assert_eq!(
            map_key(&app, key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Msg::Quit)
        );
    }

    #[test]
    fn test_example_keys() {
        let app = app();
        assert_eq!(
            map_key(&app, key(KeyCode::F(2), KeyModifiers::NONE)),
            Some(Msg::FillExample(0))
        );
        assert_eq!(
            map_key(&app, key(KeyCode::F(9), KeyModifiers::NONE)),
            Some(Msg::FillExample(7))
        );
        assert_eq!(map_key(&app, key(KeyCode::F(10), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        app.show_help = true;
        assert_eq!(map_key(&app, key(KeyCode::Char('a'), KeyModifiers::NONE)), None);
        assert_eq!(
            map_key(&app, key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Msg::ToggleHelp)
        );
    }
}
