//! Input mode system (vim-like mode switching)
//!
//! - Normal mode: navigation and per-screen shortcuts
//! - Insert mode: text input (chat question, form fields)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Insert,
}

impl InputMode {
    /// Mode indicator string for the status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
        }
    }

    /// Mode color for the status line
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Normal => Color::Blue,
            Self::Insert => Color::Green,
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Enter insert mode
    EnterInsert,
    /// Exit to normal mode
    ExitToNormal,
    /// Submit current input (Enter in Insert mode)
    Submit,
    /// Go back one screen (Esc in Normal mode)
    Back,
    /// Quit application
    Quit,
    /// Insert character
    InsertChar(char),
    /// Delete character (Backspace)
    DeleteChar,
    /// Move cursor left
    CursorLeft,
    /// Move cursor right
    CursorRight,
    /// Move to start of line
    CursorStart,
    /// Move to end of line
    CursorEnd,
    /// Move selection / scroll up
    Up,
    /// Move selection / scroll down
    Down,
    /// Previous carousel question / previous field
    Left,
    /// Next carousel question / next field
    Right,
    /// Next form field (Tab)
    NextField,
    /// Show help
    ShowHelp,
    /// Screen-specific shortcut key
    Key(char),
    /// No action
    None,
}

/// Maps key events to actions based on the current mode
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(mode: InputMode, key: KeyEvent) -> Action {
        match mode {
            InputMode::Normal => Self::handle_normal(key),
            InputMode::Insert => Self::handle_insert(key),
        }
    }

    fn handle_normal(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Char('i'), KeyModifiers::NONE) => Action::EnterInsert,
            (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Esc, _) => Action::Back,
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::Up,
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::Down,
            (KeyCode::Left, _) => Action::Left,
            (KeyCode::Right, _) => Action::Right,
            (KeyCode::Tab, _) => Action::NextField,
            (KeyCode::Char('?'), _) => Action::ShowHelp,
            (KeyCode::Enter, _) => Action::Submit,
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::Key(c),
            _ => Action::None,
        }
    }

    fn handle_insert(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Esc, _) => Action::ExitToNormal,
            (KeyCode::Enter, _) => Action::Submit,
            (KeyCode::Tab, _) => Action::NextField,
            (KeyCode::Char(c), _) => Action::InsertChar(c),
            (KeyCode::Backspace, _) => Action::DeleteChar,
            (KeyCode::Left, _) => Action::CursorLeft,
            (KeyCode::Right, _) => Action::CursorRight,
            (KeyCode::Home, _) => Action::CursorStart,
            (KeyCode::End, _) => Action::CursorEnd,
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default() {
        assert_eq!(InputMode::default(), InputMode::Normal);
    }

    #[test]
    fn test_mode_indicator() {
        assert_eq!(InputMode::Normal.indicator(), "NORMAL");
        assert_eq!(InputMode::Insert.indicator(), "INSERT");
    }

    #[test]
    fn test_normal_mode_key_handling() {
        let key = KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(InputMode::Normal, key), Action::EnterInsert);

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(InputMode::Normal, key), Action::Quit);

        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyHandler::handle(InputMode::Normal, key), Action::Quit);

        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(InputMode::Normal, key), Action::Back);

        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(InputMode::Normal, key), Action::Key('x'));
    }

    #[test]
    fn test_insert_mode_key_handling() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(
            KeyHandler::handle(InputMode::Insert, key),
            Action::InsertChar('a')
        );

        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(InputMode::Insert, key), Action::ExitToNormal);

        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(KeyHandler::handle(InputMode::Insert, key), Action::Submit);
    }
}
