//! Keyboard shortcut handling.
//!
//! Two modes: navigation, and entry while a field value is being typed.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::messages::View;

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextView,
    PrevView,
    ShowView(View),
    SelectPrev,
    SelectNext,
    Decrease,
    Increase,
    BeginEntry,
    Input(char),
    Backspace,
    Commit,
    Abort,
    Reset,
    Generate,
    ScrollUp,
    ScrollDown,
    None,
}

/// Map a key event to an action.
///
/// `editing` is true while a field value is being typed.
#[must_use]
pub fn map_key(key: KeyEvent, editing: bool) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    if editing {
        return map_entry_key(key);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Tab => KeyAction::NextView,
        KeyCode::BackTab => KeyAction::PrevView,
        KeyCode::Char('1') => KeyAction::ShowView(View::Dashboard),
        KeyCode::Char('2') => KeyAction::ShowView(View::Vacancy),
        KeyCode::Char('3') => KeyAction::ShowView(View::Roi),
        KeyCode::Up | KeyCode::Char('k') => KeyAction::SelectPrev,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::SelectNext,
        KeyCode::Left | KeyCode::Char('-') => KeyAction::Decrease,
        KeyCode::Right | KeyCode::Char('+') => KeyAction::Increase,
        KeyCode::Enter | KeyCode::Char('e') => KeyAction::BeginEntry,
        KeyCode::Char('r') => KeyAction::Reset,
        KeyCode::Char('g') => KeyAction::Generate,
        KeyCode::PageUp => KeyAction::ScrollUp,
        KeyCode::PageDown => KeyAction::ScrollDown,
        _ => KeyAction::None,
    }
}

fn map_entry_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '\'') => {
            KeyAction::Input(c)
        }
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Enter => KeyAction::Commit,
        KeyCode::Esc => KeyAction::Abort,
        _ => KeyAction::None,
    }
}
