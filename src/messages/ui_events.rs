//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Focus
    NextFocus,
    PrevFocus,
    FocusSearch,

    // Search input
    SearchChar(char),
    SearchBackspace,
    CursorLeft,
    CursorRight,

    // List navigation
    SelectPrev,
    SelectNext,

    // Row actions
    DeleteSelected,
    ToggleFavoriteSelected,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Which region of the view receives keys
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Focus {
    #[default]
    Search,
    Countries,
    Favorites,
}

impl Focus {
    pub fn next(&self) -> Focus {
        match self {
            Focus::Search => Focus::Countries,
            Focus::Countries => Focus::Favorites,
            Focus::Favorites => Focus::Search,
        }
    }

    pub fn prev(&self) -> Focus {
        match self {
            Focus::Search => Focus::Favorites,
            Focus::Countries => Focus::Search,
            Focus::Favorites => Focus::Countries,
        }
    }
}

/// Convert a key event to a UiEvent based on current UI context.
///
/// `interactive` is false while the catalog is loading or after it failed;
/// only help and quit are reachable then.
pub fn key_to_ui_event(
    key: KeyEvent,
    focus: Focus,
    show_help: bool,
    interactive: bool,
) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if !interactive {
        return match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab => return Some(UiEvent::NextFocus),
        KeyCode::BackTab => return Some(UiEvent::PrevFocus),
        _ => {}
    }

    match focus {
        Focus::Search => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down => Some(UiEvent::NextFocus),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::SearchBackspace),
            KeyCode::Char(c) => Some(UiEvent::SearchChar(c)),
            _ => None,
        },
        Focus::Countries => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('/') => Some(UiEvent::FocusSearch),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
            KeyCode::Char('d') | KeyCode::Delete => Some(UiEvent::DeleteSelected),
            KeyCode::Char('f') | KeyCode::Char(' ') | KeyCode::Enter => {
                Some(UiEvent::ToggleFavoriteSelected)
            }
            _ => None,
        },
        Focus::Favorites => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('/') => Some(UiEvent::FocusSearch),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
            KeyCode::Char('f') | KeyCode::Char(' ') | KeyCode::Enter => {
                Some(UiEvent::ToggleFavoriteSelected)
            }
            _ => None,
        },
    }
}
