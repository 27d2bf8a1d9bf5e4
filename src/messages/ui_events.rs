//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Application tabs
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AppTab {
    #[default]
    Posts,
    Favorites,
}

impl AppTab {
    pub fn title(&self) -> &'static str {
        match self {
            AppTab::Posts => "Posts",
            AppTab::Favorites => "Favorites",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AppTab::Posts => 0,
            AppTab::Favorites => 1,
        }
    }

    /// Two tabs, so next and previous are the same move
    pub fn other(&self) -> AppTab {
        match self {
            AppTab::Posts => AppTab::Favorites,
            AppTab::Favorites => AppTab::Posts,
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// First frame has been drawn
    Appeared,

    // Tab navigation
    SwitchTab(AppTab),
    NextTab,

    // List navigation
    SelectNext,
    SelectPrev,

    /// Toggle on the posts tab, remove on the favorites tab
    Activate,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Any key closes the help popup
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('1') => Some(UiEvent::SwitchTab(AppTab::Posts)),
        KeyCode::Char('2') => Some(UiEvent::SwitchTab(AppTab::Favorites)),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            Some(UiEvent::NextTab)
        }
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiEvent::Activate),
        _ => None,
    }
}
