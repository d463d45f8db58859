//! Key routing for the two screens.
//!
//! Keys are translated into [`AppAction`]s here and applied by the event
//! loop, so this module never touches state directly.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{Input as TAInput, Key as TAKey};

use crate::core::app::{App, AppAction, Screen};

const LINE_SCROLL: u16 = 1;

/// Resolve a key press into actions. `page_height` is the number of
/// transcript rows currently visible.
pub fn actions_for_key(app: &App, key: &KeyEvent, page_height: u16) -> Vec<AppAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d')) {
        return vec![AppAction::Quit];
    }

    match &app.screen {
        Screen::Setup(_) => setup_actions(key),
        Screen::Chat(_) => chat_actions(key, page_height),
    }
}

fn setup_actions(key: &KeyEvent) -> Vec<AppAction> {
    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => AppAction::WizardMoveUp,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => AppAction::WizardMoveDown,
        KeyCode::Enter | KeyCode::Char(' ') => AppAction::WizardConfirm,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => AppAction::WizardBack,
        KeyCode::Char(c @ '1'..='9') => AppAction::WizardSelect {
            index: (c as usize) - ('1' as usize),
        },
        KeyCode::Char('q') => AppAction::Quit,
        _ => return Vec::new(),
    };
    vec![action]
}

fn chat_actions(key: &KeyEvent, page_height: u16) -> Vec<AppAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let newline_modifier = key
        .modifiers
        .intersects(KeyModifiers::ALT | KeyModifiers::SHIFT);
    let page = page_height.saturating_sub(1).max(1);

    let action = match key.code {
        KeyCode::Char('r') if ctrl => AppAction::Reset,
        KeyCode::Enter if newline_modifier => AppAction::EditInput {
            input: TAInput {
                key: TAKey::Enter,
                ..Default::default()
            },
        },
        KeyCode::Enter => AppAction::SubmitMessage,
        KeyCode::PageUp => AppAction::ScrollUp { lines: page },
        KeyCode::PageDown => AppAction::ScrollDown { lines: page },
        KeyCode::Home if ctrl => AppAction::ScrollToTop,
        KeyCode::End if ctrl => AppAction::ScrollToBottom,
        KeyCode::Up if ctrl => AppAction::ScrollUp { lines: LINE_SCROLL },
        KeyCode::Down if ctrl => AppAction::ScrollDown { lines: LINE_SCROLL },
        _ => AppAction::EditInput {
            input: TAInput::from(*key),
        },
    };
    vec![action]
}
