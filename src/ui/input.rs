use crate::ui::app::{Action, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to an [`Action`] for the given screen.
///
/// The search screen owns printable characters for its input line, so
/// letter shortcuts only apply elsewhere.
pub fn map_key(screen: Screen, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        return Some(Action::Quit);
    }
    if is_ctrl_char(key, 'r') {
        return Some(Action::Refresh);
    }
    if screen == Screen::Search && is_ctrl_char(key, 'u') {
        return Some(Action::ClearInput);
    }

    let action = match key.code {
        KeyCode::Esc => Action::Back,
        KeyCode::Enter => Action::Select,
        KeyCode::Tab => Action::CycleFocus,
        KeyCode::Up => Action::Up,
        KeyCode::Down => Action::Down,
        KeyCode::Left => Action::Left,
        KeyCode::Right => Action::Right,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Backspace if screen == Screen::Search => Action::Backspace,
        KeyCode::Backspace => Action::Back,
        KeyCode::Char(ch) if screen == Screen::Search => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return None;
            }
            Action::Input(ch)
        }
        KeyCode::Char(ch) => return map_shortcut(ch),
        _ => return None,
    };
    Some(action)
}

fn map_shortcut(ch: char) -> Option<Action> {
    let action = match ch {
        'q' => Action::Quit,
        'k' => Action::Up,
        'j' => Action::Down,
        'h' => Action::Left,
        'l' => Action::Right,
        'n' => Action::NextChapter,
        'p' => Action::PrevChapter,
        't' => Action::ToggleTestament,
        '/' | 's' => Action::OpenSearch,
        'r' => Action::Refresh,
        _ => return None,
    };
    Some(action)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
