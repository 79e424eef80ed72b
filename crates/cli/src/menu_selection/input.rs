use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use postinstall_core::navigation::NavEvent;

/// What a key press means to the menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Navigate(NavEvent),
    /// Ctrl+C: abandon the session without producing a script.
    Interrupt,
}

/// Maps a raw key event to a navigation event.
pub fn map_key(key_event: KeyEvent) -> KeyAction {
    if key_event.kind == KeyEventKind::Release {
        return KeyAction::Navigate(NavEvent::Other);
    }

    let event = match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Interrupt;
        }
        KeyCode::Up => NavEvent::MoveUp,
        KeyCode::Down => NavEvent::MoveDown,
        KeyCode::Enter | KeyCode::Right => NavEvent::Activate,
        KeyCode::Esc | KeyCode::Left | KeyCode::Backspace | KeyCode::Char('q' | 'Q') => {
            NavEvent::Back
        }
        _ => NavEvent::Other,
    };

    KeyAction::Navigate(event)
}
