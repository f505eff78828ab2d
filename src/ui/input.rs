//! Input mapping
//!
//! Turns crossterm events into game actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Input action that can be triggered by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    // Cursor
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    /// Turn over the card under the cursor
    Select,
    /// Turn over the card under the mouse pointer
    Click { column: u16, row: u16 },

    /// Shuffle a new board
    Reset,
    /// Switch between emoji and letter faces
    ToggleGlyphs,

    // System
    Quit,
}

/// Map a terminal event to an action
pub fn action_for_event(event: &Event) -> Option<InputAction> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => action_for_key(key),
        Event::Mouse(mouse) => action_for_mouse(mouse),
        _ => None,
    }
}

/// Keyboard bindings (arrow keys and vim-style)
pub fn action_for_key(key: &KeyEvent) -> Option<InputAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => Some(InputAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(InputAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(InputAction::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(InputAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(InputAction::MoveRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::Select),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Reset),
        KeyCode::Char('g') => Some(InputAction::ToggleGlyphs),
        KeyCode::Char('q') | KeyCode::Esc => Some(InputAction::Quit),
        _ => None,
    }
}

/// Left click selects, everything else is ignored
pub fn action_for_mouse(mouse: &MouseEvent) -> Option<InputAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputAction::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(action_for_key(&key(KeyCode::Char('k'))), Some(InputAction::MoveUp));
        assert_eq!(action_for_key(&key(KeyCode::Right)), Some(InputAction::MoveRight));
        assert_eq!(action_for_key(&key(KeyCode::Enter)), Some(InputAction::Select));
        assert_eq!(action_for_key(&key(KeyCode::Char('r'))), Some(InputAction::Reset));
        assert_eq!(action_for_key(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_q_quits() {
        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(&event), Some(InputAction::Quit));
    }

    #[test]
    fn test_left_click() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            action_for_mouse(&mouse),
            Some(InputAction::Click { column: 10, row: 4 })
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(action_for_event(&Event::Key(release)), None);
    }
}
