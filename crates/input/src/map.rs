//! Event mapping from terminal events to game inputs.

use crate::types::{GameInput, GridSize, PointerButton};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map any terminal event to a game input.
pub fn map_event(event: &Event) -> Option<GameInput> {
    match event {
        Event::Mouse(mouse) => handle_mouse_event(*mouse),
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(*key),
        _ => None,
    }
}

/// Map pointer input to game inputs.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<GameInput> {
    match mouse.kind {
        // Dragging still moves the pointer.
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(GameInput::Hop),

        // Only the press counts so one click is one activation.
        MouseEventKind::Down(button) => {
            pointer_button(button).map(|button| GameInput::Activate {
                column: mouse.column,
                row: mouse.row,
                button,
            })
        }

        _ => None,
    }
}

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => None,
    }
}

/// Map keyboard input to game inputs.
pub fn handle_key_event(key: KeyEvent) -> Option<GameInput> {
    match key.code {
        // Difficulty selection
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| GridSize::new(d).ok())
            .map(GameInput::SelectGridSize),

        // Session
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameInput::Restart),
        KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => Some(GameInput::Menu),

        _ => None,
    }
}

/// `q` from any screen, or Ctrl+C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q' | 'Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
