//! Terminal input module.
//!
//! Maps `crossterm` mouse and key events into [`crate::types::GameInput`].
//! Pointer movement becomes a hop; a left or right press becomes an
//! activation (the right button acts exactly like the left one). Keys only
//! drive the menu, restart and quit.

pub mod map;

pub use gridhop_types as types;

pub use map::{handle_key_event, handle_mouse_event, map_event, should_quit};
