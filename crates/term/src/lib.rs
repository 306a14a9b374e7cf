//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view paints a framebuffer from
//! a snapshot and the grid tree, and the session flushes it to the terminal,
//! sending only changed cells. No widget toolkit is involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Materialise the abstract grid tree as nested, shaded terminal cells
//! - Own hit-testing of the target, since only the view knows where it is drawn

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use gridhop_core as core;
pub use gridhop_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use game_view::{GameView, ScreenLayout, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_frame, TerminalSession};
