//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the grid generator, the statistics tracker and the
//! session state that wires them together. It has **no dependencies** on the
//! terminal, input devices or the wall clock, making it:
//!
//! - **Deterministic**: Same seed produces identical target sequences
//! - **Testable**: Timestamps are passed in as monotonic milliseconds
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Recording hops and hits never allocates
//!
//! # Module Structure
//!
//! - [`grid`]: Recursive grid-of-grids layout built breadth-first
//! - [`stats`]: Hit/hop counters, rolling windows and display rounding
//! - [`game_state`]: Session state (phase, grid, stats, target position)
//! - [`rng`]: Seeded LCG used to place the target
//! - [`snapshot`]: Copyable per-frame view for the renderer
//!
//! # Game Rules
//!
//! - Picking a grid size builds a nested grid of depth `max(0, 8 - 2 * size)`
//! - Every pointer movement is a **hop**
//! - Clicking the target (left or right button) is a **hit**; the target then
//!   jumps to a new random spot
//! - The last 10 hits feed the moving averages of hops and time per hit
//!
//! # Example
//!
//! ```
//! use gridhop_core::GameState;
//! use gridhop_types::GridSize;
//!
//! let mut game = GameState::new(12345);
//! game.start(GridSize::new(2).unwrap());
//!
//! game.pointer_moved();
//! game.pointer_moved();
//! game.activate_target(1_000);
//! game.pointer_moved();
//! game.activate_target(2_500);
//!
//! let display = game.stats().display();
//! assert_eq!(display.hits, 2);
//! assert_eq!(display.average_hops, 1.0);
//! assert_eq!(display.average_time_secs, 1.5);
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snapshot;
pub mod stats;

pub use gridhop_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::{build_grid_layer, create_grid, Cell, GridNode};
pub use rng::TargetRng;
pub use snapshot::GameSnapshot;
pub use stats::{average, format_fixed2, round_to, RollingWindow, StatsDisplay, StatsTracker};
pub use types::GameError;
