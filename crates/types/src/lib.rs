//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data, usable from the core logic, the terminal
//! renderer and the input mapping alike.
//!
//! # Grid Dimensions
//!
//! A game is configured by a single difficulty value, the [`GridSize`]. It is
//! both the number of rows/columns of every grid level and the input to the
//! recursion depth formula:
//!
//! | Grid size | Depth | Leaf cells |
//! |-----------|-------|------------|
//! | 1 | 6 | 1 |
//! | 2 | 4 | 1024 |
//! | 3 | 2 | 729 |
//! | 4 | 0 | 16 |
//! | 5+ | 0 | size² |
//!
//! # Statistics Constants
//!
//! - `ROLLING_WINDOW_LEN`: 10 samples kept for each moving average
//! - `DISPLAY_PRECISION`: 2 fractional digits for time/average values
//! - `TARGET_SPAN_PERCENT`: 95, the target's top-left corner stays in `[0, 95)`
//!
//! # Examples
//!
//! ```
//! use gridhop_types::{GridSize, GameError};
//!
//! let size = GridSize::new(2).unwrap();
//! assert_eq!(size.get(), 2);
//! assert_eq!(size.recursion_depth(), 4);
//!
//! let parsed: GridSize = "3".parse().unwrap();
//! assert_eq!(parsed.recursion_depth(), 2);
//!
//! assert!(matches!(GridSize::new(0), Err(GameError::InvalidConfiguration(_))));
//! ```

use std::fmt;
use std::str::FromStr;

/// Depth budget shared by every grid size: `depth = max(0, 8 - 2 * size)`.
pub const DEPTH_BUDGET: u32 = 8;

/// Number of samples kept in each rolling window.
pub const ROLLING_WINDOW_LEN: usize = 10;

/// Fractional digits used for time and average displays.
pub const DISPLAY_PRECISION: u32 = 2;

/// Target coordinates are drawn from `[0, TARGET_SPAN_PERCENT)` percent of the play area.
pub const TARGET_SPAN_PERCENT: f64 = 95.0;

/// Grid sizes offered on the welcome screen.
pub const MENU_GRID_SIZES: [u8; 4] = [1, 2, 3, 4];

/// Errors raised for inputs the game refuses to run with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Validated difficulty level (positive integer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridSize(u8);

impl GridSize {
    /// Validate a raw grid size. Zero and values that do not fit a `u8` are rejected.
    pub fn new(value: u32) -> Result<Self, GameError> {
        if value == 0 {
            return Err(GameError::InvalidConfiguration(
                "grid size must be a positive integer, got 0".to_string(),
            ));
        }
        u8::try_from(value).map(GridSize).map_err(|_| {
            GameError::InvalidConfiguration(format!(
                "grid size {} exceeds the maximum of {}",
                value,
                u8::MAX
            ))
        })
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Cells per row (and rows per grid) as a `usize`.
    pub fn dimension(self) -> usize {
        self.0 as usize
    }

    /// Number of nested levels below the root grid.
    ///
    /// Sizes of 5 and above clamp to 0, leaving a single flat grid.
    pub fn recursion_depth(self) -> u32 {
        DEPTH_BUDGET.saturating_sub(2 * self.0 as u32)
    }

    /// Leaf cells at the deepest level: `size^(2 * (depth + 1))`.
    pub fn leaf_count(self) -> u64 {
        (self.0 as u64).pow(2 * (self.recursion_depth() + 1))
    }
}

impl FromStr for GridSize {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: u32 = trimmed.parse().map_err(|_| {
            GameError::InvalidConfiguration(format!(
                "grid size must be a positive integer, got {:?}",
                trimmed
            ))
        })?;
        GridSize::new(value)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mouse buttons that can activate the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    /// Right click. Treated exactly like a primary click on the target.
    Secondary,
}

impl PointerButton {
    /// Name used in log records.
    pub fn as_str(&self) -> &'static str {
        match self {
            PointerButton::Primary => "primary",
            PointerButton::Secondary => "secondary",
        }
    }
}

/// Game-level inputs, already translated from raw terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Pointer moved (one hop).
    Hop,
    /// Pointer pressed at a terminal cell.
    Activate {
        column: u16,
        row: u16,
        button: PointerButton,
    },
    /// Difficulty chosen on the welcome screen.
    SelectGridSize(GridSize),
    Restart,
    Menu,
}

/// Position of the click target in percent of the play area (top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetPosition {
    pub left: f64,
    pub top: f64,
}

impl TargetPosition {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Welcome,
    Playing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_follows_budget_formula() {
        let depths: Vec<u32> = (1..=4)
            .map(|n| GridSize::new(n).unwrap().recursion_depth())
            .collect();
        assert_eq!(depths, vec![6, 4, 2, 0]);
    }

    #[test]
    fn large_sizes_clamp_to_flat_grid() {
        for n in [5, 6, 10, 255] {
            assert_eq!(GridSize::new(n).unwrap().recursion_depth(), 0);
        }
        assert_eq!(GridSize::new(5).unwrap().leaf_count(), 25);
    }

    #[test]
    fn leaf_count_matches_closed_form() {
        assert_eq!(GridSize::new(1).unwrap().leaf_count(), 1);
        assert_eq!(GridSize::new(2).unwrap().leaf_count(), 1024);
        assert_eq!(GridSize::new(3).unwrap().leaf_count(), 729);
        assert_eq!(GridSize::new(4).unwrap().leaf_count(), 16);
    }

    #[test]
    fn pointer_buttons_have_log_names() {
        assert_eq!(PointerButton::Primary.as_str(), "primary");
        assert_eq!(PointerButton::Secondary.as_str(), "secondary");
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert!(matches!(
            GridSize::new(0),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GridSize::new(256),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!("2.5".parse::<GridSize>().is_err());
        assert!("-1".parse::<GridSize>().is_err());
        assert!("abc".parse::<GridSize>().is_err());
        assert_eq!(" 4 ".parse::<GridSize>().unwrap().get(), 4);
    }
}
