//! Game state module - ties the grid, the stats tracker and the target together
//!
//! `GameState` is the single owner of everything mutable in a session. Inputs
//! are applied one at a time in arrival order; there is no background work.

use log::{debug, info, trace};

use crate::grid::{build_grid_layer, GridNode};
use crate::rng::TargetRng;
use crate::snapshot::GameSnapshot;
use crate::stats::StatsTracker;
use crate::types::{GameInput, GridSize, Phase, TargetPosition};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    phase: Phase,
    grid_size: Option<GridSize>,
    grid: Option<GridNode>,
    /// Monotonic id for the current grid (increments on every build).
    grid_id: u32,
    stats: StatsTracker,
    target: TargetPosition,
    rng: TargetRng,
}

impl GameState {
    /// Create a new game on the welcome screen with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            phase: Phase::Welcome,
            grid_size: None,
            grid: None,
            grid_id: 0,
            stats: StatsTracker::new(),
            target: TargetPosition::default(),
            rng: TargetRng::new(seed),
        }
    }

    /// Start a game at the given difficulty.
    ///
    /// Builds the grid once, resets the stats and drops the target somewhere new.
    pub fn start(&mut self, grid_size: GridSize) {
        let grid = build_grid_layer(grid_size);
        info!(
            "starting game: grid size {}, depth {}, {} leaf cells",
            grid_size,
            grid.depth(),
            grid.leaf_count()
        );

        self.grid = Some(grid);
        self.grid_size = Some(grid_size);
        self.grid_id = self.grid_id.wrapping_add(1);
        self.stats.reset();
        self.reposition_target();
        self.phase = Phase::Playing;
    }

    /// Rebuild the current grid and start over. No-op on the welcome screen.
    pub fn restart(&mut self) -> bool {
        match self.grid_size {
            Some(size) if self.phase == Phase::Playing => {
                debug!("restart requested");
                self.start(size);
                true
            }
            _ => false,
        }
    }

    /// Leave the game and show the difficulty menu again.
    pub fn back_to_menu(&mut self) -> bool {
        if self.phase == Phase::Welcome {
            return false;
        }
        debug!("returning to menu");
        self.grid = None;
        self.grid_size = None;
        self.stats.reset();
        self.phase = Phase::Welcome;
        true
    }

    /// Count a pointer movement. Ignored outside of play.
    pub fn pointer_moved(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.stats.record_hop();
        true
    }

    /// The target was clicked: one hit, then one jump to a new position.
    pub fn activate_target(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.stats.record_hit(now_ms);
        trace!(
            "hit #{} after {} ms",
            self.stats.hits(),
            self.stats.elapsed_since_last_hit_ms()
        );
        self.reposition_target();
        true
    }

    /// Apply one input. `on_target` decides whether a pointer press at
    /// `(column, row)` landed on the target.
    ///
    /// Returns whether the state changed.
    pub fn apply(
        &mut self,
        input: GameInput,
        now_ms: u64,
        on_target: impl FnOnce(u16, u16) -> bool,
    ) -> bool {
        match input {
            GameInput::Hop => self.pointer_moved(),
            GameInput::Activate {
                column,
                row,
                button,
            } => {
                if self.phase != Phase::Playing || !on_target(column, row) {
                    return false;
                }
                trace!("{} press on target", button.as_str());
                self.activate_target(now_ms)
            }
            GameInput::SelectGridSize(size) => {
                if self.phase != Phase::Welcome {
                    return false;
                }
                self.start(size);
                true
            }
            GameInput::Restart => self.restart(),
            GameInput::Menu => self.back_to_menu(),
        }
    }

    fn reposition_target(&mut self) {
        self.target = self.rng.next_target();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn grid_size(&self) -> Option<GridSize> {
        self.grid_size
    }

    pub fn grid(&self) -> Option<&GridNode> {
        self.grid.as_ref()
    }

    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    pub fn target(&self) -> TargetPosition {
        self.target
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.grid_size = self.grid_size;
        out.depth = self.grid_size.map(GridSize::recursion_depth).unwrap_or(0);
        out.target = self.target;
        out.stats = self.stats.display();
        out.grid_id = self.grid_id;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PointerButton;

    fn size(n: u32) -> GridSize {
        GridSize::new(n).unwrap()
    }

    fn click(button: PointerButton) -> GameInput {
        GameInput::Activate {
            column: 3,
            row: 4,
            button,
        }
    }

    #[test]
    fn test_new_game_waits_on_welcome() {
        let mut gs = GameState::new(1);
        assert_eq!(gs.phase(), Phase::Welcome);
        assert!(gs.grid().is_none());

        // Nothing counts before a difficulty is picked.
        assert!(!gs.pointer_moved());
        assert!(!gs.activate_target(100));
        assert_eq!(gs.stats().hits(), 0);
        assert_eq!(gs.stats().hops(), 0);
    }

    #[test]
    fn test_select_grid_size_starts_game() {
        let mut gs = GameState::new(1);
        assert!(gs.apply(GameInput::SelectGridSize(size(3)), 0, |_, _| false));
        assert_eq!(gs.phase(), Phase::Playing);
        assert_eq!(gs.grid().unwrap().depth(), 2);
        assert_eq!(gs.snapshot().depth, 2);

        // Selecting again mid-game is ignored.
        assert!(!gs.apply(GameInput::SelectGridSize(size(1)), 0, |_, _| false));
        assert_eq!(gs.grid_size(), Some(size(3)));
    }

    #[test]
    fn test_hit_moves_target() {
        let mut gs = GameState::new(42);
        gs.start(size(2));
        let before = gs.target();
        assert!(gs.apply(click(PointerButton::Primary), 10, |_, _| true));
        assert_ne!(gs.target(), before);
        assert_eq!(gs.stats().hits(), 1);
    }

    #[test]
    fn test_miss_changes_nothing() {
        let mut gs = GameState::new(42);
        gs.start(size(2));
        let before = gs.target();
        assert!(!gs.apply(click(PointerButton::Primary), 10, |_, _| false));
        assert_eq!(gs.target(), before);
        assert_eq!(gs.stats().hits(), 0);
    }

    #[test]
    fn test_secondary_activation_matches_primary() {
        let mut primary = GameState::new(9);
        let mut secondary = GameState::new(9);
        primary.start(size(2));
        secondary.start(size(2));

        primary.apply(click(PointerButton::Primary), 500, |_, _| true);
        secondary.apply(click(PointerButton::Secondary), 500, |_, _| true);

        assert_eq!(secondary.stats().hits(), 1);
        assert_eq!(primary.snapshot(), secondary.snapshot());
    }

    #[test]
    fn test_restart_resets_stats_and_rebuilds() {
        let mut gs = GameState::new(3);
        gs.start(size(2));
        gs.pointer_moved();
        gs.activate_target(100);
        gs.activate_target(300);
        let grid_id = gs.snapshot().grid_id;

        assert!(gs.apply(GameInput::Restart, 400, |_, _| false));
        assert_eq!(gs.stats().hits(), 0);
        assert!(gs.stats().time_window().is_empty());
        assert_eq!(gs.snapshot().grid_id, grid_id + 1);
        assert_eq!(gs.grid_size(), Some(size(2)));
    }

    #[test]
    fn test_menu_returns_to_welcome() {
        let mut gs = GameState::new(3);
        assert!(!gs.apply(GameInput::Menu, 0, |_, _| false));
        assert!(!gs.apply(GameInput::Restart, 0, |_, _| false));

        gs.start(size(4));
        assert!(gs.apply(GameInput::Menu, 0, |_, _| false));
        assert_eq!(gs.phase(), Phase::Welcome);
        assert!(gs.grid().is_none());
        assert_eq!(gs.grid_size(), None);
    }

    #[test]
    fn test_same_seed_same_targets() {
        let mut a = GameState::new(77);
        let mut b = GameState::new(77);
        a.start(size(1));
        b.start(size(1));
        for t in 1..20 {
            a.activate_target(t * 100);
            b.activate_target(t * 100);
            assert_eq!(a.target(), b.target());
        }
    }
}
