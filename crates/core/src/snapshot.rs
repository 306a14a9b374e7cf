use crate::stats::StatsDisplay;
use crate::types::{GridSize, Phase, TargetPosition};

/// Everything the renderer needs for one frame, minus the grid tree itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub grid_size: Option<GridSize>,
    pub depth: u32,
    pub target: TargetPosition,
    pub stats: StatsDisplay,
    /// Bumped whenever the grid is rebuilt.
    pub grid_id: u32,
}

impl GameSnapshot {
    /// Cheap change detector used by the render throttle.
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        let mut mix = |v: u64| {
            h ^= v;
            h = h.wrapping_mul(0x0100_0000_01b3);
        };
        mix(self.phase as u64);
        mix(self.grid_size.map(|s| s.get() as u64).unwrap_or(0));
        mix(self.grid_id as u64);
        mix(self.target.left.to_bits());
        mix(self.target.top.to_bits());
        mix(self.stats.hits as u64);
        mix(self.stats.hops as u64);
        mix(self.stats.elapsed_secs.to_bits());
        mix(self.stats.average_hops.to_bits());
        mix(self.stats.average_time_secs.to_bits());
        h
    }
}
