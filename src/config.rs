//! Runtime configuration from environment variables.
//!
//! - `GRIDHOP_GRID_SIZE`: start straight into a game of this size (skips the menu)
//! - `GRIDHOP_SEED`: seed for target placement (default: derived from the clock)
//! - `GRIDHOP_LOG_FILE`: write log records to this file instead of stderr
//! - `GRIDHOP_STATIC_FRAME_MS`: redraw heartbeat while nothing changes (default: 250)
//!
//! Log filtering itself follows `RUST_LOG`.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;

use crate::types::{GameError, GridSize};

pub const DEFAULT_STATIC_FRAME_MS: u64 = 250;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub grid_size: Option<GridSize>,
    pub seed: u32,
    pub log_file: Option<PathBuf>,
    pub static_frame_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, GameError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GameError> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let grid_size = non_empty("GRIDHOP_GRID_SIZE")
            .map(|s| s.parse::<GridSize>())
            .transpose()?;

        let seed = match non_empty("GRIDHOP_SEED") {
            Some(s) => s.parse().map_err(|_| {
                GameError::InvalidConfiguration(format!("GRIDHOP_SEED must be a u32, got {:?}", s))
            })?,
            None => clock_seed(),
        };

        let log_file = non_empty("GRIDHOP_LOG_FILE").map(PathBuf::from);

        let static_frame_ms = match non_empty("GRIDHOP_STATIC_FRAME_MS") {
            Some(s) => s.parse::<u64>().ok().filter(|&ms| ms > 0).ok_or_else(|| {
                GameError::InvalidConfiguration(format!(
                    "GRIDHOP_STATIC_FRAME_MS must be a positive number of milliseconds, got {:?}",
                    s
                ))
            })?,
            None => DEFAULT_STATIC_FRAME_MS,
        };

        let config = Self {
            grid_size,
            seed,
            log_file,
            static_frame_ms,
        };
        debug!("resolved config: {:?}", config);
        Ok(config)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.grid_size, None);
        assert_eq!(config.log_file, None);
        assert_eq!(config.static_frame_ms, DEFAULT_STATIC_FRAME_MS);
    }

    #[test]
    fn reads_all_keys() {
        let config = Config::from_lookup(lookup(&[
            ("GRIDHOP_GRID_SIZE", "3"),
            ("GRIDHOP_SEED", "42"),
            ("GRIDHOP_LOG_FILE", "/tmp/gridhop.log"),
            ("GRIDHOP_STATIC_FRAME_MS", "100"),
        ]))
        .unwrap();
        assert_eq!(config.grid_size, Some(GridSize::new(3).unwrap()));
        assert_eq!(config.seed, 42);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/gridhop.log")));
        assert_eq!(config.static_frame_ms, 100);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = Config::from_lookup(lookup(&[
            ("GRIDHOP_GRID_SIZE", "  "),
            ("GRIDHOP_LOG_FILE", ""),
        ]))
        .unwrap();
        assert_eq!(config.grid_size, None);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn rejects_bad_grid_size_and_seed() {
        for bad in ["0", "two", "1.5"] {
            let err = Config::from_lookup(lookup(&[("GRIDHOP_GRID_SIZE", bad)])).unwrap_err();
            assert!(matches!(err, GameError::InvalidConfiguration(_)), "{}", bad);
        }
        assert!(Config::from_lookup(lookup(&[("GRIDHOP_SEED", "-3")])).is_err());
    }

    #[test]
    fn rejects_bad_frame_interval() {
        for bad in ["0", "-5", "fast", "2.5"] {
            let err = Config::from_lookup(lookup(&[("GRIDHOP_STATIC_FRAME_MS", bad)])).unwrap_err();
            assert!(matches!(err, GameError::InvalidConfiguration(_)), "{}", bad);
        }
    }
}
