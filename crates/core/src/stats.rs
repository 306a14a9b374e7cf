//! Stats module - hit/hop counters and rolling averages
//!
//! Tracks how many targets were hit, how much the pointer moved in between,
//! and moving averages over the last [`ROLLING_WINDOW_LEN`] hits. Display
//! values are derived on demand; only raw samples are stored.
//!
//! Timestamps are monotonic milliseconds supplied by the caller, which keeps
//! the tracker deterministic under test.

use arrayvec::ArrayVec;

use crate::types::{DISPLAY_PRECISION, ROLLING_WINDOW_LEN};

/// Bounded FIFO of the most recent samples.
///
/// Pushing into a full window evicts the oldest sample. Eviction is purely by
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollingWindow<T> {
    samples: ArrayVec<T, ROLLING_WINDOW_LEN>,
}

impl<T: Copy> RollingWindow<T> {
    pub fn new() -> Self {
        Self {
            samples: ArrayVec::new(),
        }
    }

    /// Append a sample, returning the evicted one if the window was full.
    pub fn push(&mut self, sample: T) -> Option<T> {
        let evicted = if self.samples.is_full() {
            Some(self.samples.remove(0))
        } else {
            None
        };
        self.samples.push(sample);
        evicted
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples oldest first.
    pub fn as_slice(&self) -> &[T] {
        &self.samples
    }
}

impl<T: Copy + Into<f64>> RollingWindow<T> {
    /// Mean of the samples; 0 when empty.
    pub fn mean(&self) -> f64 {
        average(self.samples.iter().map(|&s| s.into()))
    }
}

/// Arithmetic mean; 0 when there are no items.
pub fn average(items: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = items
        .into_iter()
        .fold((0.0, 0u32), |(sum, count), item| (sum + item, count + 1));
    if count == 0 {
        return 0.0;
    }
    sum / f64::from(count)
}

/// Round to `precision` decimal places by scaling, rounding and scaling back.
///
/// Binary floating point artifacts (e.g. `2.005` rounding down) are accepted.
pub fn round_to(number: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (number * scale).round() / scale
}

/// Format a value with exactly two fractional digits.
pub fn format_fixed2(value: f64) -> String {
    format!("{:.2}", value)
}

/// The five values shown in the score panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatsDisplay {
    pub hits: u32,
    pub hops: u32,
    pub elapsed_secs: f64,
    pub average_hops: f64,
    pub average_time_secs: f64,
}

/// Hit/hop counters plus the two rolling windows.
#[derive(Debug, Clone, Default)]
pub struct StatsTracker {
    hits: u32,
    hops: u32,
    elapsed_since_last_hit_ms: u64,
    last_hit_ms: Option<u64>,
    hops_window: RollingWindow<u32>,
    time_window: RollingWindow<u32>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero all counters and clear both windows.
    pub fn reset(&mut self) {
        self.hits = 0;
        self.hops = 0;
        self.elapsed_since_last_hit_ms = 0;
        self.last_hit_ms = None;
        self.hops_window.clear();
        self.time_window.clear();
    }

    /// Count one pointer movement.
    pub fn record_hop(&mut self) {
        self.hops = self.hops.saturating_add(1);
    }

    /// Record a target hit at `now_ms`.
    ///
    /// The first hit after a reset only sets the baseline timestamp; it never
    /// feeds either window.
    pub fn record_hit(&mut self, now_ms: u64) {
        if let Some(last) = self.last_hit_ms {
            // Monotonic clock expected; a backwards step counts as zero.
            let interval = now_ms.saturating_sub(last);
            self.hops_window.push(self.hops);
            self.time_window
                .push(u32::try_from(interval).unwrap_or(u32::MAX));
            self.elapsed_since_last_hit_ms = interval;
        }

        self.hits = self.hits.saturating_add(1);
        self.hops = 0;
        self.last_hit_ms = Some(now_ms);
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn hops(&self) -> u32 {
        self.hops
    }

    pub fn elapsed_since_last_hit_ms(&self) -> u64 {
        self.elapsed_since_last_hit_ms
    }

    pub fn last_hit_ms(&self) -> Option<u64> {
        self.last_hit_ms
    }

    pub fn hops_window(&self) -> &RollingWindow<u32> {
        &self.hops_window
    }

    pub fn time_window(&self) -> &RollingWindow<u32> {
        &self.time_window
    }

    /// Derived display values, rounded to two decimals.
    pub fn display(&self) -> StatsDisplay {
        StatsDisplay {
            hits: self.hits,
            hops: self.hops,
            elapsed_secs: round_to(
                self.elapsed_since_last_hit_ms as f64 / 1000.0,
                DISPLAY_PRECISION,
            ),
            average_hops: round_to(self.hops_window.mean(), DISPLAY_PRECISION),
            average_time_secs: round_to(self.time_window.mean() / 1000.0, DISPLAY_PRECISION),
        }
    }
}
