//! Frame pacing for a mostly static screen.
//!
//! The game only changes when an input arrives, so frames are drawn when the
//! snapshot fingerprint changes and otherwise at a slow heartbeat that picks
//! up terminal resizes.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    heartbeat_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl RenderThrottle {
    pub fn new(heartbeat_ms: u64) -> Self {
        Self {
            heartbeat_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    pub fn heartbeat_ms(&self) -> u64 {
        self.heartbeat_ms
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders the first frame, every fingerprint change, and otherwise at
    /// most once per heartbeat.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let changed = self.last_fingerprint != Some(fingerprint);
        let due = now_ms.saturating_sub(self.last_render_ms) >= self.heartbeat_ms;
        if changed || due {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
            return true;
        }
        false
    }

    /// Make the next call render regardless of the fingerprint.
    pub fn force(&mut self) {
        self.last_fingerprint = None;
    }
}
