//! Rolling preview timing.
//!
//! The UI shows throwaway picks every `preview_interval_ms` for
//! `preview_duration_ms` before revealing a result. `RollingPreview` only
//! counts frames; the host owns the timer and asks `sampler::preview_*` for
//! each frame's value. Cancelling it never affects a draw.

use tracing::trace;

use crate::config::RaffleConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollingPreview {
    interval_ms: u32,
    total_frames: u32,
    shown: u32,
    cancelled: bool,
}

impl RollingPreview {
    pub fn new(interval_ms: u32, duration_ms: u32) -> Self {
        let interval_ms = interval_ms.max(1);
        Self {
            interval_ms,
            total_frames: duration_ms / interval_ms,
            shown: 0,
            cancelled: false,
        }
    }

    pub fn from_config(config: &RaffleConfig) -> Self {
        Self::new(config.preview_interval_ms, config.preview_duration_ms)
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Frames in a full, uncancelled preview.
    pub fn frame_count(&self) -> u32 {
        self.total_frames
    }

    /// Frames shown so far.
    pub fn frames_shown(&self) -> u32 {
        self.shown
    }

    /// Advance one frame. Returns false once the preview is over, in which
    /// case the caller should stop its timer and reveal the result.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.shown += 1;
        trace!(frame = self.shown, of = self.total_frames, "preview frame");
        true
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn is_finished(&self) -> bool {
        self.cancelled || self.shown >= self.total_frames
    }
}
