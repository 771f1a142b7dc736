//! Draw orchestration for a UI caller.
//!
//! `RaffleSession` bundles the state the caller owns across draws: the
//! config, the history log, and the cross-draw exclusion set. Each draw runs
//! validate → sample → (mask) → record, synchronously.

use tracing::debug;

use crate::config::RaffleConfig;
use crate::error::DrawError;
use crate::history::{DrawOutcome, History, HistoryEntry};
use crate::mask::mask_with;
use crate::rng::UniformSource;
use crate::sampler::{self, ExclusionSet};
use crate::types::{ItemRequest, RangeRequest};
use crate::validate::{validate_items, validate_range};

#[derive(Debug, Clone, Default)]
pub struct RaffleSession {
    config: RaffleConfig,
    history: History,
    exclusion: ExclusionSet,
}

impl RaffleSession {
    pub fn new(config: RaffleConfig) -> Self {
        Self {
            config,
            history: History::new(),
            exclusion: ExclusionSet::new(),
        }
    }

    pub fn config(&self) -> &RaffleConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Values already drawn with `exclude_drawn` set.
    pub fn exclusion(&self) -> &ExclusionSet {
        &self.exclusion
    }

    /// Draw integers and record them.
    pub fn draw_numbers<R: UniformSource + ?Sized>(
        &mut self,
        request: &RangeRequest,
        rng: &mut R,
        now_ms: u64,
    ) -> Result<Vec<i64>, DrawError> {
        validate_range(request, &self.config)?;

        let values = sampler::draw_range(request, rng);
        debug!(min = request.min, max = request.max, drawn = values.len(), "number draw complete");

        self.history.append(HistoryEntry::new(
            request.into(),
            DrawOutcome::Numbers(values.clone()),
            now_ms,
        ));
        Ok(values)
    }

    /// Draw list entries and record them.
    ///
    /// The returned values are the displayed ones (masked when the request
    /// asks for it). The exclusion set always holds the raw values.
    pub fn draw_items<R: UniformSource + ?Sized>(
        &mut self,
        request: &ItemRequest,
        rng: &mut R,
        now_ms: u64,
    ) -> Result<Vec<String>, DrawError> {
        validate_items(request, &self.config)?;

        let exclusion = request.exclude_drawn.then_some(&mut self.exclusion);
        let raw = sampler::draw_items(request, exclusion, rng);
        if raw.len() < request.quantity {
            debug!(requested = request.quantity, drawn = raw.len(), "item pool exhausted");
        }

        let shown = if request.mask {
            let redaction = self.config.redaction_char;
            raw.iter().map(|value| mask_with(value, redaction)).collect()
        } else {
            raw
        };
        debug!(pool = request.items.len(), drawn = shown.len(), masked = request.mask, "item draw complete");

        self.history.append(HistoryEntry::new(
            request.into(),
            DrawOutcome::Items(shown.clone()),
            now_ms,
        ));
        Ok(shown)
    }

    /// Clipboard text for the most recent draw, if any.
    pub fn clipboard_text(&self) -> Option<String> {
        self.history.latest().map(|entry| entry.result().clipboard_text())
    }

    /// Forget history and every excluded value.
    pub fn reset(&mut self) {
        debug!(entries = self.history.len(), excluded = self.exclusion.len(), "session reset");
        self.history.clear();
        self.exclusion.clear();
    }
}
