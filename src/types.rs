//! Core data types for the draw engine.
//!
//! Requests are plain values owned by the caller. They derive serde so the
//! wasm layer can snapshot them into history and hand them to JS.

use serde::{Deserialize, Serialize};

/// A draw of integers from the inclusive range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeRequest {
    pub min: i64,
    pub max: i64,
    pub quantity: usize,
    pub avoid_repeats: bool,
}

impl RangeRequest {
    pub fn new(min: i64, max: i64, quantity: usize, avoid_repeats: bool) -> Self {
        Self { min, max, quantity, avoid_repeats }
    }

    /// Number of integers in `[min, max]`, saturating at `u64::MAX`.
    /// Zero when `min > max`.
    pub fn pool_size(&self) -> u64 {
        let span = self.max as i128 - self.min as i128 + 1;
        if span <= 0 {
            0
        } else {
            u64::try_from(span).unwrap_or(u64::MAX)
        }
    }
}

/// A draw of entries from an ordered item list.
///
/// Duplicate entries are distinct pool members. `avoid_repeats` forbids
/// picking the same pool slot twice within this draw; `exclude_drawn` skips
/// every value already drawn earlier in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    pub items: Vec<String>,
    pub quantity: usize,
    pub avoid_repeats: bool,
    #[serde(default)]
    pub exclude_drawn: bool,
    #[serde(default)]
    pub mask: bool,
}

impl ItemRequest {
    pub fn new(items: Vec<String>, quantity: usize, avoid_repeats: bool) -> Self {
        Self {
            items,
            quantity,
            avoid_repeats,
            exclude_drawn: false,
            mask: false,
        }
    }

    /// Enable cross-draw exclusion of previously drawn values.
    pub fn excluding_drawn(mut self, exclude: bool) -> Self {
        self.exclude_drawn = exclude;
        self
    }

    /// Mask the displayed results.
    pub fn masked(mut self, mask: bool) -> Self {
        self.mask = mask;
        self
    }
}
