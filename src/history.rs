//! Session history: an append-only, caller-owned log of completed draws.
//!
//! Entries are never edited or removed one by one; `clear` is the only way to
//! drop them (session reset). Nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::types::{ItemRequest, RangeRequest};

/// What was asked for, captured at draw time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RequestSnapshot {
    #[serde(rename_all = "camelCase")]
    Range {
        min: i64,
        max: i64,
        quantity: usize,
        avoid_repeats: bool,
    },
    #[serde(rename_all = "camelCase")]
    Items {
        item_count: usize,
        quantity: usize,
        avoid_repeats: bool,
        exclude_drawn: bool,
        masked: bool,
    },
}

impl From<&RangeRequest> for RequestSnapshot {
    fn from(req: &RangeRequest) -> Self {
        RequestSnapshot::Range {
            min: req.min,
            max: req.max,
            quantity: req.quantity,
            avoid_repeats: req.avoid_repeats,
        }
    }
}

impl From<&ItemRequest> for RequestSnapshot {
    fn from(req: &ItemRequest) -> Self {
        RequestSnapshot::Items {
            item_count: req.items.len(),
            quantity: req.quantity,
            avoid_repeats: req.avoid_repeats,
            exclude_drawn: req.exclude_drawn,
            masked: req.mask,
        }
    }
}

/// The values a draw produced, as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "camelCase")]
pub enum DrawOutcome {
    Numbers(Vec<i64>),
    Items(Vec<String>),
}

impl DrawOutcome {
    pub fn len(&self) -> usize {
        match self {
            DrawOutcome::Numbers(v) => v.len(),
            DrawOutcome::Items(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text for the copy button: numbers comma-separated, items one per line.
    pub fn clipboard_text(&self) -> String {
        match self {
            DrawOutcome::Numbers(values) => values
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            DrawOutcome::Items(values) => values.join("\n"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    request: RequestSnapshot,
    result: DrawOutcome,
    /// Milliseconds since the Unix epoch, supplied by the caller.
    timestamp_ms: u64,
}

impl HistoryEntry {
    pub fn new(request: RequestSnapshot, result: DrawOutcome, timestamp_ms: u64) -> Self {
        Self { request, result, timestamp_ms }
    }

    pub fn request(&self) -> &RequestSnapshot {
        &self.request
    }

    pub fn result(&self) -> &DrawOutcome {
        &self.result
    }

    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers_entry(values: Vec<i64>, ts: u64) -> HistoryEntry {
        let req = RangeRequest::new(1, 10, values.len(), true);
        HistoryEntry::new((&req).into(), DrawOutcome::Numbers(values), ts)
    }

    #[test]
    fn test_append_keeps_order() {
        let mut history = History::new();
        history.append(numbers_entry(vec![3], 1));
        history.append(numbers_entry(vec![7, 2], 2));
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].timestamp_ms(), 1);
        assert_eq!(history.latest().unwrap().result(), &DrawOutcome::Numbers(vec![7, 2]));
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.append(numbers_entry(vec![1], 1));
        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_clipboard_text() {
        assert_eq!(DrawOutcome::Numbers(vec![4, 8, 15]).clipboard_text(), "4, 8, 15");
        assert_eq!(
            DrawOutcome::Items(vec!["Ana".into(), "Bia".into()]).clipboard_text(),
            "Ana\nBia"
        );
        assert_eq!(DrawOutcome::Items(vec![]).clipboard_text(), "");
    }

    #[test]
    fn test_item_snapshot() {
        let req = ItemRequest::new(vec!["a".into(), "b".into()], 1, false).masked(true);
        assert_eq!(
            RequestSnapshot::from(&req),
            RequestSnapshot::Items {
                item_count: 2,
                quantity: 1,
                avoid_repeats: false,
                exclude_drawn: false,
                masked: true,
            }
        );
    }

    #[test]
    fn test_serialized_shape() {
        let entry = numbers_entry(vec![5], 1_700_000_000_000);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["request"]["kind"], "range");
        assert_eq!(json["request"]["avoidRepeats"], true);
        assert_eq!(json["result"]["kind"], "numbers");
        assert_eq!(json["result"]["values"][0], 5);
        assert_eq!(json["timestampMs"], 1_700_000_000_000u64);
    }
}
