//! Range and item samplers.
//!
//! Both samplers share one loop: pick a uniform index into the current pool,
//! append the value there, and take it out of the pool when repeats are
//! disallowed. A fixed `UniformSource` replays the exact same sequence.
//!
//! Preconditions are checked by `validate` beforehand. A violated
//! precondition yields a short (possibly empty) result, never a panic.

use std::collections::{HashMap, HashSet};

use crate::rng::UniformSource;
use crate::types::{ItemRequest, RangeRequest};

/// Values already drawn in a session, skipped by later item draws.
///
/// Grows with every distinct drawn value until `clear` (session reset).
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    drawn: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.drawn.contains(value)
    }

    /// Returns false if the value was already present.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        self.drawn.insert(value.into())
    }

    pub fn len(&self) -> usize {
        self.drawn.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawn.is_empty()
    }

    pub fn clear(&mut self) {
        self.drawn.clear();
    }
}

/// Draw `quantity` integers from `[min, max]`.
///
/// Without repeats this is a partial Fisher–Yates shuffle over the virtual
/// pool `[min, min+1, ..., max]`: each pick takes a uniform slot among the
/// remaining ones and the last remaining slot moves into its place. Only
/// moved slots are stored, so cost scales with `quantity`, not the range.
/// With repeats every pick samples the full range.
pub fn draw_range<R: UniformSource + ?Sized>(request: &RangeRequest, rng: &mut R) -> Vec<i64> {
    let size = request.pool_size();
    if size == 0 {
        return Vec::new();
    }

    if request.avoid_repeats {
        let take = (request.quantity as u64).min(size);
        // slot -> offset, for slots whose offset is not the slot itself
        let mut moved: HashMap<u64, u64> = HashMap::new();
        let mut results = Vec::new();
        for k in 0..take {
            let remaining = size - k;
            let j = rng.pick_below(remaining);
            let picked = moved.get(&j).copied().unwrap_or(j);
            let last = remaining - 1;
            let tail = moved.remove(&last).unwrap_or(last);
            if j != last {
                moved.insert(j, tail);
            }
            results.push(offset_in_range(request.min, picked));
        }
        results
    } else {
        (0..request.quantity)
            .map(|_| offset_in_range(request.min, rng.pick_below(size)))
            .collect()
    }
}

/// Draw `quantity` entries from `request.items`.
///
/// When `exclusion` is given, values it holds are left out of the pool and
/// every drawn value is added to it afterwards. If the pool runs out the
/// result is shorter than `quantity`.
pub fn draw_items<R: UniformSource + ?Sized>(
    request: &ItemRequest,
    mut exclusion: Option<&mut ExclusionSet>,
    rng: &mut R,
) -> Vec<String> {
    let mut pool: Vec<&str> = request
        .items
        .iter()
        .map(String::as_str)
        .filter(|item| exclusion.as_deref().map_or(true, |set| !set.contains(item)))
        .collect();

    let mut results = Vec::with_capacity(request.quantity.min(pool.len()));
    for _ in 0..request.quantity {
        if pool.is_empty() {
            break;
        }
        let idx = rng.pick_index(pool.len());
        let picked = if request.avoid_repeats {
            pool.remove(idx)
        } else {
            pool[idx]
        };
        results.push(picked.to_owned());
    }

    if let Some(set) = exclusion.as_deref_mut() {
        for value in &results {
            set.insert(value.as_str());
        }
    }

    results
}

/// One throwaway pick from `[min, max]` for the rolling preview.
pub fn preview_number<R: UniformSource + ?Sized>(min: i64, max: i64, rng: &mut R) -> Option<i64> {
    let size = RangeRequest::new(min, max, 1, false).pool_size();
    if size == 0 {
        return None;
    }
    Some(offset_in_range(min, rng.pick_below(size)))
}

/// One throwaway pick from `items` for the rolling preview.
pub fn preview_item<'a, R: UniformSource + ?Sized>(items: &'a [String], rng: &mut R) -> Option<&'a str> {
    if items.is_empty() {
        return None;
    }
    Some(items[rng.pick_index(items.len())].as_str())
}

#[inline(always)]
fn offset_in_range(min: i64, offset: u64) -> i64 {
    (min as i128 + offset as i128) as i64
}
