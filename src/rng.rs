//! Uniform random sources for the draw engine.
//!
//! The samplers only need a generator of values in `[0, 1)`. Production code
//! uses `WasmRng` (`SmallRng`, xoshiro256++, seeded from `getrandom`, which is
//! the browser crypto API under wasm32). Tests and replays use `SequenceRng`
//! to pin the exact picks.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A uniform generator over `[0, 1)`.
pub trait UniformSource {
    /// Next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform value in `[0, bound)`, scaled from `next_unit`.
    ///
    /// `bound` must be non-zero.
    #[inline]
    fn pick_below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "pick_below with an empty bound");
        let value = (self.next_unit() * bound as f64).floor() as u64;
        value.min(bound - 1)
    }

    /// Uniform index into a pool of `len` elements.
    #[inline]
    fn pick_index(&mut self, len: usize) -> usize {
        self.pick_below(len as u64) as usize
    }
}

/// A seedable RNG wrapper for WASM.
///
/// Can be seeded for deterministic replay, or created from system entropy.
pub struct WasmRng {
    inner: SmallRng,
}

impl WasmRng {
    /// Create from system entropy (browser crypto.getRandomValues or OS).
    pub fn new() -> Self {
        Self {
            inner: SmallRng::from_os_rng(),
        }
    }

    /// Create with a specific seed for deterministic behavior.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for WasmRng {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformSource for WasmRng {
    #[inline(always)]
    fn next_unit(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

/// Replays a fixed list of unit values, cycling when exhausted.
///
/// Values outside `[0, 1)` are clamped into it.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<f64>,
    index: usize,
}

impl SequenceRng {
    /// Largest value strictly below 1.0.
    const BELOW_ONE: f64 = 1.0 - f64::EPSILON;

    /// An empty list behaves like `constant(0.0)`.
    pub fn new(values: Vec<f64>) -> Self {
        let values = if values.is_empty() { vec![0.0] } else { values };
        Self { values, index: 0 }
    }

    /// Always yields the same value.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl UniformSource for SequenceRng {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, Self::BELOW_ONE)
    }
}
