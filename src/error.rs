//! User-facing validation errors.
//!
//! The samplers themselves never fail; every variant here is produced by the
//! validators before a draw runs.

use thiserror::Error;

/// Reasons a draw request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// A form field could not be parsed as an integer.
    #[error("Field `{field}` must be a whole number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
    /// `quantity` is zero or negative.
    #[error("Quantity must be at least 1, got {0}")]
    QuantityTooSmall(i64),
    /// `min` is not strictly below `max`.
    #[error("Minimum ({min}) must be less than maximum ({max})")]
    InvalidRange { min: i64, max: i64 },
    /// The item list has no usable entries.
    #[error("Add at least one item to the list")]
    EmptyList,
    /// Repeats are disallowed but the pool is smaller than `quantity`.
    #[error("Cannot draw {requested} without repeats from a pool of {available}")]
    InsufficientPool { requested: u64, available: u64 },
    /// More results requested than the configured limit allows.
    #[error("Cannot draw more than {limit} results at once, got {requested}")]
    QuantityTooLarge { requested: u64, limit: u64 },
    /// An item is empty or whitespace only.
    #[error("Item {index} is blank")]
    BlankItem { index: usize },
}
