//! Input validation run before every draw.
//!
//! The samplers assume well-formed requests; these checks turn bad form input
//! into a `DrawError` the UI can show. Cross-draw exclusion is not consulted
//! here: an exhausted pool yields a short result, not an error.

use tracing::warn;

use crate::config::RaffleConfig;
use crate::error::DrawError;
use crate::types::{ItemRequest, RangeRequest};

fn parse_field(field: &'static str, raw: &str) -> Result<i64, DrawError> {
    raw.trim().parse::<i64>().map_err(|_| {
        warn!(field, raw, "rejected non-numeric input");
        DrawError::NotANumber { field, value: raw.to_owned() }
    })
}

/// Build a range request from raw form text.
///
/// Only parses; call `validate_range` before drawing.
pub fn parse_range_input(
    min: &str,
    max: &str,
    quantity: &str,
    avoid_repeats: bool,
) -> Result<RangeRequest, DrawError> {
    let min = parse_field("min", min)?;
    let max = parse_field("max", max)?;
    let quantity = parse_field("quantity", quantity)?;
    if quantity < 1 {
        warn!(quantity, "rejected quantity below 1");
        return Err(DrawError::QuantityTooSmall(quantity));
    }
    let quantity = usize::try_from(quantity).unwrap_or(usize::MAX);
    Ok(RangeRequest::new(min, max, quantity, avoid_repeats))
}

pub fn validate_range(request: &RangeRequest, config: &RaffleConfig) -> Result<(), DrawError> {
    let result = check_range(request, config);
    if let Err(err) = &result {
        warn!(min = request.min, max = request.max, quantity = request.quantity, %err, "range request rejected");
    }
    result
}

fn check_range(request: &RangeRequest, config: &RaffleConfig) -> Result<(), DrawError> {
    if request.quantity < 1 {
        return Err(DrawError::QuantityTooSmall(0));
    }
    if request.min >= request.max {
        return Err(DrawError::InvalidRange { min: request.min, max: request.max });
    }
    if request.quantity as u64 > config.max_pool_size {
        return Err(DrawError::QuantityTooLarge {
            requested: request.quantity as u64,
            limit: config.max_pool_size,
        });
    }
    if request.avoid_repeats {
        let size = request.pool_size();
        let requested = request.quantity as u64;
        if requested > size {
            return Err(DrawError::InsufficientPool { requested, available: size });
        }
    }
    Ok(())
}

pub fn validate_items(request: &ItemRequest, config: &RaffleConfig) -> Result<(), DrawError> {
    let result = check_items(request, config);
    if let Err(err) = &result {
        warn!(items = request.items.len(), quantity = request.quantity, %err, "item request rejected");
    }
    result
}

fn check_items(request: &ItemRequest, config: &RaffleConfig) -> Result<(), DrawError> {
    if request.items.is_empty() {
        return Err(DrawError::EmptyList);
    }
    if let Some(index) = request.items.iter().position(|item| item.trim().is_empty()) {
        return Err(DrawError::BlankItem { index });
    }
    if request.quantity < 1 {
        return Err(DrawError::QuantityTooSmall(0));
    }
    if request.quantity as u64 > config.max_pool_size {
        return Err(DrawError::QuantityTooLarge {
            requested: request.quantity as u64,
            limit: config.max_pool_size,
        });
    }
    if request.avoid_repeats && request.quantity > request.items.len() {
        return Err(DrawError::InsufficientPool {
            requested: request.quantity as u64,
            available: request.items.len() as u64,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> RaffleConfig {
        RaffleConfig::default()
    }

    #[test]
    fn test_parse_range_input_trims() {
        let req = parse_range_input(" 1 ", "100", "3", true).unwrap();
        assert_eq!(req, RangeRequest::new(1, 100, 3, true));
    }

    #[test]
    fn test_parse_range_input_rejects_text() {
        let err = parse_range_input("1", "ten", "1", false).unwrap_err();
        assert_eq!(err, DrawError::NotANumber { field: "max", value: "ten".into() });
    }

    #[test]
    fn test_parse_range_input_rejects_empty_field() {
        assert!(matches!(
            parse_range_input("", "10", "1", false),
            Err(DrawError::NotANumber { field: "min", .. })
        ));
    }

    #[test]
    fn test_parse_range_input_rejects_zero_quantity() {
        assert_eq!(
            parse_range_input("1", "10", "0", false),
            Err(DrawError::QuantityTooSmall(0))
        );
        assert_eq!(
            parse_range_input("1", "10", "-2", false),
            Err(DrawError::QuantityTooSmall(-2))
        );
    }

    #[test]
    fn test_validate_range_ok() {
        assert!(validate_range(&RangeRequest::new(1, 10, 10, true), &cfg()).is_ok());
        assert!(validate_range(&RangeRequest::new(1, 2, 50, false), &cfg()).is_ok());
    }

    #[test]
    fn test_validate_range_min_not_below_max() {
        assert_eq!(
            validate_range(&RangeRequest::new(5, 5, 1, false), &cfg()),
            Err(DrawError::InvalidRange { min: 5, max: 5 })
        );
        assert!(validate_range(&RangeRequest::new(9, 2, 1, false), &cfg()).is_err());
    }

    #[test]
    fn test_validate_range_insufficient_pool() {
        assert_eq!(
            validate_range(&RangeRequest::new(1, 10, 11, true), &cfg()),
            Err(DrawError::InsufficientPool { requested: 11, available: 10 })
        );
    }

    #[test]
    fn test_validate_range_zero_quantity() {
        assert!(validate_range(&RangeRequest::new(1, 10, 0, false), &cfg()).is_err());
    }

    #[test]
    fn test_validate_range_quantity_limit() {
        let config = RaffleConfig { max_pool_size: 100, ..Default::default() };
        // The range itself may exceed the limit
        assert!(validate_range(&RangeRequest::new(1, 1000, 100, true), &config).is_ok());
        assert!(validate_range(&RangeRequest::new(0, i64::MAX, 1, true), &config).is_ok());
        assert_eq!(
            validate_range(&RangeRequest::new(1, 1000, 101, false), &config),
            Err(DrawError::QuantityTooLarge { requested: 101, limit: 100 })
        );
    }

    #[test]
    fn test_validate_items_quantity_limit() {
        let config = RaffleConfig { max_pool_size: 100, ..Default::default() };
        let one = vec!["a".to_string()];
        assert!(validate_items(&ItemRequest::new(one.clone(), 100, false), &config).is_ok());
        assert_eq!(
            validate_items(&ItemRequest::new(one.clone(), 101, false), &config),
            Err(DrawError::QuantityTooLarge { requested: 101, limit: 100 })
        );
        assert!(matches!(
            validate_items(&ItemRequest::new(one, usize::MAX, false), &cfg()),
            Err(DrawError::QuantityTooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_items_rejects_blank_entries() {
        let blank = vec!["".to_string(), "   ".to_string()];
        assert_eq!(
            validate_items(&ItemRequest::new(blank, 1, false), &cfg()),
            Err(DrawError::BlankItem { index: 0 })
        );
        let mixed = vec!["Ana".to_string(), "\t".to_string()];
        assert_eq!(
            validate_items(&ItemRequest::new(mixed, 1, false), &cfg()),
            Err(DrawError::BlankItem { index: 1 })
        );
    }

    #[test]
    fn test_validate_items() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert!(validate_items(&ItemRequest::new(items.clone(), 2, true), &cfg()).is_ok());
        assert!(validate_items(&ItemRequest::new(items.clone(), 5, false), &cfg()).is_ok());
        assert_eq!(
            validate_items(&ItemRequest::new(items.clone(), 3, true), &cfg()),
            Err(DrawError::InsufficientPool { requested: 3, available: 2 })
        );
        assert_eq!(
            validate_items(&ItemRequest::new(items, 0, true), &cfg()),
            Err(DrawError::QuantityTooSmall(0))
        );
        assert_eq!(
            validate_items(&ItemRequest::new(vec![], 1, false), &cfg()),
            Err(DrawError::EmptyList)
        );
    }
}
