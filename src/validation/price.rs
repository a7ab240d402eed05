//! Price validation functions

use rust_decimal::Decimal;
use crate::errors::{EngineError, EngineResult};

/// Prices may be zero (the calculator guards that case) but never negative.
pub fn validate_price(price: Decimal, field: &'static str) -> EngineResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(EngineError::out_of_range(field, price, "price must not be negative"));
    }
    Ok(())
}
