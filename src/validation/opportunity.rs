//! Opportunity validation

use crate::errors::{EngineError, EngineResult};
use crate::types::Opportunity;
use super::validate_price;

fn require_name(name: &str, field: &'static str) -> EngineResult<()> {
    if name.trim().is_empty() {
        return Err(EngineError::EmptyField { field });
    }
    Ok(())
}

pub fn validate_opportunity(opportunity: &Opportunity) -> EngineResult<()> {
    match opportunity {
        Opportunity::Direct(pair) | Opportunity::P2P(pair) => {
            require_name(&pair.buy_exchange, "buy_exchange")?;
            require_name(&pair.sell_exchange, "sell_exchange")?;
            validate_price(pair.buy_price, "buy_price")?;
            validate_price(pair.sell_price, "sell_price")?;
        }
        Opportunity::Triangular { exchange_name, trade_count, .. } => {
            require_name(exchange_name, "exchange_name")?;
            if *trade_count < 1 {
                return Err(EngineError::out_of_range(
                    "trade_count",
                    trade_count,
                    "at least one trade is required",
                ));
            }
        }
        Opportunity::Futures { spot_exchange, spot_price, futures_exchange, futures_price } => {
            require_name(spot_exchange, "spot_exchange")?;
            require_name(futures_exchange, "futures_exchange")?;
            validate_price(*spot_price, "spot_price")?;
            validate_price(*futures_price, "futures_price")?;
        }
    }
    Ok(())
}
