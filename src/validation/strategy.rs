//! Bot strategy configuration validation

use crate::errors::{EngineError, EngineResult};
use crate::types::BotConfig;

pub fn validate_bot_config(config: &BotConfig) -> EngineResult<()> {
    if config.trading_pair.trim().is_empty() {
        return Err(EngineError::EmptyField { field: "trading_pair" });
    }

    let numeric = [
        ("trade_amount", config.trade_amount),
        ("max_slippage_pct", config.max_slippage_pct),
        ("min_profit_threshold_pct", config.min_profit_threshold_pct),
        ("trading_fee_rate_pct", config.trading_fee_rate_pct),
    ];
    for (field, value) in numeric {
        if !value.is_finite() {
            return Err(EngineError::out_of_range(field, value, "must be a finite number"));
        }
    }

    if config.trade_amount <= 0.0 {
        return Err(EngineError::out_of_range("trade_amount", config.trade_amount, "must be positive"));
    }
    if config.max_slippage_pct < 0.0 {
        return Err(EngineError::out_of_range(
            "max_slippage_pct",
            config.max_slippage_pct,
            "must not be negative",
        ));
    }
    if config.min_profit_threshold_pct <= 0.0 {
        return Err(EngineError::out_of_range(
            "min_profit_threshold_pct",
            config.min_profit_threshold_pct,
            "must be positive",
        ));
    }
    if config.trading_fee_rate_pct < 0.0 {
        return Err(EngineError::out_of_range(
            "trading_fee_rate_pct",
            config.trading_fee_rate_pct,
            "must not be negative",
        ));
    }

    Ok(())
}
