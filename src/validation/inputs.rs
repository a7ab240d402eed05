//! Profit input validation

use rust_decimal::Decimal;
use crate::errors::{EngineError, EngineResult};
use crate::types::{CostPolicy, ProfitInputs};

pub fn validate_profit_inputs(inputs: &ProfitInputs) -> EngineResult<()> {
    if inputs.amount < Decimal::ZERO {
        return Err(EngineError::out_of_range("amount", inputs.amount, "must not be negative"));
    }

    if inputs.slippage_pct < Decimal::ZERO || inputs.slippage_pct > Decimal::ONE_HUNDRED {
        return Err(EngineError::out_of_range(
            "slippage_pct",
            inputs.slippage_pct,
            "must be between 0 and 100",
        ));
    }

    match inputs.cost {
        CostPolicy::FlatFee { fee_rate } => {
            if fee_rate < Decimal::ZERO || fee_rate >= Decimal::ONE {
                return Err(EngineError::out_of_range(
                    "fee_rate",
                    fee_rate,
                    "must be a fraction in [0, 1)",
                ));
            }
        }
        CostPolicy::Network { network_gas_price, .. } => {
            if network_gas_price < Decimal::ZERO {
                return Err(EngineError::out_of_range(
                    "network_gas_price",
                    network_gas_price,
                    "must not be negative",
                ));
            }
        }
    }

    Ok(())
}
