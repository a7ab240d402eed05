//! Profit calculation inputs and results

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::config::DEFAULT_FEE_RATE;
use super::ArbitrageType;

/// How trading costs are charged against gross profit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum CostPolicy {
    /// `amount × fee_rate`, fee rate as a fraction (0.002 = 0.2%).
    FlatFee { fee_rate: Decimal },
    /// `gas_limit × network_gas_price / 1_000_000` when enabled.
    Network {
        gas_limit: u64,
        network_gas_price: Decimal,
        include_gas_cost: bool,
    },
}

impl Default for CostPolicy {
    fn default() -> Self {
        CostPolicy::FlatFee { fee_rate: DEFAULT_FEE_RATE }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostKind {
    Fees,
    Gas,
}

impl CostPolicy {
    pub fn kind(&self) -> CostKind {
        match self {
            CostPolicy::FlatFee { .. } => CostKind::Fees,
            CostPolicy::Network { .. } => CostKind::Gas,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitInputs {
    pub amount: Decimal,
    /// Percentage of gross profit lost to price movement, 0 to 100.
    pub slippage_pct: Decimal,
    pub cost: CostPolicy,
}

impl ProfitInputs {
    pub fn flat_fee(amount: Decimal, slippage_pct: Decimal, fee_rate: Decimal) -> Self {
        Self {
            amount,
            slippage_pct,
            cost: CostPolicy::FlatFee { fee_rate },
        }
    }

    pub fn with_gas(
        amount: Decimal,
        slippage_pct: Decimal,
        gas_limit: u64,
        network_gas_price: Decimal,
        include_gas_cost: bool,
    ) -> Self {
        Self {
            amount,
            slippage_pct,
            cost: CostPolicy::Network {
                gas_limit,
                network_gas_price,
                include_gas_cost,
            },
        }
    }
}

/// Outcome of one profit calculation.
///
/// `net_profit == gross_profit - cost`, `profitable == net_profit > 0` and
/// `roi_pct` is zero whenever the amount is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitResult {
    pub arbitrage_type: ArbitrageType,
    pub spread_pct: Decimal,
    pub gross_profit: Decimal,
    pub cost: Decimal,
    pub cost_kind: CostKind,
    pub net_profit: Decimal,
    pub roi_pct: Decimal,
    pub profitable: bool,
}
