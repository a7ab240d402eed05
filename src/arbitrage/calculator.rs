//! Arbitrage profit calculation

use rust_decimal::prelude::*;
use tracing::debug;
use crate::config::GAS_COST_DIVISOR;
use crate::types::{CostPolicy, Opportunity, ProfitInputs, ProfitResult};
use crate::utils::safe_ratio;

/// Runs one opportunity through the calculator. Never panics; a zero base
/// price yields zero gross profit.
pub fn compute(opportunity: &Opportunity, inputs: &ProfitInputs) -> ProfitResult {
    let amount = inputs.amount;

    let raw_gross = gross_profit(opportunity, amount);
    let gross_profit = apply_slippage(raw_gross, inputs.slippage_pct);
    let cost = trading_cost(&inputs.cost, amount);
    let net_profit = gross_profit.saturating_sub(cost);

    let roi_pct = if amount.is_zero() {
        Decimal::ZERO
    } else {
        safe_ratio(net_profit, amount).saturating_mul(Decimal::ONE_HUNDRED)
    };

    ProfitResult {
        arbitrage_type: opportunity.arbitrage_type(),
        spread_pct: opportunity.spread_pct(),
        gross_profit,
        cost,
        cost_kind: inputs.cost.kind(),
        net_profit,
        roi_pct,
        profitable: net_profit > Decimal::ZERO,
    }
}

pub fn compute_flat_fee(
    opportunity: &Opportunity,
    amount: Decimal,
    slippage_pct: Decimal,
    fee_rate: Decimal,
) -> ProfitResult {
    compute(opportunity, &ProfitInputs::flat_fee(amount, slippage_pct, fee_rate))
}

pub fn compute_with_gas(
    opportunity: &Opportunity,
    amount: Decimal,
    slippage_pct: Decimal,
    gas_limit: u64,
    network_gas_price: Decimal,
    include_gas_cost: bool,
) -> ProfitResult {
    compute(
        opportunity,
        &ProfitInputs::with_gas(amount, slippage_pct, gas_limit, network_gas_price, include_gas_cost),
    )
}

/// Gross profit before slippage.
fn gross_profit(opportunity: &Opportunity, amount: Decimal) -> Decimal {
    match opportunity {
        Opportunity::Direct(pair) | Opportunity::P2P(pair) => {
            if pair.buy_price.is_zero() {
                debug!(route = %opportunity.route(), "Zero buy price, gross profit forced to 0");
                return Decimal::ZERO;
            }
            let spread = pair.sell_price.saturating_sub(pair.buy_price);
            amount.saturating_mul(safe_ratio(spread, pair.buy_price))
        }
        Opportunity::Triangular { flat_return_rate, .. } => amount.saturating_mul(*flat_return_rate),
        Opportunity::Futures { spot_price, futures_price, .. } => {
            if spot_price.is_zero() {
                debug!(route = %opportunity.route(), "Zero spot price, gross profit forced to 0");
                return Decimal::ZERO;
            }
            let basis = futures_price.saturating_sub(*spot_price);
            amount.saturating_mul(safe_ratio(basis, *spot_price))
        }
    }
}

/// Slippage takes `slippage_pct` percent of the gross magnitude: a gain
/// shrinks, a loss deepens.
fn apply_slippage(gross: Decimal, slippage_pct: Decimal) -> Decimal {
    let slippage_pct = slippage_pct.max(Decimal::ZERO).min(Decimal::ONE_HUNDRED);
    if slippage_pct.is_zero() {
        return gross;
    }
    let lost = gross.abs().saturating_mul(slippage_pct) / Decimal::ONE_HUNDRED;
    gross.saturating_sub(lost)
}

fn trading_cost(policy: &CostPolicy, amount: Decimal) -> Decimal {
    match policy {
        CostPolicy::FlatFee { fee_rate } => amount.saturating_mul(*fee_rate),
        CostPolicy::Network { gas_limit, network_gas_price, include_gas_cost } => {
            if !include_gas_cost {
                return Decimal::ZERO;
            }
            Decimal::from(*gas_limit).saturating_mul(*network_gas_price) / GAS_COST_DIVISOR
        }
    }
}
