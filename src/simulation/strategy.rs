//! Bot strategy backtest simulation

use std::ops::Range;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use crate::risk::classify;
use crate::types::{BotConfig, RiskLevel, SimulationResult};
use crate::utils::clamp_finite;

pub const MIN_RISK_SCORE: u32 = 10;
pub const MAX_RISK_SCORE: u32 = 100;
pub const MIN_SUCCESS_RATE_PCT: f64 = 50.0;
pub const MAX_SUCCESS_RATE_PCT: f64 = 99.5;
pub const MIN_TRADES_PER_DAY: f64 = 1.0;

pub const WARN_LARGE_HIGH_RISK: &str = "High risk strategy with large trade amount";
pub const WARN_LOW_THRESHOLD: &str = "Very low profit threshold may result in losses after fees";
pub const WARN_HIGH_SLIPPAGE: &str = "High slippage tolerance increases risk of unfavorable trades";
pub const WARN_FIXED_HIGH_RISK: &str = "Fixed thresholds with high risk strategy not recommended";

const LARGE_TRADE_AMOUNT: f64 = 5000.0;
const LOW_PROFIT_THRESHOLD_PCT: f64 = 0.8;
const HIGH_PROFIT_THRESHOLD_PCT: f64 = 2.0;
const HIGH_SLIPPAGE_PCT: f64 = 1.5;
const MIN_SLIPPAGE_DIVISOR: f64 = 0.1;

/// Uniform draw ranges per risk level, in the units of each output.
struct BaseRanges {
    monthly_profit_pct: Range<f64>,
    success_rate_pct: Range<f64>,
    trades_per_day: Range<f64>,
}

fn base_ranges(risk_level: RiskLevel) -> BaseRanges {
    match risk_level {
        RiskLevel::Low => BaseRanges {
            monthly_profit_pct: 3.0..8.0,
            success_rate_pct: 92.0..97.0,
            trades_per_day: 2.0..5.0,
        },
        RiskLevel::Medium => BaseRanges {
            monthly_profit_pct: 5.0..15.0,
            success_rate_pct: 85.0..93.0,
            trades_per_day: 5.0..10.0,
        },
        RiskLevel::High => BaseRanges {
            monthly_profit_pct: 8.0..23.0,
            success_rate_pct: 75.0..87.0,
            trades_per_day: 8.0..16.0,
        },
    }
}

/// Projects monthly profit, success rate, trade frequency and risk for a
/// strategy. Draws are taken in a fixed order so a seeded source reproduces
/// the result exactly.
pub fn simulate<R: Rng + ?Sized>(config: &BotConfig, rng: &mut R) -> SimulationResult {
    let ranges = base_ranges(config.risk_level);

    let base_profit = rng.random_range(ranges.monthly_profit_pct);
    let base_success = rng.random_range(ranges.success_rate_pct);
    let base_trades = rng.random_range(ranges.trades_per_day);

    let risk_score = risk_score(config);
    let result = SimulationResult {
        estimated_monthly_profit_pct: monthly_profit_pct(config, base_profit),
        success_rate_pct: success_rate_pct(config, base_success),
        avg_trades_per_day: trades_per_day(config, base_trades),
        risk_score,
        risk_band: classify(risk_score),
        warnings: warnings(config),
    };

    debug!(
        pair = %config.trading_pair,
        risk_level = %config.risk_level,
        risk_score = result.risk_score,
        warnings = result.warnings.len(),
        "Simulated bot strategy"
    );

    result
}

pub fn simulate_seeded(config: &BotConfig, seed: u64) -> SimulationResult {
    let mut rng = StdRng::seed_from_u64(seed);
    simulate(config, &mut rng)
}

pub fn simulate_with_entropy(config: &BotConfig) -> SimulationResult {
    simulate(config, &mut rand::rng())
}

/// Composite 10-100 score. Deterministic.
pub fn risk_score(config: &BotConfig) -> u32 {
    let dynamic = if config.use_dynamic_thresholds { 0.8 } else { 1.2 };
    let rebalance = if config.auto_rebalance { 0.9 } else { 1.1 };

    let raw = (config.trade_amount / 500.0)
        * config.risk_level.multiplier()
        * (config.min_profit_threshold_pct / 0.5)
        * (1.0 / config.max_slippage_pct.max(MIN_SLIPPAGE_DIVISOR))
        * dynamic
        * rebalance
        * 10.0;

    // NaN casts to 0 and lands on the floor below
    let score = clamp_finite(raw.floor(), 0.0, MAX_RISK_SCORE as f64) as u32;
    score.max(MIN_RISK_SCORE)
}

fn monthly_profit_pct(config: &BotConfig, base: f64) -> f64 {
    let dynamic = if config.use_dynamic_thresholds { 1.2 } else { 0.9 };
    let rebalance = if config.auto_rebalance { 1.1 } else { 0.95 };

    let projected = base
        * (config.min_profit_threshold_pct / 1.2)
        * (1.0 - config.trading_fee_rate_pct / 0.2)
        * dynamic
        * rebalance;

    // f64::max discards NaN
    projected.max(0.0)
}

fn success_rate_pct(config: &BotConfig, base: f64) -> f64 {
    let dynamic = if config.use_dynamic_thresholds { 1.05 } else { 0.95 };

    let projected = base
        * (1.0 - config.min_profit_threshold_pct / 30.0)
        * ((config.max_slippage_pct + 0.5) / 1.5)
        * dynamic;

    clamp_finite(projected, MIN_SUCCESS_RATE_PCT, MAX_SUCCESS_RATE_PCT)
}

fn trades_per_day(config: &BotConfig, base: f64) -> f64 {
    let mut trades = base;
    if config.min_profit_threshold_pct > HIGH_PROFIT_THRESHOLD_PCT {
        trades *= 0.6;
    }
    if config.min_profit_threshold_pct < LOW_PROFIT_THRESHOLD_PCT {
        trades *= 1.5;
    }
    trades *= if config.use_dynamic_thresholds { 1.2 } else { 0.8 };

    trades.max(MIN_TRADES_PER_DAY)
}

pub fn warnings(config: &BotConfig) -> Vec<String> {
    let high_risk = config.risk_level == RiskLevel::High;
    let mut warnings = Vec::new();

    if config.trade_amount > LARGE_TRADE_AMOUNT && high_risk {
        warnings.push(WARN_LARGE_HIGH_RISK.to_string());
    }
    if config.min_profit_threshold_pct < LOW_PROFIT_THRESHOLD_PCT {
        warnings.push(WARN_LOW_THRESHOLD.to_string());
    }
    if config.max_slippage_pct > HIGH_SLIPPAGE_PCT {
        warnings.push(WARN_HIGH_SLIPPAGE.to_string());
    }
    if !config.use_dynamic_thresholds && high_risk {
        warnings.push(WARN_FIXED_HIGH_RISK.to_string());
    }

    warnings
}
