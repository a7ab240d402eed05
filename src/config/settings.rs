//! Engine configuration settings and environment variable handling

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::env;
use std::str::FromStr;
use crate::types::{BotConfig, CostPolicy, RiskLevel, SubscriptionTier};

// Flat fee presets
pub const DEFAULT_FEE_RATE: Decimal = dec!(0.002); // 0.2%
pub const DISCOUNTED_FEE_RATE: Decimal = dec!(0.001); // 0.1%
pub const MAX_FEE_RATE: Decimal = dec!(0.1);

// Network cost model. The divisor is a modeling scale that lands typical
// Ethereum-like gas figures in single-digit dollars.
pub const GAS_COST_DIVISOR: Decimal = dec!(1_000_000);
pub const DEFAULT_GAS_LIMIT: u64 = 250_000;
pub const DEFAULT_NETWORK_GAS_PRICE: Decimal = dec!(20);
pub const MAX_NETWORK_GAS_PRICE: Decimal = dec!(1000);

// Sample calculation defaults
pub const DEFAULT_TRADE_AMOUNT: Decimal = dec!(1000);
pub const DEFAULT_SLIPPAGE_PCT: Decimal = dec!(0.5);
pub const MAX_SLIPPAGE_PCT: Decimal = dec!(100);

#[derive(Debug, Clone)]
pub struct Config {
    pub cost_policy: CostPolicy,
    pub trade_amount: Decimal,
    pub slippage_pct: Decimal,
    // Simulator
    pub simulation_seed: Option<u64>,
    pub bot: BotConfig,
    // Entitlements
    pub subscription_tier: SubscriptionTier,
    pub bot_execution_min_tier: SubscriptionTier,
    // Logging
    pub log_dir: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unparseable values fall
    /// back to defaults.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let decimal = |key: &str| lookup(key).and_then(|s| Decimal::from_str(s.trim()).ok());
        let float = |key: &str| lookup(key).and_then(|s| s.trim().parse::<f64>().ok()).filter(|v| v.is_finite());
        let flag = |key: &str, default: bool| {
            lookup(key)
                .and_then(|s| s.trim().to_ascii_lowercase().parse().ok())
                .unwrap_or(default)
        };

        let fee_rate = decimal("FEE_RATE")
            .unwrap_or(DEFAULT_FEE_RATE)
            .max(Decimal::ZERO)
            .min(MAX_FEE_RATE);

        let cost_policy = match lookup("COST_POLICY").as_deref().map(str::trim) {
            Some("network") | Some("gas") => CostPolicy::Network {
                gas_limit: lookup("GAS_LIMIT")
                    .and_then(|s| s.trim().parse().ok())
                    .unwrap_or(DEFAULT_GAS_LIMIT),
                network_gas_price: decimal("NETWORK_GAS_PRICE")
                    .unwrap_or(DEFAULT_NETWORK_GAS_PRICE)
                    .max(Decimal::ZERO)
                    .min(MAX_NETWORK_GAS_PRICE),
                include_gas_cost: flag("INCLUDE_GAS_COST", true),
            },
            _ => CostPolicy::FlatFee { fee_rate },
        };

        let defaults = BotConfig::default();
        let bot = BotConfig {
            trading_pair: lookup("BOT_TRADING_PAIR")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.trading_pair),
            trade_amount: float("BOT_TRADE_AMOUNT")
                .filter(|v| *v > 0.0)
                .unwrap_or(defaults.trade_amount),
            max_slippage_pct: float("BOT_MAX_SLIPPAGE_PCT")
                .unwrap_or(defaults.max_slippage_pct)
                .max(0.0),
            min_profit_threshold_pct: float("BOT_MIN_PROFIT_PCT")
                .filter(|v| *v > 0.0)
                .unwrap_or(defaults.min_profit_threshold_pct),
            trading_fee_rate_pct: float("BOT_FEE_RATE_PCT")
                .unwrap_or(defaults.trading_fee_rate_pct)
                .max(0.0),
            use_dynamic_thresholds: flag("BOT_DYNAMIC_THRESHOLDS", defaults.use_dynamic_thresholds),
            auto_rebalance: flag("BOT_AUTO_REBALANCE", defaults.auto_rebalance),
            risk_level: lookup("BOT_RISK_LEVEL")
                .and_then(|s| RiskLevel::from_str(&s).ok())
                .unwrap_or(defaults.risk_level),
        };

        Self {
            cost_policy,
            trade_amount: decimal("TRADE_AMOUNT")
                .unwrap_or(DEFAULT_TRADE_AMOUNT)
                .max(Decimal::ZERO),
            slippage_pct: decimal("SLIPPAGE_PCT")
                .unwrap_or(DEFAULT_SLIPPAGE_PCT)
                .max(Decimal::ZERO)
                .min(MAX_SLIPPAGE_PCT),
            simulation_seed: lookup("SIMULATION_SEED").and_then(|s| s.trim().parse().ok()),
            bot,
            subscription_tier: lookup("SUBSCRIPTION_TIER")
                .and_then(|s| SubscriptionTier::from_str(&s).ok())
                .unwrap_or(SubscriptionTier::Free),
            bot_execution_min_tier: lookup("BOT_EXECUTION_MIN_TIER")
                .and_then(|s| SubscriptionTier::from_str(&s).ok())
                .unwrap_or(SubscriptionTier::Pro),
            log_dir: lookup("LOG_DIR")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = config_from(&[]);
        assert_eq!(config.cost_policy, CostPolicy::FlatFee { fee_rate: DEFAULT_FEE_RATE });
        assert_eq!(config.trade_amount, DEFAULT_TRADE_AMOUNT);
        assert_eq!(config.slippage_pct, DEFAULT_SLIPPAGE_PCT);
        assert_eq!(config.simulation_seed, None);
        assert_eq!(config.bot, BotConfig::default());
        assert_eq!(config.subscription_tier, SubscriptionTier::Free);
        assert_eq!(config.bot_execution_min_tier, SubscriptionTier::Pro);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_network_policy_from_environment() {
        let config = config_from(&[
            ("COST_POLICY", "network"),
            ("GAS_LIMIT", "180000"),
            ("NETWORK_GAS_PRICE", "35"),
            ("INCLUDE_GAS_COST", "false"),
        ]);
        assert_eq!(
            config.cost_policy,
            CostPolicy::Network {
                gas_limit: 180_000,
                network_gas_price: dec!(35),
                include_gas_cost: false,
            }
        );
    }

    #[test]
    fn test_values_are_clamped() {
        let config = config_from(&[
            ("FEE_RATE", "0.5"),
            ("SLIPPAGE_PCT", "250"),
            ("TRADE_AMOUNT", "-10"),
        ]);
        assert_eq!(config.cost_policy, CostPolicy::FlatFee { fee_rate: MAX_FEE_RATE });
        assert_eq!(config.slippage_pct, MAX_SLIPPAGE_PCT);
        assert_eq!(config.trade_amount, Decimal::ZERO);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("FEE_RATE", "abc"),
            ("SIMULATION_SEED", "not-a-seed"),
            ("BOT_RISK_LEVEL", "extreme"),
            ("BOT_TRADE_AMOUNT", "-5"),
            ("SUBSCRIPTION_TIER", "enterprise"),
        ]);
        assert_eq!(config.cost_policy, CostPolicy::FlatFee { fee_rate: DEFAULT_FEE_RATE });
        assert_eq!(config.simulation_seed, None);
        assert_eq!(config.bot.risk_level, RiskLevel::Medium);
        assert_eq!(config.bot.trade_amount, 1000.0);
        assert_eq!(config.subscription_tier, SubscriptionTier::Free);
    }

    #[test]
    fn test_bot_config_from_environment() {
        let config = config_from(&[
            ("SIMULATION_SEED", "42"),
            ("BOT_TRADING_PAIR", "ETH/USDT"),
            ("BOT_TRADE_AMOUNT", "6000"),
            ("BOT_MAX_SLIPPAGE_PCT", "2.0"),
            ("BOT_MIN_PROFIT_PCT", "0.5"),
            ("BOT_DYNAMIC_THRESHOLDS", "FALSE"),
            ("BOT_RISK_LEVEL", "High"),
            ("SUBSCRIPTION_TIER", "basic"),
        ]);
        assert_eq!(config.simulation_seed, Some(42));
        assert_eq!(config.bot.trading_pair, "ETH/USDT");
        assert_eq!(config.bot.trade_amount, 6000.0);
        assert_eq!(config.bot.max_slippage_pct, 2.0);
        assert_eq!(config.bot.min_profit_threshold_pct, 0.5);
        assert!(!config.bot.use_dynamic_thresholds);
        assert!(config.bot.auto_rebalance);
        assert_eq!(config.bot.risk_level, RiskLevel::High);
        assert_eq!(config.subscription_tier, SubscriptionTier::Basic);
    }
}
