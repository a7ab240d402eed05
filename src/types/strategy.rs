//! Trading bot strategy types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            RiskLevel::Low => 0.6,
            RiskLevel::Medium => 1.0,
            RiskLevel::High => 1.5,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(format!("Unknown risk level: {}", s)),
        }
    }
}

/// Qualitative label for a 0-100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Conservative,
    Balanced,
    Aggressive,
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskBand::Conservative => write!(f, "Conservative"),
            RiskBand::Balanced => write!(f, "Balanced"),
            RiskBand::Aggressive => write!(f, "Aggressive"),
        }
    }
}

/// Strategy settings from the bot configurator. Percentages are in percent
/// units (0.5 = 0.5%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    pub trading_pair: String,
    pub trade_amount: f64,
    pub max_slippage_pct: f64,
    pub min_profit_threshold_pct: f64,
    pub trading_fee_rate_pct: f64,
    pub use_dynamic_thresholds: bool,
    pub auto_rebalance: bool,
    pub risk_level: RiskLevel,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            trading_pair: "BTC/USDT".to_string(),
            trade_amount: 1000.0,
            max_slippage_pct: 0.5,
            min_profit_threshold_pct: 1.0,
            trading_fee_rate_pct: 0.1,
            use_dynamic_thresholds: true,
            auto_rebalance: true,
            risk_level: RiskLevel::Medium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub estimated_monthly_profit_pct: f64,
    pub success_rate_pct: f64,
    pub avg_trades_per_day: f64,
    pub risk_score: u32,
    pub risk_band: RiskBand,
    pub warnings: Vec<String>,
}
