//! Display and printing utilities

use tracing::{info, warn};
use crate::types::{
    BotConfig, ExecutionDecision, Opportunity, ProfitResult, SimulationResult,
};

pub fn print_profit_result(opportunity: &Opportunity, result: &ProfitResult, decision: &ExecutionDecision) {
    info!("\n💹 {} ARBITRAGE: {}", result.arbitrage_type.to_string().to_uppercase(), opportunity.route());
    info!("   Spread: {:.3}%", result.spread_pct);
    info!("💰 Profit Analysis:");
    info!("   Gross Profit: ${:.2}", result.gross_profit);
    info!("   {:?}: ${:.2}", result.cost_kind, result.cost);
    info!("   Net Profit: ${:.2}", result.net_profit);
    info!("   ROI: {:.3}%", result.roi_pct);

    if result.profitable {
        info!("✅ Profitable");
    } else {
        warn!("❌ Not profitable after costs");
    }

    match decision {
        ExecutionDecision::Allowed => info!("🤖 Bot execution: allowed"),
        ExecutionDecision::NotProfitable => info!("🤖 Bot execution: skipped"),
        ExecutionDecision::TierRestricted { required } => {
            warn!("🔒 Bot execution requires the {} plan", required)
        }
    }
}

pub fn print_simulation_result(config: &BotConfig, result: &SimulationResult) {
    info!("\n🤖 BOT STRATEGY SIMULATION: {}", config.trading_pair);
    info!("📋 Strategy:");
    info!("   Trade Amount: ${:.2}", config.trade_amount);
    info!("   Risk Level: {}", config.risk_level);
    info!("   Min Profit Threshold: {:.2}%", config.min_profit_threshold_pct);
    info!("   Max Slippage: {:.2}%", config.max_slippage_pct);
    info!("   Trading Fee: {:.3}%", config.trading_fee_rate_pct);
    info!("   Dynamic Thresholds: {}, Auto Rebalance: {}",
        config.use_dynamic_thresholds,
        config.auto_rebalance
    );
    info!("📊 Projection:");
    info!("   Est. Monthly Profit: {:.2}%", result.estimated_monthly_profit_pct);
    info!("   Success Rate: {:.1}%", result.success_rate_pct);
    info!("   Avg Trades/Day: {:.1}", result.avg_trades_per_day);
    info!("   Risk Score: {}/100 ({})", result.risk_score, result.risk_band);

    for warning in &result.warnings {
        warn!("⚠️  {}", warning);
    }
}
