//! Reference dashboard scenarios end to end

use arb_profit_engine::arbitrage::compute_flat_fee;
use arb_profit_engine::execution::evaluate_execution;
use arb_profit_engine::risk::classify;
use arb_profit_engine::simulation::simulate_seeded;
use arb_profit_engine::{
    BotConfig, CalculationReport, ExecutionDecision, Opportunity, ProfitInputs, RiskBand,
    RiskLevel, SimulationReport, SubscriptionTier,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn scenario_direct_btc_spread() {
    let opp = Opportunity::direct("Binance", "Coinbase", dec!(28642.15), dec!(29177.52));
    let result = compute_flat_fee(&opp, dec!(1000), dec!(0), dec!(0.002));

    assert_eq!(result.gross_profit.round_dp(2), dec!(18.69));
    assert_eq!(result.cost.round_dp(2), dec!(2.00));
    assert_eq!(result.net_profit.round_dp(2), dec!(16.69));
    assert!(result.profitable);
}

#[test]
fn scenario_futures_with_zero_spot_price() {
    let opp = Opportunity::futures("Binance", dec!(0), "Bybit", dec!(100));
    let result = compute_flat_fee(&opp, dec!(500), dec!(0), dec!(0.002));

    assert_eq!(result.gross_profit, Decimal::ZERO);
    assert_eq!(result.roi_pct, dec!(-0.2));
}

#[test]
fn scenario_every_warning_fires_in_order() {
    let config = BotConfig {
        trade_amount: 6000.0,
        risk_level: RiskLevel::High,
        min_profit_threshold_pct: 0.5,
        max_slippage_pct: 2.0,
        use_dynamic_thresholds: false,
        ..BotConfig::default()
    };
    let result = simulate_seeded(&config, 2024);

    assert_eq!(
        result.warnings,
        vec![
            "High risk strategy with large trade amount",
            "Very low profit threshold may result in losses after fees",
            "High slippage tolerance increases risk of unfavorable trades",
            "Fixed thresholds with high risk strategy not recommended",
        ]
    );
}

#[test]
fn classifier_boundaries() {
    assert_eq!(classify(39), RiskBand::Conservative);
    assert_eq!(classify(40), RiskBand::Balanced);
    assert_eq!(classify(69), RiskBand::Balanced);
    assert_eq!(classify(70), RiskBand::Aggressive);
}

#[test]
fn discounted_fee_preset_is_configuration() {
    let opp = Opportunity::direct("Binance", "Coinbase", dec!(28642.15), dec!(29177.52));
    let standard = compute_flat_fee(&opp, dec!(1000), dec!(0), arb_profit_engine::config::DEFAULT_FEE_RATE);
    let discounted = compute_flat_fee(&opp, dec!(1000), dec!(0), arb_profit_engine::config::DISCOUNTED_FEE_RATE);

    assert_eq!(standard.gross_profit, discounted.gross_profit);
    assert_eq!(discounted.net_profit - standard.net_profit, dec!(1));
}

#[test]
fn reports_serialize_to_json() {
    let opp = Opportunity::triangular("Binance", 3, dec!(0.015));
    let inputs = ProfitInputs::flat_fee(dec!(1000), dec!(0.5), dec!(0.002));
    let result = arb_profit_engine::arbitrage::compute(&opp, &inputs);
    let decision = evaluate_execution(SubscriptionTier::Basic, SubscriptionTier::Pro, &result);
    assert_eq!(decision, ExecutionDecision::TierRestricted { required: SubscriptionTier::Pro });

    let report = CalculationReport::new(opp, inputs, result, decision);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["opportunity"]["type"], "triangular");
    assert_eq!(json["inputs"]["cost"]["policy"], "flat_fee");
    assert_eq!(json["result"]["cost_kind"], "fees");
    assert_eq!(json["execution"]["decision"], "tier_restricted");
    assert_eq!(json["execution"]["required"], "pro");

    let config = BotConfig::default();
    let result = simulate_seeded(&config, 1);
    let report = SimulationReport::new(config, Some(1), result);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["seed"], 1);
    assert_eq!(json["result"]["risk_band"], "balanced");
    assert_eq!(json["config"]["risk_level"], "medium");
}
