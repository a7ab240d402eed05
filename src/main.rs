//! Arbitrage Profit Engine - Sample Runner
//!
//! Runs the bundled sample opportunities and the configured bot strategy
//! through the engine, logs a summary and prints JSON reports to stdout.

use arb_profit_engine::*;
use anyhow::Result;
use rust_decimal_macros::dec;
use tracing::{info, warn};

fn sample_opportunities() -> Vec<Opportunity> {
    vec![
        Opportunity::direct("Binance", "Coinbase", dec!(28642.15), dec!(29177.52)),
        Opportunity::triangular("Binance", 3, dec!(0.015)),
        Opportunity::futures("Binance", dec!(1850.25), "Bybit", dec!(1872.40)),
        Opportunity::p2p("Paxful", "Binance", dec!(0.998), dec!(1.004)),
    ]
}

fn run_calculations(config: &Config) -> Result<()> {
    let inputs = ProfitInputs {
        amount: config.trade_amount,
        slippage_pct: config.slippage_pct,
        cost: config.cost_policy,
    };

    if let Err(e) = validation::validate_profit_inputs(&inputs) {
        warn!("Sample inputs out of range, results may be meaningless: {}", e);
    }

    for opportunity in sample_opportunities() {
        if let Err(e) = validation::validate_opportunity(&opportunity) {
            warn!("Skipping {}: {}", opportunity.route(), e);
            continue;
        }

        let result = arbitrage::compute(&opportunity, &inputs);
        let decision = execution::evaluate_execution(
            config.subscription_tier,
            config.bot_execution_min_tier,
            &result,
        );

        utils::print_profit_result(&opportunity, &result, &decision);

        let report = CalculationReport::new(opportunity, inputs.clone(), result, decision);
        println!("{}", serde_json::to_string(&report)?);
    }

    Ok(())
}

fn run_simulation(config: &Config) -> Result<()> {
    validation::validate_bot_config(&config.bot)?;

    let result = match config.simulation_seed {
        Some(seed) => simulation::simulate_seeded(&config.bot, seed),
        None => simulation::simulate_with_entropy(&config.bot),
    };

    utils::print_simulation_result(&config.bot, &result);

    let report = SimulationReport::new(config.bot.clone(), config.simulation_seed, result);
    println!("{}", serde_json::to_string(&report)?);

    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = CONFIG.clone();

    // Initialize logging
    let _logging_guard = utils::setup_logging(config.log_dir.as_deref())?;

    info!("💹 Arbitrage Profit Engine v{}", env!("CARGO_PKG_VERSION"));
    info!("📋 Configuration:");
    info!("   Cost Policy: {:?}", config.cost_policy);
    info!("   Trade Amount: ${}", config.trade_amount);
    info!("   Slippage: {}%", config.slippage_pct);
    info!("   Subscription: {} (bot execution needs {})",
        config.subscription_tier,
        config.bot_execution_min_tier
    );
    match config.simulation_seed {
        Some(seed) => info!("   Simulation Seed: {}", seed),
        None => info!("   Simulation Seed: random"),
    }

    run_calculations(&config)?;
    run_simulation(&config)?;

    Ok(())
}
