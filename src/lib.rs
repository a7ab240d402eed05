//! Arbitrage profit engine - profit, cost and strategy-risk simulation
//!
//! Turns an arbitrage opportunity and trade parameters into gross profit,
//! costs, net profit and ROI, and projects performance and risk for trading
//! bot strategies. Every calculation is pure; the strategy simulator takes
//! its random source from the caller.

pub mod config;
pub mod types;
pub mod errors;
pub mod arbitrage;
pub mod simulation;
pub mod risk;
pub mod execution;
pub mod validation;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{EngineError, EngineResult};
pub use types::*;
