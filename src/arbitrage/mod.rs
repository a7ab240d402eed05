//! Arbitrage profit calculation

pub mod calculator;

pub use calculator::*;
