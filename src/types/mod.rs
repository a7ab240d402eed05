//! Core data types and structures

pub mod arbitrage;
pub mod profit;
pub mod strategy;
pub mod execution;
pub mod report;

pub use arbitrage::*;
pub use profit::*;
pub use strategy::*;
pub use execution::*;
pub use report::*;
