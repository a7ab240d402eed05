//! Trading bot strategy simulation

pub mod strategy;

pub use strategy::*;
