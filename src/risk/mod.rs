//! Risk score classification

pub mod classifier;

pub use classifier::*;
