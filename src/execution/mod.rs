//! Execution gating for calculated opportunities

pub mod gate;

pub use gate::*;
