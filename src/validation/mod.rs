//! Pre-flight validation for caller-supplied parameters

pub mod price;
pub mod opportunity;
pub mod inputs;
pub mod strategy;

pub use price::*;
pub use opportunity::*;
pub use inputs::*;
pub use strategy::*;
