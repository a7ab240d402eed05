//! Report envelopes for JSON output

use chrono::{DateTime, Utc};
use serde::Serialize;
use super::{BotConfig, ExecutionDecision, Opportunity, ProfitInputs, ProfitResult, SimulationResult};

#[derive(Debug, Clone, Serialize)]
pub struct CalculationReport {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub opportunity: Opportunity,
    pub inputs: ProfitInputs,
    pub result: ProfitResult,
    pub execution: ExecutionDecision,
}

impl CalculationReport {
    pub fn new(
        opportunity: Opportunity,
        inputs: ProfitInputs,
        result: ProfitResult,
        execution: ExecutionDecision,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            opportunity,
            inputs,
            result,
            execution,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// Seed that reproduces this result, when one was fixed.
    pub seed: Option<u64>,
    pub config: BotConfig,
    pub result: SimulationResult,
}

impl SimulationReport {
    pub fn new(config: BotConfig, seed: Option<u64>, result: SimulationResult) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            seed,
            config,
            result,
        }
    }
}
