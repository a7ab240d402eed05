//! Subscription-tier gate for acting on a profit result
//!
//! The engine computes every result regardless of tier. This helper only
//! answers whether a caller on `tier` may hand the result to the bot.

use tracing::debug;
use crate::types::{ExecutionDecision, ProfitResult, SubscriptionTier};

pub fn evaluate_execution(
    tier: SubscriptionTier,
    required_tier: SubscriptionTier,
    result: &ProfitResult,
) -> ExecutionDecision {
    if !result.profitable {
        return ExecutionDecision::NotProfitable;
    }

    if tier < required_tier {
        debug!(%tier, required = %required_tier, "Bot execution locked for tier");
        return ExecutionDecision::TierRestricted { required: required_tier };
    }

    ExecutionDecision::Allowed
}
