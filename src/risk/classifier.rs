//! Maps a numeric risk score to a qualitative band

use crate::types::RiskBand;

pub const BALANCED_THRESHOLD: u32 = 40;
pub const AGGRESSIVE_THRESHOLD: u32 = 70;

pub fn classify(score: u32) -> RiskBand {
    match score {
        s if s < BALANCED_THRESHOLD => RiskBand::Conservative,
        s if s < AGGRESSIVE_THRESHOLD => RiskBand::Balanced,
        _ => RiskBand::Aggressive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify(0), RiskBand::Conservative);
        assert_eq!(classify(39), RiskBand::Conservative);
        assert_eq!(classify(40), RiskBand::Balanced);
        assert_eq!(classify(69), RiskBand::Balanced);
        assert_eq!(classify(70), RiskBand::Aggressive);
        assert_eq!(classify(100), RiskBand::Aggressive);
    }

    #[test]
    fn test_scores_above_scale_stay_aggressive() {
        assert_eq!(classify(250), RiskBand::Aggressive);
    }
}
