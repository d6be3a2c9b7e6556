//! Classification output

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse risk bucket shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Bucket a score: above `high` is High, above `medium` is Medium
    pub fn from_score(score: u32, medium: u32, high: u32) -> Self {
        if score > high {
            RiskTier::High
        } else if score > medium {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }

    /// One-line summary for the result screen
    pub fn verdict(&self) -> &'static str {
        match self {
            RiskTier::High => "This internship shows multiple red flags",
            RiskTier::Medium => "Some concerns detected, proceed with caution",
            RiskTier::Low => "This internship appears to be legitimate",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of one classification.
///
/// Built fresh per submission and never mutated afterwards. `company_verified`
/// and the two counts are filler drawn independently of the flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// 0-100
    pub score: u8,
    pub tier: RiskTier,
    /// In evaluation order: questions first, then the email check
    pub red_flags: Vec<String>,
    pub green_flags: Vec<String>,
    pub company_verified: bool,
    pub community_report_count: u32,
    pub similar_scam_count: u32,
}

impl RiskAssessment {
    pub fn is_high_risk(&self) -> bool {
        self.tier == RiskTier::High
    }

    pub fn has_red_flags(&self) -> bool {
        !self.red_flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(RiskTier::from_score(0, 30, 60), RiskTier::Low);
        assert_eq!(RiskTier::from_score(30, 30, 60), RiskTier::Low);
        assert_eq!(RiskTier::from_score(31, 30, 60), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(60, 30, 60), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(61, 30, 60), RiskTier::High);
        assert_eq!(RiskTier::from_score(100, 30, 60), RiskTier::High);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(RiskTier::Low < RiskTier::Medium);
        assert!(RiskTier::Medium < RiskTier::High);
    }

    #[test]
    fn test_tier_text() {
        assert_eq!(RiskTier::Medium.to_string(), "Medium");
        assert_eq!(
            RiskTier::Low.verdict(),
            "This internship appears to be legitimate"
        );
    }
}
