//! Plain-text rendering of an assessment

use scamguard_risk::RiskAssessment;
use std::fmt;

/// Text view of the result screen
pub struct Report<'a>(pub &'a RiskAssessment);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assessment = self.0;
        writeln!(f, "{}%", assessment.score)?;
        writeln!(f, "{} Risk", assessment.tier)?;
        writeln!(f, "{}", assessment.tier.verdict())?;
        writeln!(f)?;

        let profile = if assessment.company_verified {
            "Verified"
        } else {
            "Not Found"
        };
        writeln!(f, "Company Profile: {}", profile)?;
        writeln!(f, "Community Reports: {}", assessment.community_report_count)?;

        if !assessment.red_flags.is_empty() {
            writeln!(f)?;
            writeln!(f, "Red Flags Detected:")?;
            for flag in &assessment.red_flags {
                writeln!(f, "  - {}", flag)?;
            }
        }

        if !assessment.green_flags.is_empty() {
            writeln!(f)?;
            writeln!(f, "Positive Indicators:")?;
            for flag in &assessment.green_flags {
                writeln!(f, "  - {}", flag)?;
            }
        }

        if assessment.similar_scam_count > 0 {
            writeln!(f)?;
            writeln!(
                f,
                "We found {} similar scam(s) in our database with matching patterns.",
                assessment.similar_scam_count
            )?;
        }

        Ok(())
    }
}

/// Render the result screen as text
pub fn render_report(assessment: &RiskAssessment) -> String {
    Report(assessment).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scamguard_risk::RiskTier;

    fn assessment() -> RiskAssessment {
        RiskAssessment {
            score: 64,
            tier: RiskTier::High,
            red_flags: vec![
                "Money requested (Major red flag)".to_string(),
                "Pressure tactics used".to_string(),
            ],
            green_flags: vec![],
            company_verified: false,
            community_report_count: 3,
            similar_scam_count: 2,
        }
    }

    #[test]
    fn test_report_high_risk() {
        let report = render_report(&assessment());

        assert!(report.starts_with("64%\nHigh Risk\nThis internship shows multiple red flags\n"));
        assert!(report.contains("Company Profile: Not Found"));
        assert!(report.contains("Community Reports: 3"));
        assert!(report.contains("Red Flags Detected:\n  - Money requested (Major red flag)\n  - Pressure tactics used\n"));
        assert!(!report.contains("Positive Indicators"));
        assert!(report.contains("We found 2 similar scam(s)"));
    }

    #[test]
    fn test_report_omits_empty_sections() {
        let clean = RiskAssessment {
            score: 4,
            tier: RiskTier::Low,
            red_flags: vec![],
            green_flags: vec!["Professional email domain".to_string()],
            company_verified: true,
            community_report_count: 0,
            similar_scam_count: 0,
        };
        let report = render_report(&clean);

        assert!(report.contains("Low Risk"));
        assert!(report.contains("Company Profile: Verified"));
        assert!(!report.contains("Red Flags"));
        assert!(report.contains("Positive Indicators:\n  - Professional email domain\n"));
        assert!(!report.contains("similar scam"));
    }

    #[test]
    fn test_report_display_matches_render() {
        let assessment = assessment();
        assert_eq!(format!("{}", Report(&assessment)), render_report(&assessment));
    }
}
