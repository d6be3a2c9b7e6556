//! Risk classifier
//!
//! Scores an internship offer from the questionnaire answers and the
//! recruiter's email:
//!
//! 1. one red flag per question answered with its risky value, in question order
//! 2. one red flag for a personal webmail address, or one green flag for a
//!    generic business domain
//! 3. `score = min(max_score, red_flags * flag_weight + jitter)`
//! 4. tier from score thresholds
//! 5. auxiliary indicators drawn independently

use scamguard_core::{ContactInfo, Question, Questionnaire};
use strum::IntoEnumIterator;

use crate::assessment::{RiskAssessment, RiskTier};
use crate::config::ClassifierConfig;
use crate::entropy::EntropySource;
use crate::error::RiskError;

/// Red flag for a consumer webmail recruiter address
pub const PERSONAL_EMAIL_FLAG: &str = "Personal email domain used";

/// Green flag for a business-looking recruiter address
pub const PROFESSIONAL_EMAIL_FLAG: &str = "Professional email domain";

/// Stateless classifier over a fixed rubric
#[derive(Debug, Clone, Default)]
pub struct RiskClassifier {
    config: ClassifierConfig,
}

impl RiskClassifier {
    /// Create a classifier with a validated config
    pub fn new(config: ClassifierConfig) -> Result<Self, RiskError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a completed questionnaire.
    ///
    /// Fails with [`RiskError::IncompleteInput`] if any question is
    /// unanswered, whatever the email. Draws from `entropy` in a fixed order:
    /// jitter, company verification, community reports, similar scams.
    pub fn classify<E>(
        &self,
        questionnaire: &Questionnaire,
        contact: &ContactInfo,
        entropy: &mut E,
    ) -> Result<RiskAssessment, RiskError>
    where
        E: EntropySource + ?Sized,
    {
        let missing = questionnaire.missing();
        if !missing.is_empty() {
            tracing::warn!(missing = missing.len(), "Classification rejected: unanswered questions");
            return Err(RiskError::IncompleteInput { missing });
        }

        let mut red_flags = Vec::new();
        let mut green_flags = Vec::new();

        for question in Question::iter() {
            if let Some(answer) = questionnaire.get(question) {
                if question.is_risky(answer) {
                    red_flags.push(question.red_flag().to_string());
                }
            }
        }

        self.check_email(contact.email(), &mut red_flags, &mut green_flags);

        let jitter = entropy.below(self.config.jitter_bound);
        let raw = (red_flags.len() as u32)
            .saturating_mul(self.config.flag_weight)
            .saturating_add(jitter);
        let score = raw.min(self.config.max_score);
        let tier = RiskTier::from_score(
            score,
            self.config.medium_threshold,
            self.config.high_threshold,
        );

        let company_verified = entropy.chance(self.config.company_verified_probability);
        let community_report_count = entropy.below(self.config.community_report_bound);
        let similar_scam_count = entropy.below(self.config.similar_scam_bound);

        tracing::debug!(
            score,
            jitter,
            tier = %tier,
            red_flags = red_flags.len(),
            green_flags = green_flags.len(),
            "Classified submission"
        );

        Ok(RiskAssessment {
            // max_score <= 100 is enforced by validate()
            score: score.min(100) as u8,
            tier,
            red_flags,
            green_flags,
            company_verified,
            community_report_count,
            similar_scam_count,
        })
    }

    /// Case-insensitive substring checks on the recruiter email
    fn check_email(&self, email: &str, red_flags: &mut Vec<String>, green_flags: &mut Vec<String>) {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return;
        }

        let personal = self
            .config
            .personal_email_domains
            .iter()
            .any(|domain| email.contains(&format!("@{}", domain.to_lowercase())));

        if personal {
            red_flags.push(PERSONAL_EMAIL_FLAG.to_string());
            return;
        }

        let generic_tld = self
            .config
            .professional_tld_markers
            .iter()
            .any(|marker| email.contains(&marker.to_lowercase()));
        let mentions_provider = self
            .config
            .personal_providers()
            .any(|provider| email.contains(&provider.to_lowercase()));

        if generic_tld && !mentions_provider {
            green_flags.push(PROFESSIONAL_EMAIL_FLAG.to_string());
        }
    }
}
