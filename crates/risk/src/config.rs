//! Classifier configuration
//!
//! Every field has a default matching the stock scoring rubric, so a config
//! file only needs to name the values it overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RiskError;

/// Scoring rubric and filler-indicator ranges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    // === Score ===
    /// Points added per red flag
    #[serde(default = "default_flag_weight")]
    pub flag_weight: u32,

    /// Jitter is drawn uniformly from `[0, jitter_bound)`
    #[serde(default = "default_jitter_bound")]
    pub jitter_bound: u32,

    /// Score ceiling (at most 100)
    #[serde(default = "default_max_score")]
    pub max_score: u32,

    // === Tiers ===
    /// Scores strictly above this are High
    #[serde(default = "default_high_threshold")]
    pub high_threshold: u32,

    /// Scores strictly above this (and not High) are Medium
    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: u32,

    // === Auxiliary indicators ===
    /// Probability that the company shows as verified
    #[serde(default = "default_company_verified_probability")]
    pub company_verified_probability: f64,

    /// Community report count is drawn from `[0, community_report_bound)`
    #[serde(default = "default_community_report_bound")]
    pub community_report_bound: u32,

    /// Similar scam count is drawn from `[0, similar_scam_bound)`
    #[serde(default = "default_similar_scam_bound")]
    pub similar_scam_bound: u32,

    // === Email checks ===
    /// Consumer webmail domains, matched as `@<domain>`
    #[serde(default = "default_personal_email_domains")]
    pub personal_email_domains: Vec<String>,

    /// Markers of a generic top-level domain
    #[serde(default = "default_professional_tld_markers")]
    pub professional_tld_markers: Vec<String>,
}

fn default_flag_weight() -> u32 {
    20
}

fn default_jitter_bound() -> u32 {
    10
}

fn default_max_score() -> u32 {
    100
}

fn default_high_threshold() -> u32 {
    60
}

fn default_medium_threshold() -> u32 {
    30
}

fn default_company_verified_probability() -> f64 {
    0.7
}

fn default_community_report_bound() -> u32 {
    5
}

fn default_similar_scam_bound() -> u32 {
    3
}

fn default_personal_email_domains() -> Vec<String> {
    vec!["gmail.com".to_string(), "yahoo.com".to_string()]
}

fn default_professional_tld_markers() -> Vec<String> {
    vec![".com".to_string()]
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            flag_weight: default_flag_weight(),
            jitter_bound: default_jitter_bound(),
            max_score: default_max_score(),
            high_threshold: default_high_threshold(),
            medium_threshold: default_medium_threshold(),
            company_verified_probability: default_company_verified_probability(),
            community_report_bound: default_community_report_bound(),
            similar_scam_bound: default_similar_scam_bound(),
            personal_email_domains: default_personal_email_domains(),
            professional_tld_markers: default_professional_tld_markers(),
        }
    }
}

impl ClassifierConfig {
    /// Load configuration from a JSON file and validate it
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        config
            .validate()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Reject settings the classifier cannot apply
    pub fn validate(&self) -> Result<(), RiskError> {
        if self.jitter_bound == 0 {
            return Err(RiskError::InvalidConfig(
                "jitter_bound must be at least 1".to_string(),
            ));
        }
        if self.max_score > 100 {
            return Err(RiskError::InvalidConfig(format!(
                "max_score {} exceeds 100",
                self.max_score
            )));
        }
        if self.medium_threshold >= self.high_threshold {
            return Err(RiskError::InvalidConfig(format!(
                "medium_threshold {} must be below high_threshold {}",
                self.medium_threshold, self.high_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.company_verified_probability) {
            return Err(RiskError::InvalidConfig(format!(
                "company_verified_probability {} outside [0, 1]",
                self.company_verified_probability
            )));
        }
        if self
            .personal_email_domains
            .iter()
            .chain(&self.professional_tld_markers)
            .any(|entry| entry.trim().is_empty())
        {
            return Err(RiskError::InvalidConfig(
                "email domain and TLD markers must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Provider names of the personal domains (`gmail` for `gmail.com`)
    pub fn personal_providers(&self) -> impl Iterator<Item = &str> {
        self.personal_email_domains
            .iter()
            .filter_map(|d| d.split('.').next())
            .filter(|p| !p.is_empty())
    }
}
