//! Recruiter contact details

use serde::{Deserialize, Serialize};

/// Contact information supplied for the recruiter.
///
/// The email is free text; only substring checks are applied to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub recruiter_email: Option<String>,
}

impl ContactInfo {
    pub fn new(recruiter_email: impl Into<String>) -> Self {
        Self {
            recruiter_email: Some(recruiter_email.into()),
        }
    }

    /// No email supplied
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Email as a plain string (empty when absent)
    pub fn email(&self) -> &str {
        self.recruiter_email.as_deref().unwrap_or("")
    }
}
