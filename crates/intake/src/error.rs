//! Intake flow errors

use scamguard_core::Question;
use scamguard_risk::RiskError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntakeError {
    #[error("Please provide internship details")]
    MissingInternshipText,

    #[error("Please provide company name and recruiter email")]
    MissingCompanyDetails,

    #[error("Please answer all questions ({} unanswered)", .missing.len())]
    UnansweredQuestions { missing: Vec<Question> },

    #[error("Scan already completed; go back or restart to edit")]
    ScanCompleted,

    #[error("Unsupported offer letter type: {file_name} (expected PDF, JPG or PNG)")]
    UnsupportedOfferLetter { file_name: String },

    #[error("Offer letter too large: {size_bytes} bytes (limit {limit_bytes})")]
    OfferLetterTooLarge { size_bytes: u64, limit_bytes: u64 },

    #[error(transparent)]
    Risk(#[from] RiskError),
}
