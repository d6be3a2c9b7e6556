//! Risk classifier errors

use scamguard_core::Question;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    #[error("Incomplete input: {} of {} questions unanswered", .missing.len(), Question::TOTAL)]
    IncompleteInput { missing: Vec<Question> },

    #[error("Invalid classifier config: {0}")]
    InvalidConfig(String),
}
