//! ScamGuard Core - Questionnaire domain types
//!
//! The five screening questions, their answers, and the recruiter contact
//! details that feed the risk classifier.

pub mod contact;
pub mod error;
pub mod question;
pub mod questionnaire;

pub use contact::ContactInfo;
pub use error::CoreError;
pub use question::{Answer, Question};
pub use questionnaire::{Questionnaire, QuestionnaireResponse};
