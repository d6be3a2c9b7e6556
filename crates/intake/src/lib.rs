//! ScamGuard Intake - Scan flow
//!
//! ```text
//! Details ──► Company ──► Questions ──► Results
//!  (offer     (company,    (five         (assessment
//!   text)      recruiter)   answers)      + report)
//! ```
//!
//! All view state lives in [`IntakeState`]; [`IntakeFlow::update`] is the only
//! way to change it.

pub mod error;
pub mod flow;
pub mod form;
pub mod report;

pub use error::IntakeError;
pub use flow::{IntakeAction, IntakeFlow, IntakeState, IntakeStep, Transition};
pub use form::{IntakeForm, OfferLetter};
pub use report::{render_report, Report};
