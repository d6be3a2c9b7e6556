//! ScamGuard Risk - Internship offer risk classifier
//!
//! Turns a completed questionnaire plus the recruiter's email into a
//! [`RiskAssessment`]: a 0-100 score, a coarse [`RiskTier`], and the red and
//! green flags that produced it.
//!
//! The score carries a small random jitter and the auxiliary indicators are
//! random filler, so every draw goes through an [`EntropySource`]. Tests
//! inject [`ScriptedEntropy`] or a seeded [`RngEntropy`] for determinism.

pub mod assessment;
pub mod classifier;
pub mod config;
pub mod entropy;
pub mod error;

pub use assessment::{RiskAssessment, RiskTier};
pub use classifier::RiskClassifier;
pub use config::ClassifierConfig;
pub use entropy::{EntropySource, RngEntropy, ScriptedEntropy};
pub use error::RiskError;
