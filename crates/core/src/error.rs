//! Core domain errors

use thiserror::Error;

use crate::question::Question;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid answer: '{0}' (expected yes, no or not sure)")]
    InvalidAnswer(String),

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Question answered more than once: {0}")]
    DuplicateAnswer(Question),

    #[error("Expected {expected} answers, got {actual}")]
    AnswerCount { expected: usize, actual: usize },
}
