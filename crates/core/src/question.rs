//! Screening questions and their answers
//!
//! The question set is fixed. Iteration via [`Question::iter`] always yields
//! the questions in display order, which is also the order red flags are
//! reported in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::CoreError;

/// One of the five fixed screening questions
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Question {
    /// Did they ask for money or a security deposit?
    MoneyRequested,
    /// Did the offer come from a personal email ID?
    PersonalEmail,
    /// Is the internship listed on the company's official website?
    ListedOnOfficialSite,
    /// Was the same message sent to others?
    GenericMessaging,
    /// Are they pressuring for a quick response?
    PressureTactics,
}

impl Question {
    /// Number of questions in the fixed set
    pub const TOTAL: usize = Question::COUNT;

    /// Position in the fixed question order (0-based)
    pub fn index(&self) -> usize {
        match self {
            Question::MoneyRequested => 0,
            Question::PersonalEmail => 1,
            Question::ListedOnOfficialSite => 2,
            Question::GenericMessaging => 3,
            Question::PressureTactics => 4,
        }
    }

    /// Question at the given position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Parse a question identifier such as `money_requested`
    pub fn from_id(id: &str) -> Result<Self, CoreError> {
        Question::from_str(id.trim()).map_err(|_| CoreError::UnknownQuestion(id.to_string()))
    }

    /// Prompt shown to the user
    pub fn prompt(&self) -> &'static str {
        match self {
            Question::MoneyRequested => "Did they ask for any money or security deposit?",
            Question::PersonalEmail => "Is this internship from a Gmail or personal email ID?",
            Question::ListedOnOfficialSite => {
                "Can you find this internship on the company's official website?"
            }
            Question::GenericMessaging => "Did they send you the same message as others?",
            Question::PressureTactics => "Are they pressuring you to respond quickly?",
        }
    }

    /// The answer that counts as a warning sign for this question
    pub fn risky_answer(&self) -> Answer {
        match self {
            Question::ListedOnOfficialSite => Answer::No,
            _ => Answer::Yes,
        }
    }

    /// Red flag reported when the risky answer is given
    pub fn red_flag(&self) -> &'static str {
        match self {
            Question::MoneyRequested => "Money requested (Major red flag)",
            Question::PersonalEmail => "Using personal email domain",
            Question::ListedOnOfficialSite => "Not found on company website",
            Question::GenericMessaging => "Generic/mass messaging detected",
            Question::PressureTactics => "Pressure tactics used",
        }
    }

    /// Whether `answer` is the risky answer for this question
    pub fn is_risky(&self, answer: Answer) -> bool {
        self.risky_answer() == answer
    }
}

/// Answer to a screening question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Answer {
    Yes,
    No,
    NotSure,
}

impl Answer {
    /// Label shown next to the radio option
    pub fn label(&self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
            Answer::NotSure => "Not Sure",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Answer {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(Answer::Yes),
            "no" | "n" => Ok(Answer::No),
            "not sure" | "not_sure" | "notsure" | "not-sure" | "unsure" => Ok(Answer::NotSure),
            _ => Err(CoreError::InvalidAnswer(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_order_is_fixed() {
        let order: Vec<Question> = Question::iter().collect();
        assert_eq!(
            order,
            vec![
                Question::MoneyRequested,
                Question::PersonalEmail,
                Question::ListedOnOfficialSite,
                Question::GenericMessaging,
                Question::PressureTactics,
            ]
        );
        for (i, q) in order.iter().enumerate() {
            assert_eq!(q.index(), i);
            assert_eq!(Question::from_index(i), Some(*q));
        }
        assert_eq!(Question::TOTAL, 5);
        assert_eq!(Question::from_index(5), None);
    }

    #[test]
    fn test_risky_answers() {
        assert!(Question::MoneyRequested.is_risky(Answer::Yes));
        assert!(Question::ListedOnOfficialSite.is_risky(Answer::No));
        assert!(!Question::ListedOnOfficialSite.is_risky(Answer::Yes));
        assert!(!Question::PressureTactics.is_risky(Answer::NotSure));
    }

    #[test]
    fn test_question_id_roundtrip() {
        assert_eq!(Question::GenericMessaging.to_string(), "generic_messaging");
        assert_eq!(
            Question::from_id("listed_on_official_site").unwrap(),
            Question::ListedOnOfficialSite
        );
        assert!(matches!(
            Question::from_id("salary"),
            Err(CoreError::UnknownQuestion(_))
        ));
    }

    #[test]
    fn test_answer_parsing() {
        assert_eq!("YES".parse::<Answer>().unwrap(), Answer::Yes);
        assert_eq!(" n ".parse::<Answer>().unwrap(), Answer::No);
        assert_eq!("Not Sure".parse::<Answer>().unwrap(), Answer::NotSure);
        assert_eq!("not_sure".parse::<Answer>().unwrap(), Answer::NotSure);
        assert!(matches!("".parse::<Answer>(), Err(CoreError::InvalidAnswer(_))));
        assert!(matches!("maybe".parse::<Answer>(), Err(CoreError::InvalidAnswer(_))));
    }

    #[test]
    fn test_answer_display() {
        assert_eq!(Answer::NotSure.to_string(), "Not Sure");
        assert_eq!(Answer::Yes.to_string(), "Yes");
    }

    #[test]
    fn test_serde_ids() {
        let json = serde_json::to_string(&Question::PressureTactics).unwrap();
        assert_eq!(json, "\"pressure_tactics\"");
        let answer: Answer = serde_json::from_str("\"NotSure\"").unwrap();
        assert_eq!(answer, Answer::NotSure);
    }
}
