//! Questionnaire answers collected from the user

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::CoreError;
use crate::question::{Answer, Question};

/// A single answered question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    pub question_id: Question,
    pub answer: Answer,
}

impl QuestionnaireResponse {
    pub fn new(question_id: Question, answer: Answer) -> Self {
        Self {
            question_id,
            answer,
        }
    }
}

/// Answers to the fixed question set, at most one per question
///
/// Unanswered questions are `None`. Storage is indexed by
/// [`Question::index`], so iteration is always in question order no matter
/// the order answers arrived in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    answers: [Option<Answer>; Question::TOTAL],
}

impl Questionnaire {
    /// Create an empty questionnaire
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of responses.
    ///
    /// Each question may appear at most once; missing questions stay
    /// unanswered.
    pub fn from_responses(
        responses: impl IntoIterator<Item = QuestionnaireResponse>,
    ) -> Result<Self, CoreError> {
        let mut questionnaire = Self::new();
        for response in responses {
            if questionnaire.get(response.question_id).is_some() {
                return Err(CoreError::DuplicateAnswer(response.question_id));
            }
            questionnaire.answer(response.question_id, response.answer);
        }
        Ok(questionnaire)
    }

    /// Build from answers given in question order.
    ///
    /// Requires exactly one answer per question.
    pub fn from_ordered(answers: &[Answer]) -> Result<Self, CoreError> {
        if answers.len() != Question::TOTAL {
            return Err(CoreError::AnswerCount {
                expected: Question::TOTAL,
                actual: answers.len(),
            });
        }
        let mut questionnaire = Self::new();
        for (question, answer) in Question::iter().zip(answers) {
            questionnaire.answer(question, *answer);
        }
        Ok(questionnaire)
    }

    /// Record (or replace) the answer to a question
    pub fn answer(&mut self, question: Question, answer: Answer) {
        self.answers[question.index()] = Some(answer);
    }

    /// Remove the answer to a question
    pub fn clear(&mut self, question: Question) {
        self.answers[question.index()] = None;
    }

    pub fn get(&self, question: Question) -> Option<Answer> {
        self.answers[question.index()]
    }

    /// Unanswered questions, in question order
    pub fn missing(&self) -> Vec<Question> {
        Question::iter().filter(|q| self.get(*q).is_none()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    /// Answered questions, in question order
    pub fn responses(&self) -> impl Iterator<Item = QuestionnaireResponse> + '_ {
        Question::iter().filter_map(|q| self.get(q).map(|a| QuestionnaireResponse::new(q, a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_questionnaire_is_incomplete() {
        let q = Questionnaire::new();
        assert!(!q.is_complete());
        assert_eq!(q.missing().len(), 5);
        assert_eq!(q.responses().count(), 0);
    }

    #[test]
    fn test_answer_replaces_previous() {
        let mut q = Questionnaire::new();
        q.answer(Question::MoneyRequested, Answer::Yes);
        q.answer(Question::MoneyRequested, Answer::No);
        assert_eq!(q.get(Question::MoneyRequested), Some(Answer::No));

        q.clear(Question::MoneyRequested);
        assert_eq!(q.get(Question::MoneyRequested), None);
    }

    #[test]
    fn test_from_responses_out_of_order() {
        let q = Questionnaire::from_responses(vec![
            QuestionnaireResponse::new(Question::PressureTactics, Answer::Yes),
            QuestionnaireResponse::new(Question::MoneyRequested, Answer::No),
        ])
        .unwrap();

        assert_eq!(
            q.missing(),
            vec![
                Question::PersonalEmail,
                Question::ListedOnOfficialSite,
                Question::GenericMessaging,
            ]
        );
        let order: Vec<Question> = q.responses().map(|r| r.question_id).collect();
        assert_eq!(order, vec![Question::MoneyRequested, Question::PressureTactics]);
    }

    #[test]
    fn test_from_responses_rejects_duplicates() {
        let result = Questionnaire::from_responses(vec![
            QuestionnaireResponse::new(Question::GenericMessaging, Answer::Yes),
            QuestionnaireResponse::new(Question::GenericMessaging, Answer::No),
        ]);
        assert_eq!(
            result,
            Err(CoreError::DuplicateAnswer(Question::GenericMessaging))
        );
    }

    #[test]
    fn test_from_ordered() {
        let q = Questionnaire::from_ordered(&[
            Answer::Yes,
            Answer::No,
            Answer::NotSure,
            Answer::No,
            Answer::Yes,
        ])
        .unwrap();
        assert!(q.is_complete());
        assert_eq!(q.get(Question::ListedOnOfficialSite), Some(Answer::NotSure));

        let err = Questionnaire::from_ordered(&[Answer::Yes]).unwrap_err();
        assert_eq!(
            err,
            CoreError::AnswerCount {
                expected: 5,
                actual: 1
            }
        );
    }
}
