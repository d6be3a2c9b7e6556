//! Intake flow state container

use scamguard_core::{Answer, ContactInfo, Question, Questionnaire};
use scamguard_risk::{EntropySource, RiskAssessment, RiskClassifier};
use serde::{Deserialize, Serialize};

use crate::error::IntakeError;
use crate::form::{IntakeForm, OfferLetter};

/// Stage of the scan flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStep {
    /// Paste the offer text, optionally attach the letter
    #[default]
    Details,
    /// Company and recruiter contact
    Company,
    /// The five screening questions
    Questions,
    /// Assessment shown
    Results,
}

impl IntakeStep {
    pub const TOTAL: u8 = 4;

    /// 1-based step number
    pub fn number(&self) -> u8 {
        match self {
            IntakeStep::Details => 1,
            IntakeStep::Company => 2,
            IntakeStep::Questions => 3,
            IntakeStep::Results => 4,
        }
    }

    pub fn progress_percent(&self) -> u8 {
        self.number() * (100 / Self::TOTAL)
    }

    fn previous(&self) -> Option<Self> {
        match self {
            IntakeStep::Details => None,
            IntakeStep::Company => Some(IntakeStep::Details),
            IntakeStep::Questions => Some(IntakeStep::Company),
            IntakeStep::Results => Some(IntakeStep::Questions),
        }
    }
}

/// Everything the scan screen renders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeState {
    pub step: IntakeStep,
    pub form: IntakeForm,
    pub answers: Questionnaire,
    /// Present only on the Results step
    pub result: Option<RiskAssessment>,
}

/// User input dispatched to [`IntakeFlow::update`]
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeAction {
    SetInternshipText(String),
    SetCompanyName(String),
    SetRecruiterEmail(String),
    SetRecruiterPhone(String),
    SetRecruiterName(String),
    AttachOfferLetter(OfferLetter),
    RemoveOfferLetter,
    Answer(Question, Answer),
    Next,
    Back,
    Restart,
}

/// What an accepted action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A field changed; still on the same step
    Edited,
    /// Moved forward to the given step
    Advanced(IntakeStep),
    /// Moved back to the given step
    Returned(IntakeStep),
    /// Back pressed on the first step; the caller leaves the flow
    ExitedToHome,
    /// Everything cleared, back on the first step
    Restarted,
    /// Nothing to do (Next on Results)
    Unchanged,
}

/// Drives an [`IntakeState`] through the four steps
#[derive(Debug, Clone, Default)]
pub struct IntakeFlow {
    classifier: RiskClassifier,
    state: IntakeState,
}

impl IntakeFlow {
    pub fn new(classifier: RiskClassifier) -> Self {
        Self {
            classifier,
            state: IntakeState::default(),
        }
    }

    /// Resume from a previously saved state
    pub fn with_state(classifier: RiskClassifier, state: IntakeState) -> Self {
        Self { classifier, state }
    }

    pub fn state(&self) -> &IntakeState {
        &self.state
    }

    pub fn into_state(self) -> IntakeState {
        self.state
    }

    /// Apply one action.
    ///
    /// A rejected action leaves the state untouched. Field edits and answers
    /// are rejected on the Results step; go `Back` or `Restart` first. `Next` on the Questions
    /// step runs the classifier, drawing from `entropy`.
    pub fn update<E>(&mut self, action: IntakeAction, entropy: &mut E) -> Result<Transition, IntakeError>
    where
        E: EntropySource + ?Sized,
    {
        let is_edit = !matches!(
            action,
            IntakeAction::Next | IntakeAction::Back | IntakeAction::Restart
        );
        if is_edit && self.state.step == IntakeStep::Results {
            tracing::warn!("Edit rejected on results step");
            return Err(IntakeError::ScanCompleted);
        }

        match action {
            IntakeAction::SetInternshipText(text) => self.state.form.internship_text = text,
            IntakeAction::SetCompanyName(name) => self.state.form.company_name = name,
            IntakeAction::SetRecruiterEmail(email) => self.state.form.recruiter_email = email,
            IntakeAction::SetRecruiterPhone(phone) => self.state.form.recruiter_phone = phone,
            IntakeAction::SetRecruiterName(name) => self.state.form.recruiter_name = name,
            IntakeAction::AttachOfferLetter(letter) => {
                tracing::info!(file = %letter.file_name, bytes = letter.size_bytes, "Offer letter attached");
                self.state.form.offer_letter = Some(letter);
            }
            IntakeAction::RemoveOfferLetter => self.state.form.offer_letter = None,
            IntakeAction::Answer(question, answer) => self.state.answers.answer(question, answer),
            IntakeAction::Next => return self.next(entropy),
            IntakeAction::Back => return Ok(self.back()),
            IntakeAction::Restart => {
                self.state = IntakeState::default();
                tracing::info!("Intake restarted");
                return Ok(Transition::Restarted);
            }
        }
        Ok(Transition::Edited)
    }

    fn next<E>(&mut self, entropy: &mut E) -> Result<Transition, IntakeError>
    where
        E: EntropySource + ?Sized,
    {
        let target = match self.state.step {
            IntakeStep::Details => {
                if !self.state.form.has_details() {
                    return Err(IntakeError::MissingInternshipText);
                }
                IntakeStep::Company
            }
            IntakeStep::Company => {
                if !self.state.form.has_company_details() {
                    return Err(IntakeError::MissingCompanyDetails);
                }
                IntakeStep::Questions
            }
            IntakeStep::Questions => {
                let missing = self.state.answers.missing();
                if !missing.is_empty() {
                    return Err(IntakeError::UnansweredQuestions { missing });
                }
                let contact = ContactInfo::new(self.state.form.recruiter_email.trim());
                let assessment = self.classifier.classify(&self.state.answers, &contact, entropy)?;
                tracing::info!(
                    company = %self.state.form.company_name,
                    score = assessment.score,
                    tier = %assessment.tier,
                    "Scan completed"
                );
                self.state.result = Some(assessment);
                IntakeStep::Results
            }
            IntakeStep::Results => return Ok(Transition::Unchanged),
        };

        self.state.step = target;
        tracing::info!(step = target.number(), "Intake advanced");
        Ok(Transition::Advanced(target))
    }

    fn back(&mut self) -> Transition {
        match self.state.step.previous() {
            Some(previous) => {
                if self.state.step == IntakeStep::Results {
                    self.state.result = None;
                }
                self.state.step = previous;
                Transition::Returned(previous)
            }
            None => Transition::ExitedToHome,
        }
    }
}
