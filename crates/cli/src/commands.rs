//! CLI commands

use anyhow::Context;
use chrono::{DateTime, Utc};
use scamguard_core::{Answer, ContactInfo, Question, Questionnaire};
use scamguard_intake::{render_report, IntakeAction, IntakeFlow, OfferLetter};
use scamguard_risk::RiskAssessment;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use strum::IntoEnumIterator;
use uuid::Uuid;

use crate::context::AppContext;

/// Parse comma-separated answers given in question order
///
/// Example: `yes,no,not sure,no,yes`
pub fn parse_answers(input: &str) -> Result<Questionnaire, anyhow::Error> {
    let answers = input
        .split(',')
        .map(|part| part.parse::<Answer>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Questionnaire::from_ordered(&answers)?)
}

/// List the screening questions
pub fn questions() -> Vec<(Question, &'static str)> {
    Question::iter().map(|q| (q, q.prompt())).collect()
}

/// Classify answers and an optional recruiter email
pub fn classify(
    ctx: &AppContext,
    answers: &Questionnaire,
    email: Option<&str>,
    seed: Option<u64>,
) -> Result<RiskAssessment, anyhow::Error> {
    let contact = match email {
        Some(email) => ContactInfo::new(email),
        None => ContactInfo::anonymous(),
    };
    let mut entropy = AppContext::entropy(seed);
    let assessment = ctx.classifier.classify(answers, &contact, entropy.as_mut())?;
    Ok(assessment)
}

/// Input for a full scan
#[derive(Debug, Clone, Default)]
pub struct ScanRequest {
    pub internship_text: String,
    pub company_name: String,
    pub recruiter_email: String,
    pub recruiter_name: Option<String>,
    pub recruiter_phone: Option<String>,
    pub offer_letter: Option<PathBuf>,
    pub answers: Questionnaire,
}

/// Result of a full scan
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    pub scan_id: Uuid,
    pub scanned_at: DateTime<Utc>,
    pub company_name: String,
    pub offer_letter: Option<String>,
    pub assessment: RiskAssessment,
}

/// Run the intake flow end to end.
///
/// `delay` is waited before the final submission to mimic processing.
pub async fn scan(
    ctx: &AppContext,
    request: ScanRequest,
    seed: Option<u64>,
    delay: Duration,
) -> Result<ScanSummary, anyhow::Error> {
    let offer_letter = match &request.offer_letter {
        Some(path) => Some(load_offer_letter(path)?),
        None => None,
    };

    let mut actions = vec![
        IntakeAction::SetInternshipText(request.internship_text),
        IntakeAction::Next,
        IntakeAction::SetCompanyName(request.company_name),
        IntakeAction::SetRecruiterEmail(request.recruiter_email),
    ];
    if let Some(letter) = offer_letter {
        actions.insert(1, IntakeAction::AttachOfferLetter(letter));
    }
    if let Some(name) = request.recruiter_name {
        actions.push(IntakeAction::SetRecruiterName(name));
    }
    if let Some(phone) = request.recruiter_phone {
        actions.push(IntakeAction::SetRecruiterPhone(phone));
    }
    actions.push(IntakeAction::Next);
    actions.extend(
        request
            .answers
            .responses()
            .map(|r| IntakeAction::Answer(r.question_id, r.answer)),
    );

    let mut flow = IntakeFlow::new(ctx.classifier.clone());
    let mut entropy = AppContext::entropy(seed);
    for action in actions {
        flow.update(action, entropy.as_mut())?;
    }

    if !delay.is_zero() {
        println!("Analyzing your submission...");
        tokio::time::sleep(delay).await;
    }
    flow.update(IntakeAction::Next, entropy.as_mut())?;

    let state = flow.into_state();
    let assessment = state
        .result
        .context("Scan finished without an assessment")?;

    Ok(ScanSummary {
        scan_id: Uuid::new_v4(),
        scanned_at: Utc::now(),
        company_name: state.form.company_name,
        offer_letter: state.form.offer_letter.map(|l| l.file_name),
        assessment,
    })
}

fn load_offer_letter(path: &std::path::Path) -> Result<OfferLetter, anyhow::Error> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Cannot read offer letter {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Invalid offer letter path {}", path.display()))?;
    Ok(OfferLetter::new(file_name, metadata.len())?)
}

/// Print the list of questions
pub fn print_questions() {
    for (i, (question, prompt)) in questions().into_iter().enumerate() {
        println!("{}. [{}] {}", i + 1, question, prompt);
    }
}

/// Print an assessment as JSON or as the text report
pub fn print_assessment(assessment: &RiskAssessment, json: bool) -> Result<(), anyhow::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(assessment)?);
    } else {
        print!("{}", render_report(assessment));
    }
    Ok(())
}

/// Print a scan summary as JSON or as the text report
pub fn print_summary(summary: &ScanSummary, json: bool) -> Result<(), anyhow::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        println!("Scan {} for {}", summary.scan_id, summary.company_name);
        println!();
        print!("{}", render_report(&summary.assessment));
    }
    Ok(())
}

/// Print the effective configuration
pub fn print_config(ctx: &AppContext) -> Result<(), anyhow::Error> {
    println!("{}", serde_json::to_string_pretty(ctx.config())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answers() {
        let q = parse_answers("yes, No ,not sure,n,Y").unwrap();
        assert!(q.is_complete());
        assert_eq!(q.get(Question::ListedOnOfficialSite), Some(Answer::NotSure));
        assert_eq!(q.get(Question::PressureTactics), Some(Answer::Yes));
    }

    #[test]
    fn test_parse_answers_rejects_bad_input() {
        assert!(parse_answers("yes,no").is_err());
        assert!(parse_answers("yes,no,maybe,no,no").is_err());
        assert!(parse_answers("yes,no,,no,no").is_err());
    }

    #[test]
    fn test_questions_listed_in_order() {
        let list = questions();
        assert_eq!(list.len(), 5);
        assert_eq!(list[0].0, Question::MoneyRequested);
        assert_eq!(list[4].1, "Are they pressuring you to respond quickly?");
    }
}
