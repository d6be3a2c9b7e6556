//! Intake form fields

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::IntakeError;

/// Offer letter size limit (10 MiB)
pub const MAX_OFFER_LETTER_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted offer letter extensions
pub const OFFER_LETTER_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

/// An attached offer letter. Only its name and size are kept; the contents
/// are never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferLetter {
    pub file_name: String,
    pub size_bytes: u64,
}

impl OfferLetter {
    /// Validate extension and size
    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Result<Self, IntakeError> {
        let file_name = file_name.into();
        let supported = Path::new(&file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                OFFER_LETTER_EXTENSIONS
                    .iter()
                    .any(|allowed| ext.eq_ignore_ascii_case(allowed))
            })
            .unwrap_or(false);

        if !supported {
            return Err(IntakeError::UnsupportedOfferLetter { file_name });
        }
        if size_bytes > MAX_OFFER_LETTER_BYTES {
            return Err(IntakeError::OfferLetterTooLarge {
                size_bytes,
                limit_bytes: MAX_OFFER_LETTER_BYTES,
            });
        }

        Ok(Self {
            file_name,
            size_bytes,
        })
    }
}

/// Free-text fields collected over the first two steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeForm {
    pub internship_text: String,
    pub company_name: String,
    pub recruiter_email: String,
    pub recruiter_phone: String,
    pub recruiter_name: String,
    pub offer_letter: Option<OfferLetter>,
}

impl IntakeForm {
    /// Step 1 is complete once the offer text is non-blank
    pub fn has_details(&self) -> bool {
        !self.internship_text.trim().is_empty()
    }

    /// Step 2 requires company name and recruiter email
    pub fn has_company_details(&self) -> bool {
        !self.company_name.trim().is_empty() && !self.recruiter_email.trim().is_empty()
    }
}
