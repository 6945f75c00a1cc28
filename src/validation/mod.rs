//! Submission validation
//!
//! Gates a draft before it reaches the store: required fields present,
//! email in a valid shape, at least one non-blank address line. All
//! violations are collected so the form can surface them together.

use crate::models::ContactDraft;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Error during submission validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Required field missing: {0}")]
    MissingField(&'static str),
    #[error("Not a valid email address: {0}")]
    InvalidEmail(String),
    #[error("At least one non-blank address line is required")]
    NoAddressLines,
}

/// Trim address lines for submission, dropping fully blank entries
pub fn trimmed_address_lines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Validate a draft, reporting every violation at once
pub fn validate_draft(draft: &ContactDraft) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(ValidationError::MissingField("name"));
    }
    if draft.email.trim().is_empty() {
        errors.push(ValidationError::MissingField("email"));
    } else if !EMAIL_SHAPE.is_match(draft.email.trim()) {
        errors.push(ValidationError::InvalidEmail(draft.email.clone()));
    }
    if draft.phone.trim().is_empty() {
        errors.push(ValidationError::MissingField("phone"));
    }
    if draft.calling_code.trim().is_empty() {
        errors.push(ValidationError::MissingField("calling_code"));
    }
    if draft.country.trim().is_empty() {
        errors.push(ValidationError::MissingField("country"));
    }
    if draft.state.trim().is_empty() {
        errors.push(ValidationError::MissingField("state"));
    }
    if draft.city.trim().is_empty() {
        errors.push(ValidationError::MissingField("city"));
    }
    if trimmed_address_lines(&draft.address_lines).is_empty() {
        errors.push(ValidationError::NoAddressLines);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
