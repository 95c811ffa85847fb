//! Contact form validation and simulated delivery
//!
//! Nothing leaves the process: delivery is one simulated round-trip. The
//! `deliver` seam is where a real mail integration would go.

use lumina_common::events::LuminaEvent;
use lumina_common::{ContactSubject, Error, Result};
use std::time::Duration;
use tracing::info;

use crate::AppState;

/// Simulated delivery round-trip latency
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// A validated contact submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: ContactSubject,
    pub message: String,
}

/// Validate raw contact form fields
///
/// All fields must be non-empty after trimming; the email must look like an
/// address; the subject must be one of the five fixed options.
pub fn validate_submission(
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> Result<ContactSubmission> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidInput("Name must not be empty".to_string()));
    }

    let email = email.trim();
    if email.is_empty() {
        return Err(Error::InvalidInput("Email must not be empty".to_string()));
    }
    if !email.contains('@') {
        return Err(Error::InvalidInput(format!(
            "Email does not look like an address: {}",
            email
        )));
    }

    let subject: ContactSubject = subject.parse()?;

    let message = message.trim();
    if message.is_empty() {
        return Err(Error::InvalidInput("Message must not be empty".to_string()));
    }

    Ok(ContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        subject,
        message: message.to_string(),
    })
}

/// Deliver a validated submission (simulated)
pub async fn deliver(state: &AppState, submission: ContactSubmission) {
    tokio::time::sleep(SUBMIT_DELAY).await;

    info!(
        subject = %submission.subject,
        from = %submission.email,
        "Contact submission accepted"
    );

    state.event_bus.emit_lossy(LuminaEvent::ContactSubmitted {
        subject: submission.subject,
        timestamp: chrono::Utc::now(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_submission_passes_with_trimmed_fields() {
        let submission = validate_submission(
            "  Jane Doe ",
            " jane@example.com",
            "Print Purchase",
            " I'd like the forest print. ",
        )
        .unwrap();
        assert_eq!(submission.name, "Jane Doe");
        assert_eq!(submission.email, "jane@example.com");
        assert_eq!(submission.subject, ContactSubject::PrintPurchase);
        assert_eq!(submission.message, "I'd like the forest print.");
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert!(validate_submission("", "a@b", "Other", "hi").is_err());
        assert!(validate_submission("Jane", "", "Other", "hi").is_err());
        assert!(validate_submission("Jane", "a@b", "Other", "").is_err());
        assert!(validate_submission("Jane", "a@b", "Other", "   ").is_err());
    }

    #[test]
    fn mail_address_must_contain_at_sign() {
        assert!(validate_submission("Jane", "not-an-email", "Other", "hi").is_err());
    }

    #[test]
    fn subject_outside_fixed_options_is_rejected() {
        let result = validate_submission("Jane", "a@b", "General Question", "hi");
        assert!(result.is_err());
    }
}
