//! Contact form — validation and the mailto handoff.
//!
//! There is no mail backend: a valid form becomes a `mailto:` link the visitor's own
//! email client opens.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUBMIT_NOTICE: &str =
    "Your default email client will open. Please send the message from there.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("field '{0}' is required")]
    MissingField(&'static str),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub mailto: String,
    pub notice: &'static str,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::InvalidEmail(email.to_string())),
        }
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// Validates and builds the `mailto:` link addressed to `recipient`.
    pub fn submit(&self, recipient: &str) -> Result<ContactSubmission, ContactError> {
        self.validate()?;
        Ok(ContactSubmission {
            mailto: format!(
                "mailto:{recipient}?subject={}&body={}",
                urlencoding::encode(&self.subject),
                urlencoding::encode(&self.body())
            ),
            notice: SUBMIT_NOTICE,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello there".to_string(),
            message: "Let's talk & build.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(make_form().validate(), Ok(()));
    }

    #[test]
    fn test_blank_field_is_reported_by_name() {
        let mut form = make_form();
        form.subject = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactError::MissingField("subject")));
    }

    #[test]
    fn test_email_needs_both_sides_of_at() {
        let mut form = make_form();
        for bad in ["ada", "@example.com", "ada@"] {
            form.email = bad.to_string();
            assert!(
                matches!(form.validate(), Err(ContactError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_body_layout() {
        assert_eq!(
            make_form().body(),
            "Name: Ada Lovelace\nEmail: ada@example.com\n\nMessage:\nLet's talk & build."
        );
    }

    #[test]
    fn test_mailto_is_percent_encoded() {
        let submission = make_form().submit("owner@example.com").unwrap();
        assert!(submission
            .mailto
            .starts_with("mailto:owner@example.com?subject=Hello%20there&body="));
        assert!(submission.mailto.contains("Name%3A%20Ada%20Lovelace%0AEmail%3A%20ada%40example.com"));
        assert!(submission.mailto.contains("%26%20build."));
        assert!(!submission.mailto.contains('\n'));
        assert_eq!(submission.notice, SUBMIT_NOTICE);
    }

    #[test]
    fn test_invalid_form_produces_no_link() {
        let mut form = make_form();
        form.name.clear();
        assert!(form.submit("owner@example.com").is_err());
    }

    #[test]
    fn test_reset_clears_every_field() {
        let mut form = make_form();
        form.reset();
        assert_eq!(form, ContactForm::default());
    }
}
