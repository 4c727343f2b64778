//! Contact modal — open/close state and the page scroll lock that goes with it.

use serde::Deserialize;

use crate::contact::form::{ContactError, ContactForm, ContactSubmission};

/// Value for the page body's `overflow` style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyOverflow {
    Hidden,
    Auto,
}

impl BodyOverflow {
    pub fn as_css(self) -> &'static str {
        match self {
            BodyOverflow::Hidden => "hidden",
            BodyOverflow::Auto => "auto",
        }
    }
}

/// What a click landed on while the modal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickTarget {
    /// The dimmed backdrop outside the dialog.
    Backdrop,
    Dialog,
}

#[derive(Debug, Default)]
pub struct ContactModal {
    open: bool,
    pub form: ContactForm,
}

impl ContactModal {
    /// Modal already showing the given form, as it is when the user presses send.
    pub fn showing(form: ContactForm) -> Self {
        Self { open: true, form }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn body_overflow(&self) -> BodyOverflow {
        if self.open {
            BodyOverflow::Hidden
        } else {
            BodyOverflow::Auto
        }
    }

    pub fn open(&mut self) -> BodyOverflow {
        self.open = true;
        self.body_overflow()
    }

    pub fn close(&mut self) -> BodyOverflow {
        self.open = false;
        self.body_overflow()
    }

    /// Clicking the backdrop closes the modal; clicks inside the dialog are ignored.
    pub fn handle_click(&mut self, target: ClickTarget) -> BodyOverflow {
        if target == ClickTarget::Backdrop {
            self.close();
        }
        self.body_overflow()
    }

    /// On success the form is reset and the modal closed. On failure both stay as they are.
    pub fn submit(&mut self, recipient: &str) -> Result<ContactSubmission, ContactError> {
        let submission = self.form.submit(recipient)?;
        self.form.reset();
        self.close();
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_modal() -> ContactModal {
        let mut modal = ContactModal::default();
        modal.open();
        modal.form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };
        modal
    }

    #[test]
    fn test_open_locks_scroll() {
        let mut modal = ContactModal::default();
        assert_eq!(modal.body_overflow(), BodyOverflow::Auto);
        assert_eq!(modal.open().as_css(), "hidden");
        assert!(modal.is_open());
        assert_eq!(modal.close().as_css(), "auto");
    }

    #[test]
    fn test_backdrop_click_closes() {
        let mut modal = ContactModal::default();
        modal.open();
        assert_eq!(modal.handle_click(ClickTarget::Dialog), BodyOverflow::Hidden);
        assert!(modal.is_open());
        assert_eq!(modal.handle_click(ClickTarget::Backdrop), BodyOverflow::Auto);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_successful_submit_resets_and_closes() {
        let mut modal = filled_modal();
        let submission = modal.submit("owner@example.com").unwrap();
        assert!(submission.mailto.starts_with("mailto:owner@example.com"));
        assert!(!modal.is_open());
        assert_eq!(modal.form, ContactForm::default());
    }

    #[test]
    fn test_failed_submit_keeps_modal_and_input() {
        let mut modal = filled_modal();
        modal.form.email = "not-an-email".to_string();
        assert!(modal.submit("owner@example.com").is_err());
        assert!(modal.is_open());
        assert_eq!(modal.form.name, "Ada");
    }
}
