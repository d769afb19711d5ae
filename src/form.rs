// SPDX-License-Identifier: MIT

//! Contact form state and client-side validation.
//!
//! Validation is a pure function from the three fields to a map of
//! per-field messages; the rules run independently rather than
//! short-circuiting, so a visitor sees every problem at once. There is
//! no submission transport — a valid submit flips the display into its
//! submitted state and nothing leaves the process.

use crate::i18n::Validation;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Same shape the original site accepted: something before the `@`,
/// something after it, and a dot somewhere in the domain part.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"))
}

/// The three form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Mutable contact form contents plus derived display state.
///
/// Mutated on every keystroke; reset only by restarting the process
/// (the original resets on page reload). Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub errors: BTreeMap<ContactField, String>,
    pub submitted: bool,
}

impl ContactForm {
    pub fn new() -> ContactForm {
        ContactForm::default()
    }

    /// Evaluate all three rules against the current contents.
    pub fn validate(&self, messages: &Validation) -> BTreeMap<ContactField, String> {
        let mut errors = BTreeMap::new();
        if self.name.trim().is_empty() {
            errors.insert(ContactField::Name, messages.name_required.clone());
        }
        if self.email.trim().is_empty() {
            errors.insert(ContactField::Email, messages.email_required.clone());
        } else if !email_regex().is_match(&self.email) {
            errors.insert(ContactField::Email, messages.email_invalid.clone());
        }
        if self.message.trim().is_empty() {
            errors.insert(ContactField::Message, messages.message_required.clone());
        }
        errors
    }

    /// Attempt submission. Stores the error map for inline display and
    /// returns whether the form transitioned to its submitted state.
    pub fn submit(&mut self, messages: &Validation) -> bool {
        let errors = self.validate(messages);
        if errors.is_empty() {
            self.errors.clear();
            self.submitted = true;
            true
        } else {
            self.errors = errors;
            false
        }
    }

    pub fn error(&self, field: ContactField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages() -> Validation {
        Validation {
            name_required: "name required".into(),
            email_required: "email required".into(),
            email_invalid: "email invalid".into(),
            message_required: "message required".into(),
        }
    }

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn all_empty_yields_all_three_errors() {
        let errors = form("", "", "").validate(&messages());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[&ContactField::Name], "name required");
        assert_eq!(errors[&ContactField::Email], "email required");
        assert_eq!(errors[&ContactField::Message], "message required");
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let errors = form("  ", "\t", " \n").validate(&messages());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[&ContactField::Email], "email required");
    }

    #[test]
    fn bad_email_is_the_only_error_when_others_filled() {
        let errors = form("A", "bad", "hi").validate(&messages());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&ContactField::Email], "email invalid");
    }

    #[test]
    fn email_shapes() {
        let m = messages();
        for bad in ["a@b", "a b@c.d", "a@b@c.d", "@b.co", "a@.co"] {
            assert!(
                form("A", bad, "hi").validate(&m).contains_key(&ContactField::Email),
                "{bad} should be rejected"
            );
        }
        for good in ["a@b.co", "first.last@sub.domain.example", "x@y.z"] {
            assert!(
                form("A", good, "hi").validate(&m).is_empty(),
                "{good} should be accepted"
            );
        }
    }

    #[test]
    fn valid_submit_transitions_and_clears_errors() {
        let m = messages();
        let mut f = form("A", "bad", "hi");
        assert!(!f.submit(&m));
        assert!(!f.submitted);
        assert_eq!(f.error(ContactField::Email), Some("email invalid"));

        f.email = "a@b.co".into();
        assert!(f.submit(&m));
        assert!(f.submitted);
        assert!(f.errors.is_empty());
    }
}
