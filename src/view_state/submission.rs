use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::backend::NetworkError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Company,
    Subject,
    Message,
}

impl FormField {
    pub const REQUIRED: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw contents of the contact form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<ContactMessage, ValidationError> {
        let missing_fields: Vec<FormField> = FormField::REQUIRED
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect();
        let email = self.email.trim();
        let malformed_email = !email.is_empty() && !EMAIL_RE.is_match(email);
        if !missing_fields.is_empty() || malformed_email {
            return Err(ValidationError {
                missing_fields,
                malformed_email,
            });
        }

        let company = self.company.trim();
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            company: (!company.is_empty()).then(|| company.to_string()),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

/// A contact form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", describe_invalid(.missing_fields, .malformed_email))]
pub struct ValidationError {
    pub missing_fields: Vec<FormField>,
    pub malformed_email: bool,
}

fn describe_invalid(missing_fields: &[FormField], malformed_email: &bool) -> String {
    let mut parts = Vec::new();
    if !missing_fields.is_empty() {
        let fields = missing_fields
            .iter()
            .map(FormField::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        parts.push(format!("Missing required fields: {fields}"));
    }
    if *malformed_email {
        parts.push("Email address is not valid".to_string());
    }
    parts.join(". ")
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFailure {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Network(#[from] NetworkError),
}

impl SubmissionFailure {
    /// Only network failures are worth retrying unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(SubmissionFailure),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("A message is already being sent")]
    AlreadySubmitting,
    #[error("{0}")]
    Invalid(ValidationError),
}

/// Proof of an accepted submission. Hand it back with the backend's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub(super) generation: u64,
    pub message: ContactMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            company: String::new(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let mut f = form(" A ", "a@b.com", "Hi", "Hello");
        f.set(FormField::Company, "  ".to_string());
        let msg = f.validate().expect("form should be valid");
        assert_eq!(msg.name, "A");
        assert_eq!(msg.company, None);

        f.set(FormField::Company, "Acme".to_string());
        assert_eq!(f.validate().map(|m| m.company), Ok(Some("Acme".to_string())));
    }

    #[test]
    fn test_missing_name() {
        let err = form("", "a@b.com", "Hi", "Hello").validate().unwrap_err();
        assert_eq!(err.missing_fields, vec![FormField::Name]);
        assert!(!err.malformed_email);
        assert_eq!(err.to_string(), "Missing required fields: name");
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let err = form("A", "a@b.com", "   ", "\n").validate().unwrap_err();
        assert_eq!(err.missing_fields, vec![FormField::Subject, FormField::Message]);
    }

    #[test]
    fn test_malformed_email() {
        for email in ["not-an-email", "a@b", "a b@c.com", "@b.com"] {
            let err = form("A", email, "Hi", "Hello").validate().unwrap_err();
            assert!(err.malformed_email, "{email} should be rejected");
            assert!(err.missing_fields.is_empty());
        }
        let err = form("", "nope", "Hi", "Hello").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: name. Email address is not valid"
        );
    }

    #[test]
    fn test_validation_error_as_failure() {
        let err = form("A", "nope", "", "Hello").validate().unwrap_err();
        let source: &dyn std::error::Error = &err;
        assert_eq!(
            source.to_string(),
            "Missing required fields: subject. Email address is not valid"
        );
        let failure = SubmissionFailure::from(err.clone());
        assert_eq!(failure.to_string(), err.to_string());
        assert!(!failure.is_retryable());
    }

    #[test]
    fn test_empty_email_is_missing_not_malformed() {
        let err = form("A", "", "Hi", "Hello").validate().unwrap_err();
        assert_eq!(err.missing_fields, vec![FormField::Email]);
        assert!(!err.malformed_email);
    }

    #[test]
    fn test_failure_retryable() {
        let validation = SubmissionFailure::from(ValidationError {
            missing_fields: vec![FormField::Name],
            malformed_email: false,
        });
        assert!(!validation.is_retryable());
        assert!(SubmissionFailure::from(NetworkError::Simulated).is_retryable());
    }
}
