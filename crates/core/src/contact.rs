//! Contact form payload and submission state machine.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──2xx──────────────▶ Success
//!                      │
//!                      └──no backend / error / non-2xx──▶ Failure
//! ```
//!
//! A successful submission clears the form; a failed one keeps what the
//! visitor typed so they can retry.

use serde::{Deserialize, Serialize};

use crate::types::{Email, EmailError};

/// Shown after the backend accepts a message.
pub const SUCCESS_MESSAGE: &str = "Terima kasih! Pesanmu sudah kami terima.";

/// Shown whenever a message cannot be delivered ("cannot send right now,
/// try again later").
pub const FAILURE_MESSAGE: &str = "Tidak dapat mengirim saat ini. Coba lagi nanti.";

/// Shown when a required field is blank or the email is malformed.
pub const INVALID_MESSAGE: &str = "Nama, email yang valid, dan pesan wajib diisi.";

/// The three fields of the contact form, sent as JSON to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Why a payload was rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("name is required")]
    MissingName,
    #[error("message is required")]
    MissingMessage,
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

impl ContactPayload {
    /// Check the fields a browser would require before submitting.
    ///
    /// # Errors
    ///
    /// Returns `ContactError` if the name or message is blank, or the email
    /// is not structurally valid.
    pub fn validate(&self) -> Result<Email, ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(Email::parse(&self.email)?)
    }
}

/// Where a contact submission currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
    Invalid,
}

impl ContactStatus {
    /// Enter `Submitting` from any settled state. A submission already in
    /// flight stays in flight.
    #[must_use]
    pub const fn submit(self) -> Self {
        match self {
            Self::Submitting => self,
            Self::Idle | Self::Success | Self::Failure | Self::Invalid => Self::Submitting,
        }
    }

    /// Resolve an in-flight submission.
    #[must_use]
    pub const fn resolve(self, delivered: bool) -> Self {
        match (self, delivered) {
            (Self::Submitting, true) => Self::Success,
            (Self::Submitting, false) => Self::Failure,
            (other, _) => other,
        }
    }

    /// The user-facing status line, if any.
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Idle | Self::Submitting => None,
            Self::Success => Some(SUCCESS_MESSAGE),
            Self::Failure => Some(FAILURE_MESSAGE),
            Self::Invalid => Some(INVALID_MESSAGE),
        }
    }

    /// Whether the form should be re-rendered empty.
    #[must_use]
    pub const fn clears_form(self) -> bool {
        matches!(self, Self::Success)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Alya".to_string(),
            email: "alya@example.com".to_string(),
            message: "Ready for a collab?".to_string(),
        }
    }

    #[test]
    fn test_serializes_three_fields() {
        let json = serde_json::to_value(payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Alya",
                "email": "alya@example.com",
                "message": "Ready for a collab?"
            })
        );
    }

    #[test]
    fn test_validate() {
        assert!(payload().validate().is_ok());

        let blank_name = ContactPayload {
            name: "  ".to_string(),
            ..payload()
        };
        assert_eq!(blank_name.validate(), Err(ContactError::MissingName));

        let blank_message = ContactPayload {
            message: String::new(),
            ..payload()
        };
        assert_eq!(blank_message.validate(), Err(ContactError::MissingMessage));

        let bad_email = ContactPayload {
            email: "alya".to_string(),
            ..payload()
        };
        assert!(matches!(bad_email.validate(), Err(ContactError::InvalidEmail(_))));
    }

    #[test]
    fn test_transitions() {
        let submitting = ContactStatus::Idle.submit();
        assert_eq!(submitting, ContactStatus::Submitting);
        assert_eq!(submitting.resolve(true), ContactStatus::Success);
        assert_eq!(submitting.resolve(false), ContactStatus::Failure);

        // Resolving outside a submission changes nothing.
        assert_eq!(ContactStatus::Idle.resolve(true), ContactStatus::Idle);

        // Terminal states can be resubmitted.
        assert_eq!(ContactStatus::Failure.submit(), ContactStatus::Submitting);
        assert_eq!(ContactStatus::Invalid.submit(), ContactStatus::Submitting);
        assert_eq!(submitting.submit(), ContactStatus::Submitting);
    }

    #[test]
    fn test_messages_and_clearing() {
        assert_eq!(ContactStatus::Idle.message(), None);
        assert_eq!(ContactStatus::Success.message(), Some(SUCCESS_MESSAGE));
        assert_eq!(ContactStatus::Failure.message(), Some(FAILURE_MESSAGE));
        assert!(ContactStatus::Success.clears_form());
        assert!(!ContactStatus::Failure.clears_form());
        assert!(!ContactStatus::Invalid.clears_form());
    }
}
