//! # Contact Form
//!
//! Validation rules for contact submissions and the [`ContactSink`]
//! seam that decides what happens to an accepted one.
//!
//! Validation is ordered and the first failure wins:
//! 1. `name`, `email` and `message` must all be present and non-empty.
//! 2. `email` must look like `local@domain.tld`.

use crate::types::FolioError;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{LazyLock, Mutex};
use thiserror::Error;

/// No whitespace, exactly one `@`, at least one `.` after it.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

// =============================================================================
// REQUEST
// =============================================================================

/// Contact form body as received. Every field is optional on the wire;
/// [`ContactRequest::validate`] decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactRequest {
    /// Build a request with all three fields set.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }

    /// Validate the request and stamp it with `received_at`.
    pub fn validate(self, received_at: DateTime<Utc>) -> Result<ContactSubmission, ContactError> {
        let (Some(name), Some(email), Some(message)) = (
            non_empty(self.name),
            non_empty(self.email),
            non_empty(self.message),
        ) else {
            return Err(ContactError::MissingFields);
        };

        if !is_valid_email(&email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(ContactSubmission {
            name,
            email,
            message,
            received_at,
        })
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

/// Check the `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

// =============================================================================
// SUBMISSION
// =============================================================================

/// An accepted contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Server time at which the submission was accepted.
    pub received_at: DateTime<Utc>,
}

/// Why a contact request was rejected. The `Display` text is the message
/// returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Missing required fields: name, email, message")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,
}

// =============================================================================
// SINKS
// =============================================================================

/// Destination for accepted submissions.
///
/// Nothing is delivered anywhere: implementations log or collect.
pub trait ContactSink: Send + Sync {
    /// Record one accepted submission.
    fn record(&self, submission: &ContactSubmission) -> Result<(), FolioError>;
}

/// Sink that keeps submissions in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    submissions: Mutex<Vec<ContactSubmission>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn submissions(&self) -> Result<Vec<ContactSubmission>, FolioError> {
        self.submissions
            .lock()
            .map(|guard| guard.clone())
            .map_err(|e| FolioError::SinkError(e.to_string()))
    }
}

impl ContactSink for MemorySink {
    fn record(&self, submission: &ContactSubmission) -> Result<(), FolioError> {
        self.submissions
            .lock()
            .map_err(|e| FolioError::SinkError(e.to_string()))?
            .push(submission.clone());
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn at() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default()
    }

    #[test]
    fn valid_request_becomes_submission() {
        let request = ContactRequest::new("Ann", "ann@example.com", "Hello");
        let submission = request.validate(at()).expect("valid");
        assert_eq!(submission.name, "Ann");
        assert_eq!(submission.email, "ann@example.com");
        assert_eq!(submission.message, "Hello");
        assert_eq!(submission.received_at, at());
    }

    #[test]
    fn missing_field_is_rejected() {
        let request = ContactRequest {
            name: Some("Ann".to_string()),
            email: None,
            message: Some("Hello".to_string()),
        };
        assert_eq!(request.validate(at()), Err(ContactError::MissingFields));
    }

    #[test]
    fn empty_field_counts_as_missing() {
        let request = ContactRequest::new("Ann", "ann@example.com", "");
        assert_eq!(request.validate(at()), Err(ContactError::MissingFields));
    }

    #[test]
    fn missing_fields_checked_before_email_shape() {
        let request = ContactRequest {
            name: None,
            email: Some("not-an-email".to_string()),
            message: Some("Hello".to_string()),
        };
        assert_eq!(request.validate(at()), Err(ContactError::MissingFields));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let request = ContactRequest::new("Ann", "not-an-email", "Hello");
        assert_eq!(request.validate(at()), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn email_shape_rules() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn error_messages_are_client_facing() {
        assert_eq!(
            ContactError::MissingFields.to_string(),
            "Missing required fields: name, email, message"
        );
        assert_eq!(ContactError::InvalidEmail.to_string(), "Invalid email format");
    }

    #[test]
    fn memory_sink_keeps_arrival_order() {
        let sink = MemorySink::new();
        for name in ["first", "second"] {
            let submission = ContactRequest::new(name, "x@y.z", "m")
                .validate(at())
                .expect("valid");
            sink.record(&submission).expect("record");
        }
        let names: Vec<_> = sink
            .submissions()
            .expect("submissions")
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    #[allow(clippy::panic)]
    fn poisoned_memory_sink_reports_sink_error() {
        let sink = std::sync::Arc::new(MemorySink::new());
        let holder = std::sync::Arc::clone(&sink);
        let joined = std::thread::spawn(move || {
            let _guard = holder.submissions.lock();
            panic!("poison the lock");
        })
        .join();
        assert!(joined.is_err());

        assert!(matches!(sink.submissions(), Err(FolioError::SinkError(_))));
        let submission = ContactRequest::new("Ann", "x@y.z", "m")
            .validate(at())
            .expect("valid");
        assert!(matches!(
            sink.record(&submission),
            Err(FolioError::SinkError(_))
        ));
    }
}
