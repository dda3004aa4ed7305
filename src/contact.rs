use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use http::StatusCode;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ContactConfig;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required.")]
    Missing(Field),
    #[error("Invalid email address.")]
    InvalidEmail,
    #[error("Invalid request body.")]
    Malformed,
    #[error("Couldn't deliver message: {0}")]
    Delivery(String),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactError::Missing(_) | ContactError::InvalidEmail => StatusCode::BAD_REQUEST,
            ContactError::Malformed | ContactError::Delivery(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show the caller. Parse and delivery details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ContactError::Malformed | ContactError::Delivery(_) => {
                "Internal server error.".to_string()
            }
            e => e.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Inline messages for the form, one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    /// Drop the message for a field the user is editing.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }
}

impl ContactRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Every problem with the form, for inline display.
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            errors.email = Some("Email is required".to_string());
        } else if !is_valid_email(&self.email) {
            errors.email = Some("Enter a valid email".to_string());
        }
        if self.message.trim().is_empty() {
            errors.message = Some("Message is required".to_string());
        }
        errors
    }

    /// The first problem, in field order.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::Missing(field));
            }
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub request: ContactRequest,
    pub received_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(request: ContactRequest) -> Self {
        Self {
            request,
            received_at: Utc::now(),
        }
    }
}

/// Delivery of accepted submissions.
pub trait Mailer {
    fn deliver(&self, submission: &Submission) -> Result<(), ContactError>;
}

/// Writes submissions to the log instead of sending mail.
#[derive(Debug, Clone, Default)]
pub struct LogMailer {
    config: ContactConfig,
}

impl LogMailer {
    pub fn new(config: ContactConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(ContactConfig::from_env())
    }
}

impl Mailer for LogMailer {
    fn deliver(&self, submission: &Submission) -> Result<(), ContactError> {
        let req = &submission.request;
        log::info!(
            "[contact] to={} from={} <{}> at={} message={:?}",
            self.config.recipient,
            req.name,
            req.email,
            submission.received_at.to_rfc3339(),
            req.message,
        );
        Ok(())
    }
}

/// Validate and deliver a submission.
pub fn accept(request: ContactRequest, mailer: &impl Mailer) -> Result<(), ContactError> {
    request.validate()?;
    mailer.deliver(&Submission::new(request))
}

/// JSON body returned by `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactResponse {
    Accepted { ok: bool },
    Rejected { error: String },
}

/// Handle a raw JSON request body, returning the status and response body.
pub fn handle_contact(body: &[u8], mailer: &impl Mailer) -> (StatusCode, ContactResponse) {
    let result = serde_json::from_slice::<ContactRequest>(body)
        .map_err(|e| {
            log::error!("[contact] unreadable request body: {e}");
            ContactError::Malformed
        })
        .and_then(|request| accept(request, mailer));

    match result {
        Ok(()) => (StatusCode::OK, ContactResponse::Accepted { ok: true }),
        Err(e) => {
            if let ContactError::Delivery(detail) = &e {
                log::error!("[contact] delivery failed: {detail}");
            }
            (
                e.status(),
                ContactResponse::Rejected {
                    error: e.public_message(),
                },
            )
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn contact_handler(body: axum::body::Bytes) -> impl axum::response::IntoResponse {
    let mailer = LogMailer::from_env();
    let (status, response) = handle_contact(&body, &mailer);
    (status, axum::Json(response))
}
