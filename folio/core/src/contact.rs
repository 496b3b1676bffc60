//! Contact Form
//!
//! Field editing with per-field length limits, client-side validation and
//! the submission status lifecycle. Sending is done elsewhere (see
//! [`crate::source::PortfolioSource::submit_contact`]); this module only
//! builds the payload and records the outcome.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long a sent/failed banner stays up before the form goes idle again
pub const STATUS_RESET_AFTER: Duration = Duration::from_secs(5);

/// Company value sent when the field was left empty
pub const COMPANY_PLACEHOLDER: &str = "Not specified";

/// Form fields, in tab order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Field {
    #[default]
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Company, Field::Message];

    /// Maximum length in characters
    pub fn max_len(self) -> usize {
        match self {
            Self::Message => 5000,
            _ => 100,
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Company)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Company => "Company",
            Self::Message => "Message",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "your@email.com",
            Self::Company => "Your company",
            Self::Message => "Tell me about your project or opportunity...",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Company,
            Self::Company => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Company => Self::Email,
            Self::Message => Self::Company,
        }
    }
}

/// Why a submission did not go out (or did not arrive)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all required fields.")]
    MissingFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Failed to send message.")]
    Rejected,

    #[error("A message is already being sent.")]
    AlreadySending,

    #[error("{0}")]
    Transport(String),
}

/// Submission lifecycle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(ContactError),
}

impl SubmissionStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn error(&self) -> Option<&ContactError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// JSON body posted to the form relay
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

/// `local@domain.tld` with no whitespace and a single `@`
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Compiled once. A pattern that fails to compile is logged and every
/// address is then treated as invalid.
fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::error!(error = %e, "Email pattern failed to compile");
                None
            }
        })
        .as_ref()
}

/// Whether `email` looks like `local@domain.tld`
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_some_and(|re| re.is_match(email))
}

/// The contact form state
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    company: String,
    message: String,
    focus: Field,
    status: SubmissionStatus,
    reset_at: Option<Instant>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Message => &mut self.message,
        }
    }

    /// Replace a field's value, truncated to its limit
    pub fn set(&mut self, field: Field, value: &str) {
        let truncated: String = value.chars().take(field.max_len()).collect();
        *self.value_mut(field) = truncated;
    }

    /// Type a character into the focused field; ignored at the limit
    pub fn push(&mut self, ch: char) -> bool {
        let field = self.focus;
        let value = self.value_mut(field);
        if value.chars().count() >= field.max_len() {
            return false;
        }
        value.push(ch);
        true
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        let field = self.focus;
        self.value_mut(field).pop();
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn set_focus(&mut self, field: Field) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Client-side checks, in the order the user sees them
    pub fn validate(&self) -> Result<(), ContactError> {
        let missing = Field::ALL
            .iter()
            .filter(|f| f.is_required())
            .any(|f| self.value(*f).trim().is_empty());
        if missing {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Build the outgoing payload from the current values
    pub fn payload(&self) -> ContactPayload {
        let company = if self.company.is_empty() {
            COMPANY_PLACEHOLDER.to_string()
        } else {
            self.company.clone()
        };
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            company,
            message: self.message.clone(),
            subject: format!("Portfolio Contact: {}", self.name),
        }
    }

    /// Start a submission
    ///
    /// Returns the payload to send and moves to `Sending`, or records the
    /// validation failure and returns it. A submission already in flight is
    /// not restarted.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, ContactError> {
        if self.status.is_sending() {
            return Err(ContactError::AlreadySending);
        }
        self.reset_at = None;
        if let Err(e) = self.validate() {
            tracing::debug!(error = %e, "Contact form rejected locally");
            self.status = SubmissionStatus::Failed(e.clone());
            return Err(e);
        }
        self.status = SubmissionStatus::Sending;
        Ok(self.payload())
    }

    /// Record the outcome of a send started with [`begin_submit`](Self::begin_submit)
    ///
    /// Success clears every field. Either way the banner reverts to `Idle`
    /// [`STATUS_RESET_AFTER`] after `now`.
    pub fn finish(&mut self, result: Result<(), ContactError>, now: Instant) {
        match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.company.clear();
                self.message.clear();
                self.focus = Field::Name;
                self.status = SubmissionStatus::Sent;
            }
            Err(e) => {
                self.status = SubmissionStatus::Failed(e);
            }
        }
        self.reset_at = Some(now + STATUS_RESET_AFTER);
    }

    /// Drop a finished banner once its time is up; true if the status changed
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.reset_at {
            Some(at) if now >= at => {
                self.reset_at = None;
                self.status = SubmissionStatus::Idle;
                true
            }
            _ => false,
        }
    }
}
