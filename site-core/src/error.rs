use thiserror::Error;

use crate::contact::Field;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("section tracker needs at least one section")]
    NoSections,
    #[error("section `{0}` is listed more than once")]
    DuplicateSection(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel has no slides")]
    Empty,
    #[error("carousel interval must be greater than zero")]
    ZeroInterval,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountUpError {
    #[error("count-up step must be greater than zero")]
    ZeroStep,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a message is already being sent")]
    AlreadySending,
}

/// Outcome of a failed hand-off to the mail delivery service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailError {
    #[error("mail delivery is not configured (missing {0})")]
    NotConfigured(&'static str),
    #[error("network error: {0}")]
    Network(String),
    #[error("mail service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("mail service did not answer within {after_ms} ms")]
    Timeout { after_ms: u32 },
}

impl MailError {
    /// Text shown next to the contact form.
    pub fn user_message(&self) -> &'static str {
        match self {
            MailError::NotConfigured(_) => {
                "Our contact form is temporarily unavailable. Please email us directly."
            }
            MailError::Network(_) => {
                "We couldn't reach our mail service. Check your connection and try again."
            }
            MailError::Rejected { .. } => "Your message could not be sent. Please try again.",
            MailError::Timeout { .. } => {
                "Sending is taking too long. Please try again in a moment."
            }
        }
    }
}
