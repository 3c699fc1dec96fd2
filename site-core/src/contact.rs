//! Contact form state: fields, validation and the submission lifecycle
//! `Idle -> Sending -> Success | Error -> Idle`.

use std::fmt;

use serde::Serialize;

use crate::error::{ContactError, MailError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "Full name",
            Field::Email => "Email address",
            Field::Message => "Message",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error(String),
}

/// What gets handed to the mail service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    /// Edits a field. A finished submission's banner goes away once the
    /// visitor starts typing again.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
        self.dismiss();
    }

    pub fn dismiss(&mut self) {
        if matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Error(_)
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }

    pub fn validate(&self) -> Result<ContactPayload, ValidationError> {
        let name = required(Field::Name, &self.name)?;
        let email = required(Field::Email, &self.email)?;
        let message = required(Field::Message, &self.message)?;
        if !looks_like_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(ContactPayload {
            from_name: name.to_string(),
            from_email: email.to_string(),
            message: message.to_string(),
        })
    }

    /// Validates and moves to `Sending`. While a submission is in flight
    /// every further attempt is refused.
    pub fn begin_submission(&mut self) -> Result<ContactPayload, ContactError> {
        if self.is_sending() {
            return Err(ContactError::AlreadySending);
        }
        let payload = self.validate()?;
        self.status = SubmissionStatus::Sending;
        Ok(payload)
    }

    /// Applies the mail service's answer. Ignored unless a submission is
    /// in flight.
    pub fn finish_submission(&mut self, outcome: Result<(), MailError>) {
        if !self.is_sending() {
            log::warn!("dropping submission outcome, form is not sending");
            return;
        }
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = SubmissionStatus::Success;
            }
            Err(err) => {
                log::warn!("contact submission failed: {}", err);
                self.status = SubmissionStatus::Error(err.user_message().to_string());
            }
        }
    }
}

fn required(field: Field, value: &str) -> Result<&str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(trimmed)
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ana");
        form.set(Field::Email, "ana@x.com");
        form.set(Field::Message, "Hi");
        form
    }

    #[test]
    fn successful_send_clears_fields() {
        let mut form = filled();
        let payload = form.begin_submission().unwrap();
        assert_eq!(
            payload,
            ContactPayload {
                from_name: "Ana".into(),
                from_email: "ana@x.com".into(),
                message: "Hi".into(),
            }
        );
        assert_eq!(form.status(), &SubmissionStatus::Sending);

        form.finish_submission(Ok(()));
        assert_eq!(form.status(), &SubmissionStatus::Success);
        for field in [Field::Name, Field::Email, Field::Message] {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn failed_send_keeps_fields() {
        let mut form = filled();
        form.begin_submission().unwrap();
        form.finish_submission(Err(MailError::Network("offline".into())));

        assert!(matches!(form.status(), SubmissionStatus::Error(_)));
        assert_eq!(form.value(Field::Name), "Ana");
        assert_eq!(form.value(Field::Email), "ana@x.com");
        assert_eq!(form.value(Field::Message), "Hi");
    }

    #[test]
    fn second_submit_while_sending_is_refused() {
        let mut form = filled();
        form.begin_submission().unwrap();
        assert_eq!(
            form.begin_submission().unwrap_err(),
            ContactError::AlreadySending
        );
    }

    #[test]
    fn back_to_back_submits_hand_out_one_payload() {
        let mut form = filled();
        let payloads: Vec<ContactPayload> = (0..3)
            .filter_map(|_| form.begin_submission().ok())
            .collect();
        assert_eq!(payloads.len(), 1);

        form.finish_submission(Ok(()));
        form.finish_submission(Err(MailError::Network("duplicate".into())));
        assert_eq!(form.status(), &SubmissionStatus::Success);
    }

    #[test]
    fn can_retry_after_failure() {
        let mut form = filled();
        form.begin_submission().unwrap();
        form.finish_submission(Err(MailError::Timeout { after_ms: 10_000 }));
        assert!(form.begin_submission().is_ok());
    }

    #[test]
    fn missing_fields_block_submission() {
        let mut form = ContactForm::new();
        form.set(Field::Name, "   ");
        assert_eq!(
            form.begin_submission().unwrap_err(),
            ContactError::Invalid(ValidationError::Missing(Field::Name))
        );
        assert_eq!(form.status(), &SubmissionStatus::Idle);

        form.set(Field::Name, "Ana");
        form.set(Field::Email, "ana@x.com");
        assert_eq!(
            form.validate().unwrap_err(),
            ValidationError::Missing(Field::Message)
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled();
        for bad in ["ana", "@x.com", "ana@", "a b@x.com", "a@b@c"] {
            form.set(Field::Email, bad);
            assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidEmail);
        }
    }

    #[test]
    fn payload_is_trimmed() {
        let mut form = filled();
        form.set(Field::Name, "  Ana  ");
        assert_eq!(form.validate().unwrap().from_name, "Ana");
    }

    #[test]
    fn late_outcome_is_ignored() {
        let mut form = filled();
        form.finish_submission(Ok(()));
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.value(Field::Name), "Ana");
    }

    #[test]
    fn typing_dismisses_result_banner() {
        let mut form = filled();
        form.begin_submission().unwrap();
        form.finish_submission(Ok(()));
        form.set(Field::Name, "B");
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn editing_while_sending_keeps_sending() {
        let mut form = filled();
        form.begin_submission().unwrap();
        form.set(Field::Message, "Hi again");
        assert!(form.is_sending());
    }

    #[test]
    fn payload_serialises_with_template_names() {
        let payload = filled().validate().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "from_name": "Ana",
                "from_email": "ana@x.com",
                "message": "Hi",
            })
        );
    }
}
