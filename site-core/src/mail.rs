//! Request body for the EmailJS REST endpoint, and the deadline a send
//! runs under.

use std::future::Future;

use futures::future::{self, Either};
use futures::pin_mut;
use serde::{Deserialize, Serialize};

use crate::contact::ContactPayload;
use crate::error::MailError;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailSettings {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Upper bound on how long a send may take before it is reported as
    /// failed.
    pub timeout_ms: u32,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_ENDPOINT.to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MailRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactPayload,
}

impl MailSettings {
    pub fn is_configured(&self) -> bool {
        self.missing().is_none()
    }

    fn missing(&self) -> Option<&'static str> {
        [
            ("endpoint", &self.endpoint),
            ("service id", &self.service_id),
            ("template id", &self.template_id),
            ("public key", &self.public_key),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }

    pub fn request<'a>(&'a self, payload: &'a ContactPayload) -> Result<MailRequest<'a>, MailError> {
        if let Some(name) = self.missing() {
            return Err(MailError::NotConfigured(name));
        }
        Ok(MailRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: payload,
        })
    }
}

/// Races `send` against `deadline`. When the deadline wins, `on_timeout`
/// runs before the unfinished send is dropped, so the caller can abort the
/// request still in flight. A send that is ready at the deadline wins.
pub async fn race_deadline<T, S, D, C>(send: S, deadline: D, on_timeout: C) -> Option<T>
where
    S: Future<Output = T>,
    D: Future<Output = ()>,
    C: FnOnce(),
{
    pin_mut!(send);
    pin_mut!(deadline);
    match future::select(send, deadline).await {
        Either::Left((value, _)) => Some(value),
        Either::Right(((), _)) => {
            on_timeout();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;
    use futures::future::{pending, ready};

    use super::*;
    use pretty_assertions::assert_eq;

    fn payload() -> ContactPayload {
        ContactPayload {
            from_name: "Ana".into(),
            from_email: "ana@x.com".into(),
            message: "Hi".into(),
        }
    }

    fn configured() -> MailSettings {
        MailSettings {
            service_id: "service_n9".into(),
            template_id: "template_contact".into(),
            public_key: "pk_123".into(),
            ..MailSettings::default()
        }
    }

    #[test]
    fn request_body_shape() {
        let settings = configured();
        let payload = payload();
        let request = settings.request(&payload).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "service_id": "service_n9",
                "template_id": "template_contact",
                "user_id": "pk_123",
                "template_params": {
                    "from_name": "Ana",
                    "from_email": "ana@x.com",
                    "message": "Hi",
                },
            })
        );
    }

    #[test]
    fn unconfigured_settings_refuse_to_build_request() {
        let payload = payload();
        let settings = MailSettings::default();
        assert!(!settings.is_configured());
        assert_eq!(
            settings.request(&payload).unwrap_err(),
            MailError::NotConfigured("service id")
        );

        let settings = MailSettings {
            public_key: " ".into(),
            ..configured()
        };
        assert_eq!(
            settings.request(&payload).unwrap_err(),
            MailError::NotConfigured("public key")
        );
    }

    #[test]
    fn deadline_aborts_unfinished_send() {
        let aborted = Cell::new(false);
        let outcome = block_on(race_deadline(pending::<u16>(), ready(()), || {
            aborted.set(true)
        }));
        assert_eq!(outcome, None);
        assert!(aborted.get());
    }

    #[test]
    fn finished_send_is_left_alone() {
        let aborted = Cell::new(false);
        let outcome = block_on(race_deadline(ready(200_u16), pending(), || aborted.set(true)));
        assert_eq!(outcome, Some(200));
        assert!(!aborted.get());

        let outcome = block_on(race_deadline(ready(200_u16), ready(()), || aborted.set(true)));
        assert_eq!(outcome, Some(200));
        assert!(!aborted.get());
    }
}
