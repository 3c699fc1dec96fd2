use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use site_core::contact::ContactPayload;
use site_core::mail::{race_deadline, MailSettings};
use site_core::MailError;
use web_sys::AbortController;

/// Posts one contact message to the mail service. Once `settings.timeout_ms`
/// has passed the request is aborted and [`MailError::Timeout`] returned.
pub async fn deliver(settings: &MailSettings, payload: &ContactPayload) -> Result<(), MailError> {
    let body = settings.request(payload)?;
    let controller =
        AbortController::new().map_err(|e| MailError::Network(format!("{:?}", e)))?;
    let request = Request::post(&settings.endpoint)
        .abort_signal(Some(&controller.signal()))
        .json(&body)
        .map_err(|e| MailError::Network(e.to_string()))?;

    debug!("Sending contact message to {}", settings.endpoint);
    let send = async move {
        let response = request
            .send()
            .await
            .map_err(|e| MailError::Network(e.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(MailError::Rejected { status, body })
        }
    };
    let deadline = TimeoutFuture::new(settings.timeout_ms);

    match race_deadline(send, deadline, || controller.abort()).await {
        Some(result) => {
            if result.is_ok() {
                info!("Contact message delivered");
            }
            result
        }
        None => {
            warn!("Contact message aborted after {} ms", settings.timeout_ms);
            Err(MailError::Timeout {
                after_ms: settings.timeout_ms,
            })
        }
    }
}
