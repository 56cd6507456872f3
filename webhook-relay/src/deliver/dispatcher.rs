//! Webhook delivery over HTTP.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::envelope::Envelope;

/// Failure to deliver a message to a webhook.
///
/// The display text is returned to the relay's caller as-is.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The webhook answered with something other than 200 or 204
    #[error("failed to send message, status code: {0}")]
    Status(u16),

    /// The request never produced a response (bad URL, DNS, refused, timeout)
    #[error("failed to send message to webhook: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Posts envelopes to webhook URLs using a shared HTTP client.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: Client,
    timeout: Option<Duration>,
}

impl Dispatcher {
    /// Create a dispatcher. `timeout` bounds each delivery when set.
    pub fn new(client: Client, timeout: Option<Duration>) -> Self {
        Self { client, timeout }
    }

    /// Deliver `message` to `url` as a `{"content": ...}` JSON envelope.
    ///
    /// Only 200 and 204 count as success.
    pub async fn deliver(&self, url: &str, message: &str) -> Result<(), DeliveryError> {
        tracing::info!(
            url = url,
            message_length = message.len(),
            "delivery_starting"
        );

        let mut request = self.client.post(url).json(&Envelope::new(message));

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                if e.is_timeout() {
                    tracing::error!(url = url, error = %e, "delivery_timeout");
                } else if e.is_builder() {
                    tracing::error!(url = url, error = %e, "delivery_invalid_url");
                } else {
                    tracing::error!(url = url, error = %e, "delivery_request_error");
                }
                return Err(DeliveryError::Transport(e));
            }
        };

        let status = resp.status();
        let is_success = status == StatusCode::OK || status == StatusCode::NO_CONTENT;

        tracing::info!(
            url = url,
            status_code = status.as_u16(),
            is_success = is_success,
            "delivery_complete"
        );

        if !is_success {
            return Err(DeliveryError::Status(status.as_u16()));
        }

        Ok(())
    }
}
