//! Relay endpoint handler.
//!
//! Each request is handled on its own: the mapping file is reloaded, at most
//! one delivery is made, and nothing is kept once the response is written.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::deliver::Dispatcher;
use crate::json::{decode_first, null_as_empty};
use crate::mapping::load_webhook_map;
use crate::web::error::RelayError;
use crate::Config;

/// Body returned after a successful delivery.
pub const SUCCESS_BODY: &str = "Message sent successfully";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(config: Config, dispatcher: Dispatcher) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher,
        }
    }
}

/// Inbound relay request.
///
/// Absent or `null` fields decode as empty strings; other non-string values
/// are rejected.
#[derive(Debug, Default, Deserialize)]
pub struct RelayRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

/// `/dl` endpoint, dispatched on method.
pub async fn relay(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    let result = match method {
        Method::POST => send_message(&state, &body).await,
        Method::GET => list_webhooks(&state).await,
        _ => {
            warn!(method = %method, "relay_method_not_allowed");
            Err(RelayError::MethodNotAllowed)
        }
    };

    match result {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

async fn send_message(state: &AppState, body: &[u8]) -> Result<Response, RelayError> {
    // Only the first JSON value counts; trailing bytes are ignored
    let request: RelayRequest = decode_first(body).map_err(|e| {
        warn!(error = %e, body_length = body.len(), "relay_invalid_body");
        RelayError::InvalidBody
    })?;

    info!(
        code = %request.code,
        message_length = request.message.len(),
        "relay_request_received"
    );

    let map = load_webhook_map(&state.config.webhook_map_path)
        .await
        .map_err(|e| {
            error!(error = %e, "webhook_map_load_failed");
            RelayError::MapUnavailable(e)
        })?;

    let entry = map.get(&request.code).ok_or_else(|| {
        warn!(code = %request.code, "relay_unknown_code");
        RelayError::InvalidCode
    })?;

    if let Err(e) = state
        .dispatcher
        .deliver(&entry.webhooks_url, &request.message)
        .await
    {
        warn!(code = %request.code, error = %e, "relay_delivery_failed");
        return Err(e.into());
    }

    info!(code = %request.code, "relay_message_sent");

    Ok((StatusCode::OK, SUCCESS_BODY).into_response())
}

async fn list_webhooks(state: &AppState) -> Result<Response, RelayError> {
    let map = load_webhook_map(&state.config.webhook_map_path)
        .await
        .map_err(|e| {
            error!(error = %e, "webhook_map_load_failed");
            RelayError::MapUnavailable(e)
        })?;

    let body = serde_json::to_vec(&map).map_err(|e| {
        error!(error = %e, "webhook_map_encode_failed");
        RelayError::Encode(e)
    })?;

    info!(entries = map.len(), "webhook_map_listed");

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_request_deserialization() {
        let request: RelayRequest =
            serde_json::from_str(r#"{"code": "team-a", "message": "hello"}"#).unwrap();
        assert_eq!(request.code, "team-a");
        assert_eq!(request.message, "hello");
    }

    #[test]
    fn test_relay_request_missing_fields_default() {
        let request: RelayRequest = serde_json::from_str(r#"{"code": "team-a"}"#).unwrap();
        assert_eq!(request.code, "team-a");
        assert_eq!(request.message, "");

        let request: RelayRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.code, "");
    }

    #[test]
    fn test_relay_request_null_fields_are_empty() {
        let request: RelayRequest =
            decode_first(br#"{"code": "team-a", "message": null}"#).unwrap();
        assert_eq!(request.code, "team-a");
        assert_eq!(request.message, "");
    }

    #[test]
    fn test_relay_request_ignores_trailing_data() {
        let request: RelayRequest =
            decode_first(br#"{"code": "team-a", "message": "hi"} trailing"#).unwrap();
        assert_eq!(request.code, "team-a");
        assert_eq!(request.message, "hi");
    }

    #[test]
    fn test_relay_request_rejects_wrong_types() {
        assert!(decode_first::<RelayRequest>(br#"{"code": 123}"#).is_err());
        assert!(decode_first::<RelayRequest>(br#"{"code": "a", "message": true}"#).is_err());
        assert!(decode_first::<RelayRequest>(br#"{"code": "#).is_err());
        assert!(decode_first::<RelayRequest>(b"").is_err());
    }
}
