//! Mapping of relay failures to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::deliver::DeliveryError;
use crate::mapping::MapError;

/// Everything that can end a relay request without success.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid request body")]
    InvalidBody,

    #[error("Failed to load webhook map")]
    MapUnavailable(#[source] MapError),

    #[error("Invalid code")]
    InvalidCode,

    /// Delivery failures are passed through to the caller verbatim.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("Failed to encode webhook map")]
    Encode(#[source] serde_json::Error),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidBody | RelayError::InvalidCode => StatusCode::BAD_REQUEST,
            RelayError::MapUnavailable(_) | RelayError::Delivery(_) | RelayError::Encode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
