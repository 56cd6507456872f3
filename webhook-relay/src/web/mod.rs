//! Web server module exposing the relay endpoint.
//!
//! A single route, `/dl`, branches on method:
//! - `POST` relays `{code, message}` to the webhook registered for `code`
//! - `GET` dumps the whole mapping file as JSON
//! - anything else is rejected with 405

pub mod error;
pub mod handlers;

use axum::{extract::DefaultBodyLimit, routing::any, Router};
use tower_http::trace::TraceLayer;

pub use error::RelayError;
pub use handlers::{relay, AppState, RelayRequest};

/// Path of the relay endpoint.
pub const RELAY_PATH: &str = "/dl";

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(RELAY_PATH, any(relay))
        // Messages are unbounded, and a 405 must not depend on body size
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
