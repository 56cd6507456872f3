//! Webhook Relay - forward coded messages to pre-registered webhooks.
//!
//! The library holds the pieces shared by the `webhook-relay` binary and its
//! tests:
//! - `mapping`: loads the code-to-webhook mapping file (fresh on every request)
//! - `deliver`: posts `{"content": ...}` envelopes to webhook URLs
//! - `web`: the `/dl` endpoint tying the two together
//!
//! ## Flow
//!
//! ```text
//! POST /dl {code, message} → mapping lookup → POST webhook {content}
//! GET  /dl                → mapping file as JSON
//! ```

pub mod config;
pub mod deliver;
pub mod json;
pub mod mapping;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use deliver::{DeliveryError, Dispatcher, Envelope};
pub use mapping::{load_webhook_map, MapError, WebhookEntry, WebhookMap};
pub use web::{router, AppState, RelayError};
