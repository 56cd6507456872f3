//! Mapping module for resolving codes to webhook destinations.
//!
//! The mapping lives in a single JSON file shaped like:
//!
//! ```text
//! { "<code>": { "webhooks_url": "<https://...>" }, ... }
//! ```
//!
//! It is reloaded from disk on every call; nothing is cached between requests.

pub mod loader;
pub mod types;

pub use loader::{load_webhook_map, MapError};
pub use types::{WebhookEntry, WebhookMap};
