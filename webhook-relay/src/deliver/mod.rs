//! Delivery module for posting message envelopes to webhooks.
//!
//! One delivery is a single POST of `{"content": "<message>"}`. There is no
//! retry; the outcome is reported straight back to the caller.

pub mod dispatcher;
pub mod envelope;

pub use dispatcher::{DeliveryError, Dispatcher};
pub use envelope::Envelope;
