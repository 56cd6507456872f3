//! Mapping file types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::json::null_as_empty;

/// Code-to-destination mapping as stored in the mapping file.
///
/// Ordered so that re-serializing it for the listing endpoint is deterministic.
pub type WebhookMap = BTreeMap<String, WebhookEntry>;

/// A single registered destination.
///
/// A `null` entry, or one without `webhooks_url`, loads with an empty URL
/// rather than failing the whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<RawEntry>")]
pub struct WebhookEntry {
    /// Outbound webhook URL (not validated)
    pub webhooks_url: String,
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    webhooks_url: String,
}

impl From<Option<RawEntry>> for WebhookEntry {
    fn from(raw: Option<RawEntry>) -> Self {
        raw.map(|r| WebhookEntry {
            webhooks_url: r.webhooks_url,
        })
        .unwrap_or_default()
    }
}
