//! Outbound message envelope.

use serde::{Deserialize, Serialize};

/// Body posted to a webhook, in the Discord webhook shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub content: String,
}

impl Envelope {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serialization() {
        let json = serde_json::to_string(&Envelope::new("hello")).unwrap();
        assert_eq!(json, r#"{"content":"hello"}"#);
    }

    #[test]
    fn test_envelope_escapes_content() {
        let json = serde_json::to_string(&Envelope::new("line one\n\"quoted\"")).unwrap();
        assert_eq!(json, r#"{"content":"line one\n\"quoted\""}"#);
    }
}
