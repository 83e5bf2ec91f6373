//! Channel payloads

use serde::{Deserialize, Serialize};

/// The value a channel carries.
///
/// Every channel in this workspace carries either nothing (`getNow`) or a
/// single text string (`showError`, `now`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    /// No payload
    Empty,
    /// A single text string
    Text(String),
}

impl Payload {
    /// Text payload from anything string-like
    pub fn text(s: impl Into<String>) -> Self {
        Payload::Text(s.into())
    }

    /// The carried text, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Empty => None,
            Payload::Text(s) => Some(s),
        }
    }

    /// The carried text, with `Empty` reading as the empty string
    pub fn into_text(self) -> String {
        match self {
            Payload::Empty => String::new(),
            Payload::Text(s) => s,
        }
    }

    /// Whether there is no payload
    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trip() {
        let p = Payload::text("disk full");
        assert_eq!(p.as_text(), Some("disk full"));
        assert_eq!(p.into_text(), "disk full");
    }

    #[test]
    fn empty_reads_as_empty_string() {
        assert_eq!(Payload::Empty.as_text(), None);
        assert_eq!(Payload::Empty.into_text(), "");
        assert!(Payload::Empty.is_empty());
    }

    #[test]
    fn empty_text_is_preserved_verbatim() {
        let p = Payload::text("");
        assert_eq!(p.as_text(), Some(""));
        assert!(!p.is_empty());
    }
}
