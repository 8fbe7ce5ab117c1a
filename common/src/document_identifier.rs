//! Route identifier for incoming documents.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Opaque identifier of an incoming document, as it appears in the URL path.
///
/// The value is carried verbatim: it is neither validated nor percent-encoded
/// when interpolated into the API path, so callers must supply a path-safe value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncomingDocumentId(pub String);

impl IncomingDocumentId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for IncomingDocumentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for IncomingDocumentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// Display and FromStr must mirror each other so the router can round-trip the segment.
impl Display for IncomingDocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IncomingDocumentId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_route_segment_verbatim() {
        let id: IncomingDocumentId = "42".parse().unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn keeps_unusual_characters_untouched() {
        let id = IncomingDocumentId::new("INC-2024/07 a");
        assert_eq!(id.to_string(), "INC-2024/07 a");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = IncomingDocumentId::from("7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
    }
}
