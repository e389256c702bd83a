use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown when a valid search has been in flight for a while.
pub const SEARCH_IN_PROGRESS_MESSAGE: &str =
    "Searching court records... This may take a moment.";

/// Shown by the network error handler.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error occurred. Please check your connection and try again.";

/// Severity of an alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Error,
    Info,
    #[default]
    Success,
}

impl AlertKind {
    /// Parse a severity tag. Anything other than `error` or `info` is a success.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "error" => AlertKind::Error,
            "info" => AlertKind::Info,
            _ => AlertKind::Success,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Error => "error",
            AlertKind::Info => "info",
            AlertKind::Success => "success",
        }
    }

    /// CSS modifier class for the banner.
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Error => "alert-danger",
            AlertKind::Info => "alert-info",
            AlertKind::Success => "alert-success",
        }
    }
}

impl From<&str> for AlertKind {
    fn from(tag: &str) -> Self {
        AlertKind::from_tag(tag)
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a presented alert, unique for the page lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AlertId(pub u64);

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alert-{}", self.0)
    }
}

/// A dismissible banner currently on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn new(id: AlertId, kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
        }
    }
}

/// Position at which a new banner goes into a stack of `existing` banners:
/// right after the first one, or at the top when there are none.
pub fn alert_insert_position(existing: usize) -> usize {
    existing.min(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_parse() {
        assert_eq!(AlertKind::from_tag("error"), AlertKind::Error);
        assert_eq!(AlertKind::from_tag("info"), AlertKind::Info);
        assert_eq!(AlertKind::from_tag("success"), AlertKind::Success);
    }

    #[test]
    fn unknown_tags_fall_back_to_success() {
        assert_eq!(AlertKind::from_tag("warning"), AlertKind::Success);
        assert_eq!(AlertKind::from_tag(""), AlertKind::Success);
        assert_eq!(AlertKind::from_tag("ERROR"), AlertKind::Success);
    }

    #[test]
    fn tags_convert_into_kinds() {
        let kind: AlertKind = "error".into();
        assert_eq!(kind, AlertKind::Error);
        assert_eq!(AlertKind::from("notice"), AlertKind::Success);
    }

    #[test]
    fn css_classes() {
        assert_eq!(AlertKind::Error.css_class(), "alert-danger");
        assert_eq!(AlertKind::Info.css_class(), "alert-info");
        assert_eq!(AlertKind::Success.css_class(), "alert-success");
    }

    #[test]
    fn serializes_as_lowercase_tag() {
        let json = serde_json::to_string(&AlertKind::Error).unwrap();
        assert_eq!(json, "\"error\"");
        let kind: AlertKind = serde_json::from_str("\"info\"").unwrap();
        assert_eq!(kind, AlertKind::Info);
    }

    #[test]
    fn insert_position_follows_first_banner() {
        assert_eq!(alert_insert_position(0), 0);
        assert_eq!(alert_insert_position(1), 1);
        assert_eq!(alert_insert_position(4), 1);
    }

    #[test]
    fn alert_id_display_is_dom_friendly() {
        assert_eq!(AlertId(7).to_string(), "alert-7");
    }
}
