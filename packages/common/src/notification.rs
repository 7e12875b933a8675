//! Transient user notifications.
//!
//! Operations never render anything themselves; they queue a `Notification`
//! and the host (CLI, browser front end) decides how to show it.

use serde::Serialize;

/// Display time for ordinary notifications
pub const DEFAULT_NOTIFICATION_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration_ms: u64,
}

impl Notification {
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title)
    }

    fn new(kind: NotificationKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: None,
            duration_ms: DEFAULT_NOTIFICATION_MS,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let n = Notification::success("Published")
            .with_description("https://example.test")
            .with_duration(5000);
        let json = serde_json::to_string(&n).unwrap();

        assert!(json.contains("\"kind\":\"success\""));
        assert!(json.contains("\"durationMs\":5000"));
        assert!(json.contains("\"description\":\"https://example.test\""));
    }

    #[test]
    fn test_description_omitted_when_absent() {
        let json = serde_json::to_string(&Notification::error("Oops")).unwrap();
        assert!(!json.contains("description"));
    }
}
