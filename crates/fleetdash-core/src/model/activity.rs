//! Activity log records.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::lenient;

/// Capability an activity entry belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ActivityType {
    Live,
    Playback,
    Analytics,
    Streamer,
    Unknown(String),
}

impl From<String> for ActivityType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "live" => ActivityType::Live,
            "playback" => ActivityType::Playback,
            "analytics" => ActivityType::Analytics,
            "streamer" => ActivityType::Streamer,
            _ => ActivityType::Unknown(s),
        }
    }
}

impl ActivityType {
    pub fn as_str(&self) -> &str {
        match self {
            ActivityType::Live => "live",
            ActivityType::Playback => "playback",
            ActivityType::Analytics => "analytics",
            ActivityType::Streamer => "streamer",
            ActivityType::Unknown(s) => s,
        }
    }
}

/// Broad classification of a free-form action string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Started,
    Stopped,
    Error,
    Restart,
    Other,
}

impl ActionKind {
    /// First keyword contained in the lowercased action wins.
    pub fn classify(action: &str) -> Self {
        const KEYWORDS: &[(&str, ActionKind)] = &[
            ("started", ActionKind::Started),
            ("stopped", ActionKind::Stopped),
            ("error", ActionKind::Error),
            ("restart", ActionKind::Restart),
        ];
        let action = action.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(kw, _)| action.contains(kw))
            .map(|(_, kind)| *kind)
            .unwrap_or(ActionKind::Other)
    }
}

/// One entry of the activity log.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Activity {
    #[serde(rename = "_id", default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub device_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub node_alias_name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<ActivityType>,
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<DateTime<Utc>>,
    #[serde(rename = "errorMessage", default, deserialize_with = "lenient")]
    pub error_message: Option<String>,
}

impl Activity {
    pub fn kind_str(&self) -> Option<&str> {
        self.kind.as_ref().map(ActivityType::as_str)
    }

    pub fn action_kind(&self) -> Option<ActionKind> {
        self.action.as_deref().map(ActionKind::classify)
    }

    pub fn has_error(&self) -> bool {
        self.error_message.as_deref().is_some_and(|e| !e.is_empty())
    }
}
