//! Streaming node records.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{RecordStatus, lenient, lenient_number};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NodeLimit {
    #[serde(default, deserialize_with = "lenient_number")]
    pub max_limit: Option<f64>,
}

/// Per-capability stream limits.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NodeLimits {
    #[serde(default, deserialize_with = "lenient")]
    pub streamer: Option<NodeLimit>,
    #[serde(default, deserialize_with = "lenient")]
    pub live: Option<NodeLimit>,
    #[serde(default, deserialize_with = "lenient")]
    pub playback: Option<NodeLimit>,
}

/// Media server connection info.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MediaServerInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub media_mtx_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub ip_addr: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub password: Option<String>,
}

/// A streaming node. `alias_name` is unique across nodes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Node {
    #[serde(rename = "_id", default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub alias_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<RecordStatus>,
    #[serde(default, deserialize_with = "lenient")]
    pub limits: Option<NodeLimits>,
    #[serde(rename = "mediaMtxInfo", default, deserialize_with = "lenient")]
    pub media_server: Option<MediaServerInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(rename = "updatedAt", default, deserialize_with = "lenient")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Capability whose limit is configured per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Streamer,
    Live,
    Playback,
}

impl Node {
    pub fn limit(&self, capability: Capability) -> Option<f64> {
        let limits = self.limits.as_ref()?;
        let limit = match capability {
            Capability::Streamer => limits.streamer.as_ref(),
            Capability::Live => limits.live.as_ref(),
            Capability::Playback => limits.playback.as_ref(),
        }?;
        limit.max_limit
    }

    fn media(&self) -> Option<&MediaServerInfo> {
        self.media_server.as_ref()
    }

    pub fn ip_addr(&self) -> Option<&str> {
        self.media().and_then(|m| m.ip_addr.as_deref())
    }

    pub fn domain(&self) -> Option<&str> {
        self.media().and_then(|m| m.domain.as_deref())
    }

    pub fn media_url(&self) -> Option<&str> {
        self.media().and_then(|m| m.media_mtx_url.as_deref())
    }

    pub fn username(&self) -> Option<&str> {
        self.media().and_then(|m| m.username.as_deref())
    }

    pub fn has_password(&self) -> bool {
        self.media()
            .and_then(|m| m.password.as_deref())
            .is_some_and(|p| !p.is_empty())
    }

    pub fn status_str(&self) -> Option<&str> {
        self.status.as_ref().map(RecordStatus::as_str)
    }
}
