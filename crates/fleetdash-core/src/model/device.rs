//! Camera device records.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{RecordStatus, lenient, lenient_strings};

/// Worker placement of a capability that runs in a container (playback, analytics).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerConfig {
    #[serde(rename = "node_alias_name", default, deserialize_with = "lenient")]
    pub node_alias_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub container_status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub container_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<String>,
}

/// Live-stream placement.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StreamConfig {
    #[serde(default, deserialize_with = "lenient")]
    pub node_alias_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub alias: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub rtsp_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub device_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlaybackFlags {
    #[serde(default, deserialize_with = "lenient")]
    pub enabled: Option<bool>,
}

/// A camera registered in the fleet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(rename = "_id", default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub device_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub org_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub site_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub playback_config: Option<ContainerConfig>,
    #[serde(default, deserialize_with = "lenient")]
    pub live_stream_config: Option<StreamConfig>,
    #[serde(default, deserialize_with = "lenient")]
    pub analytics_config: Option<ContainerConfig>,
    #[serde(default, deserialize_with = "lenient")]
    pub device_info: Option<DeviceInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub playback: Option<PlaybackFlags>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub app_types: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<RecordStatus>,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Device {
    pub fn info(&self) -> Option<&DeviceInfo> {
        self.device_info.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.info().and_then(|i| i.name.as_deref())
    }

    pub fn alias(&self) -> Option<&str> {
        self.info().and_then(|i| i.alias.as_deref())
    }

    pub fn device_type(&self) -> Option<&str> {
        self.info().and_then(|i| i.device_type.as_deref())
    }

    pub fn rtsp_url(&self) -> Option<&str> {
        self.info().and_then(|i| i.rtsp_url.as_deref())
    }

    /// Site id, falling back to the organization name.
    pub fn site(&self) -> Option<&str> {
        self.site_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.org_name.as_deref())
    }

    pub fn playback_enabled(&self) -> bool {
        self.playback.as_ref().and_then(|p| p.enabled).unwrap_or(false)
    }

    pub fn playback_node(&self) -> Option<&str> {
        self.playback_config
            .as_ref()
            .and_then(|c| c.node_alias_name.as_deref())
    }

    pub fn live_node(&self) -> Option<&str> {
        self.live_stream_config
            .as_ref()
            .and_then(|c| c.node_alias_name.as_deref())
    }

    pub fn analytics_node(&self) -> Option<&str> {
        self.analytics_config
            .as_ref()
            .and_then(|c| c.node_alias_name.as_deref())
    }

    pub fn is_active(&self) -> bool {
        self.status.as_ref().is_some_and(RecordStatus::is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_record() {
        let json = r#"{
            "_id": "65f0c0",
            "deviceId": "CAM-001",
            "siteId": "site-7",
            "playbackConfig": {"node_alias_name": "edge-a", "containerStatus": "running", "containerName": "pb-1"},
            "liveStreamConfig": {"node_alias_name": "edge-b"},
            "deviceInfo": {"name": "Front Gate", "rtspUrl": "rtsp://10.0.0.5/1", "deviceType": "ptz"},
            "playback": {"enabled": true},
            "appTypes": ["live", "playback"],
            "status": "active",
            "updatedAt": "2026-10-19T14:03:22.000Z"
        }"#;
        let d: Device = serde_json::from_str(json).unwrap();
        assert_eq!(d.id.as_deref(), Some("65f0c0"));
        assert_eq!(d.device_id.as_deref(), Some("CAM-001"));
        assert_eq!(d.name(), Some("Front Gate"));
        assert_eq!(d.rtsp_url(), Some("rtsp://10.0.0.5/1"));
        assert_eq!(d.playback_node(), Some("edge-a"));
        assert_eq!(d.live_node(), Some("edge-b"));
        assert_eq!(d.analytics_node(), None);
        assert!(d.playback_enabled());
        assert!(d.is_active());
        assert_eq!(d.app_types, vec!["live", "playback"]);
        assert!(d.updated_at.is_some());
    }

    #[test]
    fn site_falls_back_to_org_name() {
        let d: Device = serde_json::from_str(r#"{"orgName": "Acme"}"#).unwrap();
        assert_eq!(d.site(), Some("Acme"));
    }

    #[test]
    fn malformed_optional_blocks_become_absent() {
        let d: Device = serde_json::from_str(
            r#"{"deviceInfo": "oops", "updatedAt": "yesterday", "playback": {"enabled": "yes"}}"#,
        )
        .unwrap();
        assert!(d.device_info.is_none());
        assert!(d.updated_at.is_none());
        assert!(!d.playback_enabled());
    }
}
