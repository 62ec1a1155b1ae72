//! Record types of the three dashboard collections.
//!
//! Records arrive as JSON arrays from the data source. Optional fields are
//! deserialized leniently: a missing, `null` or wrongly typed value becomes
//! `None` instead of failing the whole array.

mod activity;
mod device;
mod node;

pub use activity::*;
pub use device::*;
pub use node::*;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Collection served by the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Devices,
    Nodes,
    Activities,
}

impl Collection {
    /// File stem / endpoint name; also the plural noun in footers and
    /// empty-state messages.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Devices => "devices",
            Collection::Nodes => "nodes",
            Collection::Activities => "activities",
        }
    }

    pub fn parse(s: &str) -> Option<Collection> {
        match s.trim().to_ascii_lowercase().as_str() {
            "devices" | "device" => Some(Collection::Devices),
            "nodes" | "node" => Some(Collection::Nodes),
            "activities" | "activity" | "activity_logs" => Some(Collection::Activities),
            _ => None,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `active` / `inactive` record status; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum RecordStatus {
    Active,
    Inactive,
    Unknown(String),
}

impl From<String> for RecordStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => RecordStatus::Active,
            "inactive" => RecordStatus::Inactive,
            _ => RecordStatus::Unknown(s),
        }
    }
}

impl RecordStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Inactive => "inactive",
            RecordStatus::Unknown(s) => s,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RecordStatus::Active)
    }
}

/// Container state reported for playback/analytics workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    Running,
    Stopped,
}

impl ContainerState {
    pub fn classify(status: &str) -> Self {
        if status == "running" {
            ContainerState::Running
        } else {
            ContainerState::Stopped
        }
    }
}

/// Deserializes an optional field, mapping `null` and type mismatches to `None`.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Deserializes a list of strings, dropping non-string entries.
pub(crate) fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Deserializes an optional number, accepting integers, floats and numeric strings.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
