use super::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque inventory identifier of a printer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(u64);

impl DeviceId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One physical printer in the inventory.
///
/// Identity fields belong to the inventory maintainers; only `snapshot` is
/// rewritten, and only by a completed sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    #[serde(default)]
    pub asset_tag: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hostname: String,
    /// Dotted-quad address, validated before insertion
    #[serde(default)]
    pub ip_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(flatten)]
    pub snapshot: Snapshot,
}

impl Device {
    /// Creates a never-checked device with the mandatory identity fields
    pub fn new(
        id: DeviceId,
        asset_tag: impl Into<String>,
        name: impl Into<String>,
        ip_address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            asset_tag: asset_tag.into(),
            name: name.into(),
            hostname: String::new(),
            ip_address: ip_address.into(),
            unit: None,
            manufacturer: None,
            model: None,
            location: None,
            sector: None,
            snapshot: Snapshot::default(),
        }
    }

    pub fn with_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.snapshot = snapshot;
        self
    }
}
