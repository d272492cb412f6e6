use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker value meaning "unknown / not applicable", distinct from zero
pub const SENTINEL: i32 = -1;

/// Detailed status of a device that has never been swept
pub const NOT_CHECKED: &str = "Not checked";
/// Detailed status of a device that failed the reachability check
pub const NO_RESPONSE: &str = "No response (ping)";
/// Detailed status of a reachable device that answered no query candidate
pub const PROTOCOL_UNRESPONSIVE: &str = "Online (not responding to IPP)";
/// Detailed status when the device reports no state message
pub const STATUS_UNAVAILABLE: &str = "Status not available";

/// Connectivity verdict stored with each device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectivityStatus {
    Online,
    Offline,
    #[default]
    Unknown,
}

impl ConnectivityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectivityStatus::Online => "Online",
            ConnectivityStatus::Offline => "Offline",
            ConnectivityStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ConnectivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectivityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(ConnectivityStatus::Online),
            "offline" => Ok(ConnectivityStatus::Offline),
            "unknown" => Ok(ConnectivityStatus::Unknown),
            _ => Err(format!(
                "Invalid status: {}. Please specify 'online', 'offline' or 'unknown'",
                s
            )),
        }
    }
}

/// One of the four tracked consumable channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplyBucket {
    Black,
    Cyan,
    Magenta,
    Yellow,
}

/// Supply levels in percent (0-100), or [`SENTINEL`] when unreadable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplyLevels {
    #[serde(rename = "toner_black")]
    pub black: i32,
    #[serde(rename = "toner_cyan")]
    pub cyan: i32,
    #[serde(rename = "toner_magenta")]
    pub magenta: i32,
    #[serde(rename = "toner_yellow")]
    pub yellow: i32,
}

impl SupplyLevels {
    pub const UNREADABLE: SupplyLevels = SupplyLevels {
        black: SENTINEL,
        cyan: SENTINEL,
        magenta: SENTINEL,
        yellow: SENTINEL,
    };

    pub fn get(&self, bucket: SupplyBucket) -> i32 {
        match bucket {
            SupplyBucket::Black => self.black,
            SupplyBucket::Cyan => self.cyan,
            SupplyBucket::Magenta => self.magenta,
            SupplyBucket::Yellow => self.yellow,
        }
    }

    pub fn set(&mut self, bucket: SupplyBucket, level: i32) {
        match bucket {
            SupplyBucket::Black => self.black = level,
            SupplyBucket::Cyan => self.cyan = level,
            SupplyBucket::Magenta => self.magenta = level,
            SupplyBucket::Yellow => self.yellow = level,
        }
    }
}

impl Default for SupplyLevels {
    fn default() -> Self {
        Self::UNREADABLE
    }
}

/// Last known state of a device, as written back by a sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub status: ConnectivityStatus,
    pub detailed_status: String,
    #[serde(flatten)]
    pub supplies: SupplyLevels,
    pub page_count: i64,
    pub last_checked: Option<DateTime<Utc>>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            status: ConnectivityStatus::Unknown,
            detailed_status: NOT_CHECKED.to_string(),
            supplies: SupplyLevels::UNREADABLE,
            page_count: i64::from(SENTINEL),
            last_checked: None,
        }
    }
}
