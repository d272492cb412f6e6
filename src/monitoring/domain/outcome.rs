use super::device::{Device, DeviceId};
use super::snapshot::{
    ConnectivityStatus, Snapshot, SupplyLevels, NO_RESPONSE, PROTOCOL_UNRESPONSIVE, SENTINEL,
};
use chrono::{DateTime, Utc};

/// Normalized status read from a responsive device
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub detailed_status: String,
    pub page_count: i64,
    pub supplies: SupplyLevels,
}

/// Result of one device in one sweep.
///
/// Outcomes can only be built through the three constructors below, which
/// keep the snapshot consistent with how the device answered.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    device_id: DeviceId,
    snapshot: Snapshot,
}

impl Outcome {
    /// Device failed the reachability check: every reading is cleared
    pub fn unreachable(device_id: DeviceId, checked_at: DateTime<Utc>) -> Self {
        Self {
            device_id,
            snapshot: Snapshot {
                status: ConnectivityStatus::Offline,
                detailed_status: NO_RESPONSE.to_string(),
                supplies: SupplyLevels::UNREADABLE,
                page_count: i64::from(SENTINEL),
                last_checked: Some(checked_at),
            },
        }
    }

    /// Device is reachable but answered no query: previous readings are kept
    pub fn unmanageable(device: &Device, checked_at: DateTime<Utc>) -> Self {
        Self {
            device_id: device.id,
            snapshot: Snapshot {
                status: ConnectivityStatus::Online,
                detailed_status: PROTOCOL_UNRESPONSIVE.to_string(),
                supplies: device.snapshot.supplies,
                page_count: device.snapshot.page_count,
                last_checked: Some(checked_at),
            },
        }
    }

    /// Device answered the query
    pub fn reported(device_id: DeviceId, report: StatusReport, checked_at: DateTime<Utc>) -> Self {
        Self {
            device_id,
            snapshot: Snapshot {
                status: ConnectivityStatus::Online,
                detailed_status: report.detailed_status,
                supplies: report.supplies,
                page_count: report.page_count,
                last_checked: Some(checked_at),
            },
        }
    }

    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn is_online(&self) -> bool {
        self.snapshot.status == ConnectivityStatus::Online
    }
}
