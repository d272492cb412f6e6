use crate::monitoring::domain::DeviceDescription;
use async_trait::async_trait;

/// DeviceQueryClient port for reading a device's status description
///
/// Called only for devices that passed the reachability check.
///
/// # Returns
/// `None` when no endpoint produced a usable description. Callers treat
/// that as "reachable but unmanageable", never as a sweep failure.
#[async_trait]
pub trait DeviceQueryClient: Send + Sync {
    async fn query(&self, address: &str) -> Option<DeviceDescription>;
}
