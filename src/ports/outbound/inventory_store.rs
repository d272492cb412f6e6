use crate::monitoring::domain::{Device, Outcome};
use crate::shared::Result;
use async_trait::async_trait;

/// InventoryStore port for the printer inventory
///
/// Reads may happen concurrently with snapshot writes from other sweep
/// units. Each `update_snapshot` is an atomic single-row update; there is
/// no transaction spanning several devices.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Reads every device with its last stored snapshot
    ///
    /// # Errors
    /// Returns an error if the inventory cannot be read or parsed
    async fn list_devices(&self) -> Result<Vec<Device>>;

    /// Replaces the snapshot fields of the outcome's device
    ///
    /// # Errors
    /// Returns an error if the device no longer exists or the write fails
    async fn update_snapshot(&self, outcome: &Outcome) -> Result<()>;
}
