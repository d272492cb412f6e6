use crate::monitoring::domain::Device;
use crate::shared::Result;

/// InventoryFormatter port for rendering the printer dashboard
pub trait InventoryFormatter {
    /// Formats the given devices, already filtered and sorted
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, devices: &[Device]) -> Result<String>;
}
