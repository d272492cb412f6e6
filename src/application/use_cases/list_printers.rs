use crate::application::dto::PrinterFilter;
use crate::monitoring::domain::Device;
use crate::ports::outbound::InventoryStore;
use crate::shared::Result;

/// ListPrintersUseCase - Dashboard view of the inventory
///
/// Returns the filtered devices ordered by status, then by name.
pub struct ListPrintersUseCase<IS> {
    inventory: IS,
}

impl<IS: InventoryStore> ListPrintersUseCase<IS> {
    pub fn new(inventory: IS) -> Self {
        Self { inventory }
    }

    pub async fn execute(&self, filter: &PrinterFilter) -> Result<Vec<Device>> {
        let mut devices: Vec<Device> = self
            .inventory
            .list_devices()
            .await?
            .into_iter()
            .filter(|device| filter.matches(device))
            .collect();

        devices.sort_by(|a, b| {
            a.snapshot
                .status
                .as_str()
                .cmp(b.snapshot.status.as_str())
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(devices)
    }
}
