use async_trait::async_trait;
use printwatch::prelude::*;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Mock InventoryStore for testing, backed by an in-memory device list
#[derive(Clone, Default)]
pub struct MockInventoryStore {
    pub devices: Arc<Mutex<Vec<Device>>>,
    pub should_fail: bool,
    pub failing_writes: HashSet<u64>,
}

impl MockInventoryStore {
    pub fn new(devices: Vec<Device>) -> Self {
        Self {
            devices: Arc::new(Mutex::new(devices)),
            ..Self::default()
        }
    }

    /// A store whose inventory cannot be read
    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_failing_write(mut self, id: u64) -> Self {
        self.failing_writes.insert(id);
        self
    }

    pub fn device(&self, id: u64) -> Device {
        self.devices
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id.value() == id)
            .cloned()
            .expect("device present in mock inventory")
    }
}

#[async_trait]
impl InventoryStore for MockInventoryStore {
    async fn list_devices(&self) -> Result<Vec<Device>> {
        if self.should_fail {
            anyhow::bail!("Mock inventory read failure");
        }
        Ok(self.devices.lock().unwrap().clone())
    }

    async fn update_snapshot(&self, outcome: &Outcome) -> Result<()> {
        if self.failing_writes.contains(&outcome.device_id().value()) {
            anyhow::bail!("Mock inventory write failure");
        }
        let mut devices = self.devices.lock().unwrap();
        let device = devices
            .iter_mut()
            .find(|d| d.id == outcome.device_id())
            .ok_or_else(|| anyhow::anyhow!("unknown device {}", outcome.device_id()))?;
        device.snapshot = outcome.snapshot().clone();
        Ok(())
    }
}
