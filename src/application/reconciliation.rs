use crate::monitoring::domain::Outcome;
use crate::ports::outbound::InventoryStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// ReconciliationWriter persists sweep outcomes one device at a time
///
/// A failed write is logged and reported back as `false`; it never affects
/// the write of any other outcome.
pub struct ReconciliationWriter<S: ?Sized> {
    store: Arc<S>,
}

impl<S: InventoryStore + ?Sized> ReconciliationWriter<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Writes one outcome back; returns whether it was persisted
    pub async fn persist(&self, outcome: &Outcome) -> bool {
        match self.store.update_snapshot(outcome).await {
            Ok(()) => {
                debug!(
                    device_id = %outcome.device_id(),
                    status = %outcome.snapshot().status,
                    "printer snapshot persisted"
                );
                true
            }
            Err(e) => {
                warn!(
                    device_id = %outcome.device_id(),
                    error = %e,
                    "failed to persist printer snapshot"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitoring::domain::{Device, DeviceId};
    use crate::shared::Result;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        written: Mutex<Vec<DeviceId>>,
        failing: Option<DeviceId>,
    }

    #[async_trait]
    impl InventoryStore for RecordingStore {
        async fn list_devices(&self) -> Result<Vec<Device>> {
            Ok(vec![])
        }

        async fn update_snapshot(&self, outcome: &Outcome) -> Result<()> {
            if self.failing == Some(outcome.device_id()) {
                anyhow::bail!("disk full");
            }
            self.written.lock().unwrap().push(outcome.device_id());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_persist_reports_success() {
        let store = Arc::new(RecordingStore::default());
        let writer = ReconciliationWriter::new(Arc::clone(&store));

        assert!(writer.persist(&Outcome::unreachable(DeviceId::new(1), Utc::now())).await);
        assert_eq!(*store.written.lock().unwrap(), vec![DeviceId::new(1)]);
    }

    #[tokio::test]
    async fn test_failed_write_does_not_affect_others() {
        let store = Arc::new(RecordingStore {
            failing: Some(DeviceId::new(2)),
            ..Default::default()
        });
        let writer = ReconciliationWriter::new(Arc::clone(&store));
        let now = Utc::now();

        assert!(writer.persist(&Outcome::unreachable(DeviceId::new(1), now)).await);
        assert!(!writer.persist(&Outcome::unreachable(DeviceId::new(2), now)).await);
        assert!(writer.persist(&Outcome::unreachable(DeviceId::new(3), now)).await);
        assert_eq!(
            *store.written.lock().unwrap(),
            vec![DeviceId::new(1), DeviceId::new(3)]
        );
    }
}
