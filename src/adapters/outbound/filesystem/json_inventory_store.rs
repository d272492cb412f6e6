use crate::monitoring::domain::{Device, Outcome};
use crate::ports::outbound::InventoryStore;
use crate::shared::error::MonitorError;
use crate::shared::security::{
    validate_file_size, validate_not_symlink, validate_regular_file, MAX_INVENTORY_SIZE,
};
use crate::shared::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use uuid::Uuid;

/// JsonInventoryStore adapter keeping the printer inventory in a JSON file
///
/// The file holds a JSON array of printer records. Every snapshot update is
/// a read-modify-write of the whole file under an in-process lock that only
/// replaces the snapshot keys of the target row, and the
/// new content replaces the old one through a rename so readers never see a
/// partially written inventory.
pub struct JsonInventoryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonInventoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the raw inventory text; `None` for an empty file
    async fn read_content(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Err(MonitorError::InventoryNotFound {
                path: self.path.clone(),
                suggestion:
                    "Create the file with a JSON array of printers, or pass --inventory <PATH>"
                        .to_string(),
            }
            .into());
        }

        validate_regular_file(&self.path, "Inventory file")?;
        let metadata = tokio::fs::metadata(&self.path).await?;
        validate_file_size(metadata.len(), &self.path, MAX_INVENTORY_SIZE)?;

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            MonitorError::InventoryParseError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;

        // An empty file is an empty fleet
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(content))
    }

    fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<Vec<T>> {
        serde_json::from_str(content).map_err(|e| {
            MonitorError::InventoryParseError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }

    async fn read_all(&self) -> Result<Vec<Device>> {
        match self.read_content().await? {
            Some(content) => self.parse(&content),
            None => Ok(Vec::new()),
        }
    }

    /// Rows as stored, including keys no printer field models
    async fn read_rows(&self) -> Result<Vec<Map<String, Value>>> {
        match self.read_content().await? {
            Some(content) => self.parse(&content),
            None => Ok(Vec::new()),
        }
    }

    async fn write_rows(&self, rows: &[Map<String, Value>]) -> Result<()> {
        validate_not_symlink(&self.path, "write")?;

        let write_error = |details: String| MonitorError::InventoryWriteError {
            path: self.path.clone(),
            details,
        };

        let content =
            serde_json::to_string_pretty(rows).map_err(|e| write_error(e.to_string()))?;

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "inventory".to_string());
        let temp_path = self
            .path
            .with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4().simple()));

        tokio::fs::write(&temp_path, content)
            .await
            .map_err(|e| write_error(e.to_string()))?;

        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(write_error(e.to_string()).into());
        }

        Ok(())
    }
}

#[async_trait]
impl InventoryStore for JsonInventoryStore {
    async fn list_devices(&self) -> Result<Vec<Device>> {
        let _guard = self.write_lock.lock().await;
        self.read_all().await
    }

    async fn update_snapshot(&self, outcome: &Outcome) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut rows = self.read_rows().await?;
        let id = outcome.device_id().value();

        let row = rows
            .iter_mut()
            .find(|row| row.get("id").and_then(Value::as_u64) == Some(id))
            .ok_or(MonitorError::DeviceNotFound { id })?;

        // Only snapshot keys are replaced; every other key of the row is kept as is
        match serde_json::to_value(outcome.snapshot())? {
            Value::Object(snapshot) => row.extend(snapshot),
            other => anyhow::bail!("snapshot serialized to a non-object value: {}", other),
        }

        self.write_rows(&rows).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitoring::domain::{
        ConnectivityStatus, DeviceId, StatusReport, SupplyLevels, NOT_CHECKED,
    };
    use chrono::Utc;
    use std::fs;
    use tempfile::TempDir;

    const TWO_PRINTERS: &str = r#"[
        {"id": 1, "asset_tag": "PAT-0001", "name": "Reception", "ip_address": "10.0.0.1", "unit": "HQ"},
        {"id": 2, "asset_tag": "PAT-0002", "name": "Finance", "ip_address": "10.0.0.2",
         "status": "Online", "detailed_status": "Idle", "toner_black": 55, "page_count": 900}
    ]"#;

    fn store_with(content: &str) -> (TempDir, JsonInventoryStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("printers.json");
        fs::write(&path, content).unwrap();
        (temp_dir, JsonInventoryStore::new(path))
    }

    #[tokio::test]
    async fn test_list_devices_applies_defaults() {
        let (_dir, store) = store_with(TWO_PRINTERS);
        let devices = store.list_devices().await.unwrap();

        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].unit.as_deref(), Some("HQ"));
        assert_eq!(devices[0].snapshot.status, ConnectivityStatus::Unknown);
        assert_eq!(devices[0].snapshot.detailed_status, NOT_CHECKED);
        assert_eq!(devices[0].snapshot.supplies, SupplyLevels::UNREADABLE);
        assert_eq!(devices[1].snapshot.supplies.black, 55);
        assert_eq!(devices[1].snapshot.supplies.cyan, -1);
        assert_eq!(devices[1].snapshot.page_count, 900);
    }

    #[tokio::test]
    async fn test_update_snapshot_touches_only_target_device() {
        let (_dir, store) = store_with(TWO_PRINTERS);
        let outcome = Outcome::reported(
            DeviceId::new(1),
            StatusReport {
                detailed_status: "Ready".to_string(),
                page_count: 321,
                supplies: SupplyLevels {
                    black: 90,
                    cyan: 80,
                    magenta: 70,
                    yellow: 60,
                },
            },
            Utc::now(),
        );

        store.update_snapshot(&outcome).await.unwrap();
        let devices = store.list_devices().await.unwrap();

        assert_eq!(devices[0].snapshot, *outcome.snapshot());
        assert_eq!(devices[0].asset_tag, "PAT-0001");
        assert_eq!(devices[0].unit.as_deref(), Some("HQ"));
        assert_eq!(devices[1].snapshot.supplies.black, 55);
        assert_eq!(devices[1].snapshot.detailed_status, "Idle");
    }

    #[tokio::test]
    async fn test_update_keeps_fields_the_store_does_not_model() {
        let (dir, store) = store_with(
            r#"[{"id": 1, "asset_tag": "PAT-0001", "name": "Reception", "ip_address": "10.0.0.1",
                 "serial_number": "XK-99", "created_by": "admin", "toner_black": 40}]"#,
        );

        store
            .update_snapshot(&Outcome::unreachable(DeviceId::new(1), Utc::now()))
            .await
            .unwrap();

        let content = fs::read_to_string(dir.path().join("printers.json")).unwrap();
        let rows: Vec<Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(rows[0]["serial_number"], "XK-99");
        assert_eq!(rows[0]["created_by"], "admin");
        assert_eq!(rows[0]["asset_tag"], "PAT-0001");
        assert_eq!(rows[0]["status"], "Offline");
        assert_eq!(rows[0]["toner_black"], -1);
        assert!(rows[0]["last_checked"].is_string());
    }

    #[tokio::test]
    async fn test_update_leaves_no_temp_files() {
        let (dir, store) = store_with(TWO_PRINTERS);
        store
            .update_snapshot(&Outcome::unreachable(DeviceId::new(2), Utc::now()))
            .await
            .unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_updates_are_all_kept() {
        let (_dir, store) = store_with(TWO_PRINTERS);
        let store = std::sync::Arc::new(store);

        let a = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .update_snapshot(&Outcome::unreachable(DeviceId::new(1), Utc::now()))
                    .await
            })
        };
        let b = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .update_snapshot(&Outcome::unreachable(DeviceId::new(2), Utc::now()))
                    .await
            })
        };
        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        let devices = store.list_devices().await.unwrap();
        assert!(devices
            .iter()
            .all(|d| d.snapshot.status == ConnectivityStatus::Offline));
    }

    #[tokio::test]
    async fn test_unknown_device_is_rejected() {
        let (_dir, store) = store_with(TWO_PRINTERS);
        let err = store
            .update_snapshot(&Outcome::unreachable(DeviceId::new(99), Utc::now()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Printer 99 is not in the inventory"));
    }

    #[tokio::test]
    async fn test_missing_inventory_file() {
        let store = JsonInventoryStore::new("/nonexistent/printers.json");
        let err = store.list_devices().await.unwrap_err();
        assert!(err.to_string().contains("Inventory file not found"));
    }

    #[tokio::test]
    async fn test_malformed_inventory_file() {
        let (_dir, store) = store_with("{ not json");
        let err = store.list_devices().await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse inventory file"));
    }

    #[tokio::test]
    async fn test_empty_file_is_empty_inventory() {
        let (_dir, store) = store_with("  \n");
        assert!(store.list_devices().await.unwrap().is_empty());
    }
}
