/// Mock implementations for testing
mod mock_audit_log;
mod mock_connectivity_prober;
mod mock_device_query_client;
mod mock_inventory_store;
mod mock_progress_reporter;

pub use mock_audit_log::MockAuditLog;
pub use mock_connectivity_prober::MockConnectivityProber;
pub use mock_device_query_client::MockDeviceQueryClient;
pub use mock_inventory_store::MockInventoryStore;
pub use mock_progress_reporter::MockProgressReporter;
