/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, inventory storage, console, etc.).
pub mod audit_log;
pub mod connectivity_prober;
pub mod device_query_client;
pub mod inventory_formatter;
pub mod inventory_store;
pub mod progress_reporter;

pub use audit_log::{AuditEvent, AuditLog};
pub use connectivity_prober::ConnectivityProber;
pub use device_query_client::DeviceQueryClient;
pub use inventory_formatter::InventoryFormatter;
pub use inventory_store::InventoryStore;
pub use progress_reporter::ProgressReporter;
