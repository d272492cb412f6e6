/// Filesystem adapters for the inventory and the audit trail
mod json_inventory_store;
mod jsonl_audit_log;

pub use json_inventory_store::JsonInventoryStore;
pub use jsonl_audit_log::JsonLinesAuditLog;
