use crate::ports::outbound::{AuditEvent, AuditLog};
use tracing::info;

/// TracingAuditLog adapter emitting audit events as log records
///
/// Used when no audit file is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditLog;

impl AuditLog for TracingAuditLog {
    fn record(&self, event: AuditEvent) {
        info!(
            target: "printwatch::audit",
            id = %event.id,
            action = %event.action_type,
            "{}",
            event.details
        );
    }
}
