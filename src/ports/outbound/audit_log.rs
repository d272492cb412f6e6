use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One entry of the audit trail
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub action_type: String,
    pub details: String,
}

impl AuditEvent {
    pub fn new(action_type: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            action_type: action_type.into(),
            details: details.into(),
        }
    }
}

/// AuditLog port for the fire-and-forget audit trail
///
/// `record` returns nothing on purpose: implementations swallow their own
/// failures so that auditing can never influence the operation being audited.
pub trait AuditLog: Send + Sync {
    fn record(&self, event: AuditEvent);
}

impl<T: AuditLog + ?Sized> AuditLog for Box<T> {
    fn record(&self, event: AuditEvent) {
        (**self).record(event)
    }
}
