use printwatch::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock AuditLog for testing that captures events
#[derive(Clone, Default)]
pub struct MockAuditLog {
    pub events: Arc<Mutex<Vec<AuditEvent>>>,
}

impl MockAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.action_type.clone())
            .collect()
    }
}

impl AuditLog for MockAuditLog {
    fn record(&self, event: AuditEvent) {
        self.events.lock().unwrap().push(event);
    }
}
