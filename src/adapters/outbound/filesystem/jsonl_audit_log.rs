use crate::ports::outbound::{AuditEvent, AuditLog};
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::warn;

/// JsonLinesAuditLog adapter appending audit events to a JSON Lines file
///
/// One event per line. Failures are logged and swallowed.
pub struct JsonLinesAuditLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonLinesAuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn append(&self, event: &AuditEvent) -> Result<()> {
        validate_not_symlink(&self.path, "append")?;

        let mut line = serde_json::to_string(event)?;
        line.push('\n');

        let _guard = self
            .lock
            .lock()
            .map_err(|_| anyhow::anyhow!("audit log lock is poisoned"))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

impl AuditLog for JsonLinesAuditLog {
    fn record(&self, event: AuditEvent) {
        if let Err(e) = self.append(&event) {
            warn!(
                path = %self.path.display(),
                action = %event.action_type,
                error = %e,
                "failed to write audit event"
            );
        }
    }
}
