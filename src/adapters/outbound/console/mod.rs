/// Console adapters: progress display and log-backed audit trail
mod progress_reporter;
mod tracing_audit_log;

pub use progress_reporter::StderrProgressReporter;
pub use tracing_audit_log::TracingAuditLog;
