use crate::shared::Result;

/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback during long-running sweeps.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress with a fraction complete
    ///
    /// # Arguments
    /// * `current` - Units completed so far
    /// * `total` - Total expected units
    /// * `message` - Optional label to show next to the fraction
    ///
    /// # Errors
    /// Returns an error if the display is unavailable. Callers treat progress
    /// as best-effort and must not abort on this error.
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) -> Result<()>;

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
