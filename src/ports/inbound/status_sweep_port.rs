use crate::application::dto::{SweepRequest, SweepResponse};
use crate::shared::Result;
use async_trait::async_trait;

/// StatusSweepPort - Inbound port for running a printer status sweep
///
/// This is what the session scheduler and the CLI drive. Implementations
/// must be shareable across tasks so a sweep can run in the background
/// while the session keeps listening for triggers.
#[async_trait]
pub trait StatusSweepPort: Send + Sync {
    /// Runs one complete sweep over the current inventory
    ///
    /// # Returns
    /// A response whose `online`/`total` counts cover every device in the
    /// inventory at the start of the sweep
    ///
    /// # Errors
    /// Returns an error only when the inventory itself cannot be read.
    /// Per-device failures are folded into the device outcomes.
    async fn run_sweep(&self, request: SweepRequest) -> Result<SweepResponse>;
}
