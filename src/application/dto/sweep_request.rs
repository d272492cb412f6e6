use crate::monitoring::policies::SweepTrigger;

/// SweepRequest - Internal request DTO for the sweep use case
#[derive(Debug, Clone, Copy)]
pub struct SweepRequest {
    /// What started the sweep
    pub trigger: SweepTrigger,
    /// Whether per-device progress should be reported
    pub show_progress: bool,
}

impl SweepRequest {
    /// Creates a request whose progress visibility follows the trigger
    pub fn new(trigger: SweepTrigger) -> Self {
        Self {
            trigger,
            show_progress: trigger.shows_progress(),
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}
