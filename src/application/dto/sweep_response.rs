use crate::monitoring::policies::SweepTrigger;
use std::time::Duration;

/// SweepResponse - Aggregate result of one sweep
///
/// `online` counts outcomes with status Online, including outcomes whose
/// write-back failed; `total` is the inventory size at the start of the sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResponse {
    pub trigger: SweepTrigger,
    pub online: usize,
    pub total: usize,
    /// Devices whose unit of work crashed and produced no outcome
    pub excluded: usize,
    /// Outcomes that could not be written back
    pub persist_failures: usize,
    pub elapsed: Duration,
}

impl SweepResponse {
    /// Response for an empty inventory: nothing was dispatched
    pub fn empty(trigger: SweepTrigger) -> Self {
        Self {
            trigger,
            online: 0,
            total: 0,
            excluded: 0,
            persist_failures: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// The (online, total) pair shown to users
    pub fn counts(&self) -> (usize, usize) {
        (self.online, self.total)
    }

    pub fn has_offline(&self) -> bool {
        self.online < self.total
    }
}
