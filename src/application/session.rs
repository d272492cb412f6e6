use crate::monitoring::policies::{RefreshPolicy, SweepTrigger};
use chrono::{DateTime, Utc};

/// Per-session monitoring state
///
/// Tracks when the last sweep finished, the auto-refresh preference and
/// whether a sweep is currently running. At most one sweep runs per session; triggers that
/// arrive while one is in flight are dropped rather than queued.
#[derive(Debug)]
pub struct MonitorSession {
    policy: RefreshPolicy,
    auto_refresh: bool,
    last_sweep_at: Option<DateTime<Utc>>,
    sweep_in_flight: bool,
}

impl MonitorSession {
    pub fn new(policy: RefreshPolicy, auto_refresh: bool) -> Self {
        Self {
            policy,
            auto_refresh,
            last_sweep_at: None,
            sweep_in_flight: false,
        }
    }

    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    pub fn set_auto_refresh(&mut self, enabled: bool) {
        self.auto_refresh = enabled;
    }

    pub fn last_sweep_at(&self) -> Option<DateTime<Utc>> {
        self.last_sweep_at
    }

    pub fn is_sweep_in_flight(&self) -> bool {
        self.sweep_in_flight
    }

    /// Evaluates the refresh policy and, when a sweep is due, marks it in flight
    ///
    /// Returns `None` while another sweep is running, whatever the trigger.
    pub fn poll(&mut self, manual_requested: bool, now: DateTime<Utc>) -> Option<SweepTrigger> {
        if self.sweep_in_flight {
            return None;
        }

        let trigger =
            self.policy
                .evaluate(manual_requested, self.last_sweep_at, self.auto_refresh, now)?;
        self.sweep_in_flight = true;
        Some(trigger)
    }

    /// Records the end of the in-flight sweep, successful or not
    pub fn complete_sweep(&mut self, finished_at: DateTime<Utc>) {
        self.sweep_in_flight = false;
        self.last_sweep_at = Some(finished_at);
    }
}
