use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

/// Interval after which an automatic sweep becomes due
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

/// What started a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepTrigger {
    /// Explicit user action
    Manual,
    /// First view of the session, nothing swept yet
    Initial,
    /// Refresh interval elapsed with auto-refresh enabled
    Automatic,
}

impl SweepTrigger {
    /// Automatic sweeps run silently so passive viewing is not interrupted
    pub fn shows_progress(&self) -> bool {
        !matches!(self, SweepTrigger::Automatic)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SweepTrigger::Manual => "manual",
            SweepTrigger::Initial => "initial",
            SweepTrigger::Automatic => "automatic",
        }
    }
}

impl fmt::Display for SweepTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RefreshPolicy decides whether a sweep should start now
///
/// Priority order when several triggers hold at once:
/// 1. Manual
/// 2. Initial (no sweep recorded for the session)
/// 3. Automatic (auto-refresh on and the interval strictly exceeded)
#[derive(Debug, Clone, Copy)]
pub struct RefreshPolicy {
    interval: Duration,
}

impl RefreshPolicy {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn evaluate(
        &self,
        manual_requested: bool,
        last_sweep_at: Option<DateTime<Utc>>,
        auto_refresh: bool,
        now: DateTime<Utc>,
    ) -> Option<SweepTrigger> {
        if manual_requested {
            return Some(SweepTrigger::Manual);
        }

        let Some(last_sweep_at) = last_sweep_at else {
            return Some(SweepTrigger::Initial);
        };

        // A clock that went backwards counts as no time elapsed
        let elapsed = (now - last_sweep_at).to_std().unwrap_or(Duration::ZERO);
        if auto_refresh && elapsed > self.interval {
            return Some(SweepTrigger::Automatic);
        }

        None
    }
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL)
    }
}
