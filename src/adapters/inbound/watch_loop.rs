use crate::application::dto::{SweepRequest, SweepResponse};
use crate::application::session::MonitorSession;
use crate::ports::inbound::StatusSweepPort;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;
use chrono::Utc;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info};

/// How often the refresh policy is re-evaluated without user input
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

type SweepHandle = JoinHandle<Result<SweepResponse>>;

/// What a watch session did before it ended
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WatchSummary {
    pub sweeps: Vec<SweepResponse>,
    pub failed_sweeps: usize,
}

/// WatchLoop - interactive monitoring session on a terminal
///
/// Drives a [`MonitorSession`]: an initial sweep on start, a manual sweep for
/// every line read from `input` (the user pressing Enter), and automatic
/// sweeps whenever the refresh policy says so. Sweeps run as spawned tasks so
/// input keeps being read; a trigger arriving while one runs is dropped.
pub struct WatchLoop<R> {
    port: Arc<dyn StatusSweepPort>,
    session: MonitorSession,
    reporter: R,
    tick: Duration,
}

impl<R: ProgressReporter> WatchLoop<R> {
    pub fn new(port: Arc<dyn StatusSweepPort>, session: MonitorSession, reporter: R) -> Self {
        Self {
            port,
            session,
            reporter,
            tick: DEFAULT_TICK,
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Runs until `shutdown` resolves
    ///
    /// A sweep still running at shutdown is aborted; outcomes it already
    /// wrote back stay written.
    pub async fn run<I, S>(mut self, input: I, shutdown: S) -> WatchSummary
    where
        I: AsyncBufRead + Unpin,
        S: Future<Output = ()>,
    {
        let mut lines = input.lines();
        let mut input_open = true;
        let mut ticker = tokio::time::interval(self.tick);
        let mut summary = WatchSummary::default();
        tokio::pin!(shutdown);

        self.reporter.report(if self.session.auto_refresh() {
            "👀 Watching printers (auto-refresh on). Press Enter to check now, Ctrl+C to quit."
        } else {
            "👀 Watching printers. Press Enter to check now, Ctrl+C to quit."
        });

        // The initial sweep starts before any input is looked at
        let mut in_flight = self.poll(false);

        loop {
            let mut manual = false;

            tokio::select! {
                _ = &mut shutdown => break,
                _ = ticker.tick() => {}
                line = lines.next_line(), if input_open => match line {
                    Ok(Some(_)) => manual = true,
                    Ok(None) => input_open = false,
                    Err(e) => {
                        debug!(error = %e, "input closed");
                        input_open = false;
                    }
                },
                Some(joined) = wait_for(&mut in_flight) => {
                    in_flight = None;
                    self.session.complete_sweep(Utc::now());
                    self.record(joined, &mut summary);
                }
            }

            if manual && self.session.is_sweep_in_flight() {
                debug!("manual check requested while a sweep is running, ignoring it");
            }

            if let Some(handle) = self.poll(manual) {
                in_flight = Some(handle);
            }
        }

        if let Some(handle) = in_flight.take() {
            info!("stopping watch, interrupting the running sweep");
            handle.abort();
        }

        summary
    }

    fn poll(&mut self, manual: bool) -> Option<SweepHandle> {
        let trigger = self.session.poll(manual, Utc::now())?;
        debug!(%trigger, "starting sweep");
        let port = Arc::clone(&self.port);
        Some(tokio::spawn(async move {
            port.run_sweep(SweepRequest::new(trigger)).await
        }))
    }

    fn record(
        &self,
        joined: std::result::Result<Result<SweepResponse>, JoinError>,
        summary: &mut WatchSummary,
    ) {
        match joined {
            Ok(Ok(response)) => {
                debug!(
                    trigger = %response.trigger,
                    online = response.online,
                    total = response.total,
                    "sweep finished"
                );
                summary.sweeps.push(response);
            }
            Ok(Err(e)) => {
                error!(error = %e, "sweep failed");
                self.reporter.report_error(&format!("❌ Check failed: {}", e));
                summary.failed_sweeps += 1;
            }
            Err(e) => {
                error!(error = %e, "sweep task crashed");
                self.reporter.report_error("❌ Check failed unexpectedly");
                summary.failed_sweeps += 1;
            }
        }
    }
}

/// Resolves with the sweep result, or never when no sweep is running
async fn wait_for(
    handle: &mut Option<SweepHandle>,
) -> Option<std::result::Result<Result<SweepResponse>, JoinError>> {
    match handle {
        Some(handle) => Some(handle.await),
        None => std::future::pending().await,
    }
}
