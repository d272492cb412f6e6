use crate::application::dto::{SweepRequest, SweepResponse};
use crate::application::reconciliation::ReconciliationWriter;
use crate::monitoring::domain::{Device, DeviceId, Outcome};
use crate::monitoring::policies::SweepTrigger;
use crate::monitoring::services::SupplyNormalizer;
use crate::ports::inbound::StatusSweepPort;
use crate::ports::outbound::{
    AuditEvent, AuditLog, ConnectivityProber, DeviceQueryClient, InventoryStore, ProgressReporter,
};
use crate::shared::Result;
use async_trait::async_trait;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinError;
use tracing::{error, info, warn};

/// Device id, device name and how its unit of work ended
type UnitResult = (DeviceId, String, std::result::Result<Outcome, JoinError>);

/// Default ceiling on devices checked at the same time
pub const DEFAULT_WORKER_CAP: usize = 50;

/// Audit action recorded after every completed sweep
const SWEEP_ACTION: &str = "PRINTER_SWEEP";

/// SweepPrintersUseCase - Concurrent fan-out over the whole printer inventory
///
/// Each device is one unit of work: reachability probe first, protocol query
/// only if the probe succeeded. Units run as independent tasks, at most
/// `worker_cap` at a time, and every outcome is written back as soon as its
/// unit resolves, in completion order.
///
/// # Type Parameters
/// * `IS` - InventoryStore implementation
/// * `CP` - ConnectivityProber implementation
/// * `DQ` - DeviceQueryClient implementation
/// * `PR` - ProgressReporter implementation
/// * `AL` - AuditLog implementation
pub struct SweepPrintersUseCase<IS, CP, DQ, PR, AL> {
    inventory: Arc<IS>,
    prober: Arc<CP>,
    query_client: Arc<DQ>,
    progress_reporter: PR,
    audit_log: AL,
    writer: ReconciliationWriter<IS>,
    worker_cap: usize,
}

impl<IS, CP, DQ, PR, AL> SweepPrintersUseCase<IS, CP, DQ, PR, AL>
where
    IS: InventoryStore + 'static,
    CP: ConnectivityProber + 'static,
    DQ: DeviceQueryClient + 'static,
    PR: ProgressReporter,
    AL: AuditLog,
{
    /// Creates a new SweepPrintersUseCase with injected dependencies
    pub fn new(
        inventory: IS,
        prober: CP,
        query_client: DQ,
        progress_reporter: PR,
        audit_log: AL,
    ) -> Self {
        let inventory = Arc::new(inventory);
        Self {
            writer: ReconciliationWriter::new(Arc::clone(&inventory)),
            inventory,
            prober: Arc::new(prober),
            query_client: Arc::new(query_client),
            progress_reporter,
            audit_log,
            worker_cap: DEFAULT_WORKER_CAP,
        }
    }

    /// Sets the maximum number of devices checked concurrently
    pub fn with_worker_cap(mut self, worker_cap: usize) -> Self {
        self.worker_cap = worker_cap.max(1);
        self
    }

    pub fn worker_cap(&self) -> usize {
        self.worker_cap
    }

    /// Executes one sweep
    ///
    /// # Returns
    /// Aggregate counts; `(0, 0)` without any dispatch for an empty inventory
    ///
    /// # Errors
    /// Returns an error only if the inventory cannot be read
    pub async fn execute(&self, request: SweepRequest) -> Result<SweepResponse> {
        let started = Instant::now();
        let devices = self.inventory.list_devices().await?;
        let total = devices.len();

        if total == 0 {
            info!(trigger = %request.trigger, "inventory is empty, nothing to check");
            let response = SweepResponse::empty(request.trigger);
            self.finish(&request, &response);
            return Ok(response);
        }

        info!(
            trigger = %request.trigger,
            devices = total,
            worker_cap = self.worker_cap,
            "starting printer status sweep"
        );

        let mut progress_enabled = request.show_progress;
        if progress_enabled {
            progress_enabled = self.update_progress(0, total, "Starting check...");
        }

        let mut units = stream::iter(devices)
            .map(|device| self.dispatch(device))
            .buffer_unordered(self.worker_cap);

        let mut completed = 0;
        let mut online = 0;
        let mut excluded = 0;
        let mut persist_failures = 0;

        while let Some((device_id, device_name, joined)) = units.next().await {
            completed += 1;

            match joined {
                Ok(outcome) => {
                    if outcome.is_online() {
                        online += 1;
                    }
                    if !self.writer.persist(&outcome).await {
                        persist_failures += 1;
                    }
                }
                Err(e) => {
                    // The device keeps its previous stored snapshot
                    error!(
                        device_id = %device_id,
                        device = %device_name,
                        error = %e,
                        "printer check crashed, excluding it from this sweep"
                    );
                    excluded += 1;
                }
            }

            if progress_enabled {
                let label = format!("Checking {} of {} printers...", completed, total);
                progress_enabled = self.update_progress(completed, total, &label);
            }
        }

        let response = SweepResponse {
            trigger: request.trigger,
            online,
            total,
            excluded,
            persist_failures,
            elapsed: started.elapsed(),
        };

        self.finish(&request, &response);
        Ok(response)
    }

    /// Spawns the unit of work for one device
    ///
    /// The spawn happens on first poll, so `buffer_unordered` keeps the number
    /// of live units within the worker cap. A panic inside the unit comes
    /// back as a `JoinError` instead of tearing down the sweep.
    fn dispatch(
        &self,
        device: Device,
    ) -> impl std::future::Future<Output = UnitResult> {
        let prober = Arc::clone(&self.prober);
        let query_client = Arc::clone(&self.query_client);
        let device_id = device.id;
        let device_name = device.name.clone();

        async move {
            let joined = tokio::spawn(check_device(prober, query_client, device)).await;
            (device_id, device_name, joined)
        }
    }

    /// Best-effort progress update; returns whether further updates should be sent
    fn update_progress(&self, current: usize, total: usize, label: &str) -> bool {
        match self
            .progress_reporter
            .report_progress(current, total, Some(label))
        {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "progress display unavailable, continuing without it");
                false
            }
        }
    }

    fn finish(&self, request: &SweepRequest, response: &SweepResponse) {
        info!(
            trigger = %request.trigger,
            online = response.online,
            total = response.total,
            excluded = response.excluded,
            persist_failures = response.persist_failures,
            elapsed_ms = response.elapsed.as_millis() as u64,
            "printer status sweep finished"
        );

        if request.show_progress {
            let message = if request.trigger == SweepTrigger::Manual {
                format!(
                    "✅ Check complete! {} of {} printers are online.",
                    response.online, response.total
                )
            } else {
                format!(
                    "✅ {} of {} printers are online.",
                    response.online, response.total
                )
            };
            self.progress_reporter.report_completion(&message);
        }

        self.audit_log.record(AuditEvent::new(
            SWEEP_ACTION,
            format!(
                "{} sweep: {} of {} printers online ({} excluded, {} not persisted)",
                request.trigger,
                response.online,
                response.total,
                response.excluded,
                response.persist_failures
            ),
        ));
    }
}

/// Unit of work for one device: probe, then query only if reachable
async fn check_device<CP, DQ>(prober: Arc<CP>, query_client: Arc<DQ>, device: Device) -> Outcome
where
    CP: ConnectivityProber + ?Sized,
    DQ: DeviceQueryClient + ?Sized,
{
    let address = device.ip_address.trim();

    if !prober.is_reachable(address).await {
        return Outcome::unreachable(device.id, Utc::now());
    }

    match query_client.query(address).await {
        Some(description) => {
            let report = SupplyNormalizer::normalize(&description);
            Outcome::reported(device.id, report, Utc::now())
        }
        None => Outcome::unmanageable(&device, Utc::now()),
    }
}

#[async_trait]
impl<IS, CP, DQ, PR, AL> StatusSweepPort for SweepPrintersUseCase<IS, CP, DQ, PR, AL>
where
    IS: InventoryStore + 'static,
    CP: ConnectivityProber + 'static,
    DQ: DeviceQueryClient + 'static,
    PR: ProgressReporter,
    AL: AuditLog,
{
    async fn run_sweep(&self, request: SweepRequest) -> Result<SweepResponse> {
        self.execute(request).await
    }
}
