//! printwatch - printer fleet status monitor
//!
//! This library checks every printer of an inventory concurrently (ICMP
//! reachability, then an IPP Get-Printer-Attributes query) and writes the
//! normalized supply levels, page counters and status back to the inventory,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`monitoring`): Device model, supply normalization, refresh policy
//! - **Application Layer** (`application`): Sweep and listing use cases, session state
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Ping, IPP, JSON inventory, terminal output
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use printwatch::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let inventory = JsonInventoryStore::new("printers.json");
//! let prober = SystemPingProber::default();
//! let query_client = IppDeviceQueryClient::new()?;
//!
//! // Create use case
//! let use_case = SweepPrintersUseCase::new(
//!     inventory,
//!     prober,
//!     query_client,
//!     StderrProgressReporter::new(),
//!     TracingAuditLog,
//! );
//!
//! // Execute
//! let response = use_case.execute(SweepRequest::new(SweepTrigger::Manual)).await?;
//! println!("{} of {} printers are online", response.online, response.total);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod monitoring;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::{WatchLoop, WatchSummary};
    pub use crate::adapters::outbound::console::{StderrProgressReporter, TracingAuditLog};
    pub use crate::adapters::outbound::filesystem::{JsonInventoryStore, JsonLinesAuditLog};
    pub use crate::adapters::outbound::formatters::DashboardFormatter;
    pub use crate::adapters::outbound::network::{IppDeviceQueryClient, SystemPingProber};
    pub use crate::application::dto::{PrinterFilter, SweepRequest, SweepResponse};
    pub use crate::application::session::MonitorSession;
    pub use crate::application::use_cases::{ListPrintersUseCase, SweepPrintersUseCase};
    pub use crate::monitoring::domain::{
        ConnectivityStatus, Device, DeviceDescription, DeviceId, Marker, Outcome, Snapshot,
        StatusReport, SupplyLevels,
    };
    pub use crate::monitoring::policies::{RefreshPolicy, SweepTrigger};
    pub use crate::monitoring::services::SupplyNormalizer;
    pub use crate::ports::inbound::StatusSweepPort;
    pub use crate::ports::outbound::{
        AuditEvent, AuditLog, ConnectivityProber, DeviceQueryClient, InventoryFormatter,
        InventoryStore, ProgressReporter,
    };
    pub use crate::shared::Result;
}
