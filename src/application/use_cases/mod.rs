/// Use cases module containing application business logic orchestration
mod list_printers;
mod sweep_printers;

pub use list_printers::ListPrintersUseCase;
pub use sweep_printers::{SweepPrintersUseCase, DEFAULT_WORKER_CAP};
