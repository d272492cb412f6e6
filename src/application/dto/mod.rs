/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod printer_filter;
mod sweep_request;
mod sweep_response;

pub use printer_filter::PrinterFilter;
pub use sweep_request::SweepRequest;
pub use sweep_response::SweepResponse;
