/// Printer monitoring domain layer
///
/// Pure data model and business rules for printer status sweeps. Nothing in
/// this module performs I/O; the network and storage live behind ports.
pub mod domain;
pub mod policies;
pub mod services;
