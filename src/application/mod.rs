/// Application layer - Use cases, DTOs and session state
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod dto;
pub mod reconciliation;
pub mod session;
pub mod use_cases;
