/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with the network, the filesystem
/// and the terminal.
pub mod inbound;
pub mod outbound;
