use async_trait::async_trait;

/// ConnectivityProber port for single-device reachability checks
///
/// # Contract
/// - A malformed or empty address is unreachable without any network call
/// - Exceeding the probe timeout is unreachable, not an error
/// - Transport failures are swallowed: this probe never fails
#[async_trait]
pub trait ConnectivityProber: Send + Sync {
    async fn is_reachable(&self, address: &str) -> bool;
}
