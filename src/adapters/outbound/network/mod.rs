/// Network adapters: reachability probing and IPP status queries
mod ipp_client;
pub mod ipp_codec;
mod ping_prober;

pub use ipp_client::{
    resolve_endpoint, IppDeviceQueryClient, IppEndpoint, DEFAULT_ATTEMPT_TIMEOUT,
    DEFAULT_CANDIDATE_TEMPLATES, DEFAULT_QUERY_DEADLINE, HOST_PLACEHOLDER,
};
pub use ping_prober::{
    is_probeable_address, SystemPingProber, DEFAULT_PING_DEADLINE, DEFAULT_PING_TIMEOUT,
};
