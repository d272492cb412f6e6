use super::ipp_codec::{decode_response, encode_get_printer_attributes};
use crate::monitoring::domain::DeviceDescription;
use crate::ports::outbound::DeviceQueryClient;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Placeholder replaced by the device address in candidate templates
pub const HOST_PLACEHOLDER: &str = "{host}";

/// Endpoints tried, in order, when no candidates are configured
pub const DEFAULT_CANDIDATE_TEMPLATES: [&str; 6] = [
    "{host}",
    "ipp://{host}",
    "ipp://{host}:631",
    "ipp://{host}/ipp/print",
    "ipp://{host}/ipp",
    "ipps://{host}/ipp/print",
];

pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_QUERY_DEADLINE: Duration = Duration::from_secs(20);

const IPP_DEFAULT_PORT: u16 = 631;
const BARE_ADDRESS_PATH: &str = "/ipp/print";

/// One resolved query endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IppEndpoint {
    /// Value of the `printer-uri` operation attribute
    pub printer_uri: String,
    /// HTTP(S) URL the request is POSTed to
    pub http_url: Url,
}

/// IppDeviceQueryClient adapter querying printers over IPP
///
/// Implements the DeviceQueryClient port. Candidate endpoints are tried in
/// order; the first one that answers with a decodable, successful response
/// wins. Each attempt is bounded by `attempt_timeout` and the whole query by
/// the optional `deadline`.
///
/// # Security
/// Printers commonly serve IPPS with self-signed certificates, so the
/// underlying HTTP client accepts invalid certificates. Only printer status
/// is read over these connections.
pub struct IppDeviceQueryClient {
    client: reqwest::Client,
    templates: Vec<String>,
    attempt_timeout: Duration,
    deadline: Option<Duration>,
    request_id: AtomicU32,
}

impl IppDeviceQueryClient {
    /// Creates a client with the default candidates and timeouts
    pub fn new() -> Result<Self> {
        Self::with_settings(
            DEFAULT_CANDIDATE_TEMPLATES.iter().map(|t| t.to_string()).collect(),
            DEFAULT_ATTEMPT_TIMEOUT,
            Some(DEFAULT_QUERY_DEADLINE),
        )
    }

    /// Creates a client with explicit candidate templates and timeouts
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn with_settings(
        templates: Vec<String>,
        attempt_timeout: Duration,
        deadline: Option<Duration>,
    ) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("printwatch/{}", version);
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self {
            client,
            templates,
            attempt_timeout,
            deadline,
            request_id: AtomicU32::new(1),
        })
    }

    /// Expands the templates for `address` into distinct endpoints
    ///
    /// Templates that do not resolve to a supported URL are skipped; endpoints
    /// that resolve to the same HTTP URL are only tried once.
    pub fn candidate_endpoints(&self, address: &str) -> Vec<IppEndpoint> {
        let mut seen = HashSet::new();
        self.templates
            .iter()
            .map(|template| template.replace(HOST_PLACEHOLDER, address))
            .filter_map(|candidate| resolve_endpoint(&candidate))
            .filter(|endpoint| seen.insert(endpoint.http_url.to_string()))
            .collect()
    }

    async fn try_candidates(&self, address: &str) -> Option<DeviceDescription> {
        for endpoint in self.candidate_endpoints(address) {
            match tokio::time::timeout(self.attempt_timeout, self.attempt(&endpoint)).await {
                Ok(Ok(description)) => {
                    debug!(
                        address,
                        endpoint = %endpoint.http_url,
                        markers = description.markers.len(),
                        "IPP query answered"
                    );
                    return Some(description);
                }
                Ok(Err(e)) => {
                    debug!(
                        address,
                        endpoint = %endpoint.http_url,
                        error = %e,
                        "IPP attempt failed"
                    );
                }
                Err(_) => {
                    debug!(address, endpoint = %endpoint.http_url, "IPP attempt timed out");
                }
            }
        }
        None
    }

    async fn attempt(&self, endpoint: &IppEndpoint) -> Result<DeviceDescription> {
        let request_id = self.request_id.fetch_add(1, Ordering::Relaxed);
        let body = encode_get_printer_attributes(&endpoint.printer_uri, request_id);

        let response = self
            .client
            .post(endpoint.http_url.clone())
            .header(CONTENT_TYPE, "application/ipp")
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("printer returned HTTP status {}", response.status());
        }

        let bytes = response.bytes().await?;
        let attributes = decode_response(&bytes)?;
        Ok(attributes.into_description())
    }
}

#[async_trait]
impl DeviceQueryClient for IppDeviceQueryClient {
    async fn query(&self, address: &str) -> Option<DeviceDescription> {
        let address = address.trim();
        if address.is_empty() {
            return None;
        }

        match self.deadline {
            Some(deadline) => {
                match tokio::time::timeout(deadline, self.try_candidates(address)).await {
                    Ok(result) => result,
                    Err(_) => {
                        debug!(
                            address,
                            deadline_ms = deadline.as_millis() as u64,
                            "IPP query deadline reached"
                        );
                        None
                    }
                }
            }
            None => self.try_candidates(address).await,
        }
    }
}

/// Resolves one candidate into a printer URI and the HTTP URL carrying it
///
/// A candidate without a scheme is a bare address and maps to
/// `ipp://{address}:631/ipp/print`. `ipp` travels over `http`, `ipps` over
/// `https`, and the port defaults to 631 for both.
pub fn resolve_endpoint(candidate: &str) -> Option<IppEndpoint> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }

    let (url, bare) = if candidate.contains("://") {
        (Url::parse(candidate).ok()?, false)
    } else {
        (Url::parse(&format!("ipp://{}", candidate)).ok()?, true)
    };

    let (ipp_scheme, http_scheme) = match url.scheme() {
        "ipp" | "http" => ("ipp", "http"),
        "ipps" | "https" => ("ipps", "https"),
        _ => return None,
    };

    let host = url.host_str().filter(|h| !h.is_empty())?;
    let port = match url.scheme() {
        "http" | "https" => url.port_or_known_default()?,
        _ => url.port().unwrap_or(IPP_DEFAULT_PORT),
    };

    let path = match url.path() {
        "" | "/" if bare => BARE_ADDRESS_PATH,
        "" => "/",
        p => p,
    };

    let query = url.query().map(|q| format!("?{}", q)).unwrap_or_default();
    let printer_uri = format!("{}://{}:{}{}{}", ipp_scheme, host, port, path, query);
    let http_url = Url::parse(&format!(
        "{}://{}:{}{}{}",
        http_scheme, host, port, path, query
    ))
    .ok()?;

    Some(IppEndpoint {
        printer_uri,
        http_url,
    })
}
