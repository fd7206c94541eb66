//! Cluster endpoint parsing and seed node discovery.

use std::fmt;

use trydax_core::{ClientError, Service};
use url::{Host, Url};

/// Port of an unencrypted accelerator cluster.
pub const DEFAULT_PORT: u16 = 8111;
/// Port of an encrypted accelerator cluster.
pub const DEFAULT_TLS_PORT: u16 = 9111;

/// One node address of an accelerator cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterEndpoint {
    pub host: String,
    pub port: u16,
    pub tls: bool,
}

impl ClusterEndpoint {
    /// Parses `host[:port]` with an optional `dax://`, `daxs://`, `http://`
    /// or `https://` scheme. Entries without a scheme are read as `dax://`.
    pub fn parse(raw: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidEndpoint {
            endpoint: raw.to_string(),
            reason,
        };

        let url = if raw.contains("://") {
            Url::parse(raw)
        } else {
            Url::parse(&format!("dax://{raw}"))
        }
        .map_err(|e| invalid(e.to_string()))?;

        let (tls, port) = match url.scheme() {
            "dax" => (false, url.port().unwrap_or(DEFAULT_PORT)),
            "daxs" => (true, url.port().unwrap_or(DEFAULT_TLS_PORT)),
            "http" | "https" => (
                url.scheme() == "https",
                url.port_or_known_default().unwrap_or(DEFAULT_PORT),
            ),
            other => return Err(invalid(format!("unsupported scheme '{other}'"))),
        };

        if !matches!(url.path(), "" | "/") || url.query().is_some() {
            return Err(invalid("unexpected path after address".to_string()));
        }

        let host = match url.host() {
            Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_string(),
            Some(Host::Ipv4(ip)) => ip.to_string(),
            Some(Host::Ipv6(ip)) => ip.to_string(),
            _ => return Err(invalid("missing host".to_string())),
        };

        Ok(Self { host, port, tls })
    }

    /// URL the DynamoDB client is pointed at.
    pub fn url(&self) -> String {
        let scheme = if self.tls { "https" } else { "http" };
        format!("{scheme}://{self}")
    }
}

impl fmt::Display for ClusterEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Parses every endpoint, failing on the first malformed one.
pub fn parse_endpoints(endpoints: &[String]) -> Result<Vec<ClusterEndpoint>, ClientError> {
    if endpoints.is_empty() {
        return Err(ClientError::MissingEndpoint(Service::Cache));
    }
    endpoints
        .iter()
        .map(|raw| ClusterEndpoint::parse(raw))
        .collect()
}

/// Returns the first endpoint whose address resolves.
pub async fn discover(endpoints: &[String]) -> Result<ClusterEndpoint, ClientError> {
    let candidates = parse_endpoints(endpoints)?;

    for candidate in &candidates {
        match tokio::net::lookup_host((candidate.host.as_str(), candidate.port)).await {
            Ok(mut addrs) => {
                if let Some(addr) = addrs.next() {
                    tracing::debug!(endpoint = %candidate, %addr, "resolved cluster node");
                    return Ok(candidate.clone());
                }
                tracing::debug!(endpoint = %candidate, "no addresses for cluster node");
            }
            Err(err) => {
                tracing::debug!(
                    endpoint = %candidate,
                    error = %err,
                    "cluster node did not resolve"
                );
            }
        }
    }

    let tried: Vec<String> = candidates.iter().map(ToString::to_string).collect();
    Err(ClientError::Discovery(tried.join(", ")))
}
