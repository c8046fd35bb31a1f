use async_trait::async_trait;
use edge_dns_domain::ResolveError;
use std::net::IpAddr;

/// Address family a recursive lookup is restricted to. An A question only
/// wants V4 results, an AAAA question only V6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpFamily {
    V4,
    V6,
}

impl IpFamily {
    pub fn matches(&self, addr: &IpAddr) -> bool {
        match self {
            IpFamily::V4 => addr.is_ipv4(),
            IpFamily::V6 => addr.is_ipv6(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IpFamily::V4 => "v4",
            IpFamily::V6 => "v6",
        }
    }
}

/// Recursive fallback for names outside the known suffixes, typically the
/// host's configured resolver. Implementations may return addresses of the
/// wrong family; the caller filters.
#[async_trait]
pub trait ExternalResolver: Send + Sync {
    async fn resolve(&self, name: &str, family: IpFamily) -> Result<Vec<IpAddr>, ResolveError>;
}
