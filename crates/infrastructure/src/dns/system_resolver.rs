use async_trait::async_trait;
use edge_dns_application::ports::{ExternalResolver, IpFamily};
use edge_dns_domain::ResolveError;
use hickory_resolver::error::{ResolveError as HickoryError, ResolveErrorKind};
use hickory_resolver::TokioAsyncResolver;
use std::net::IpAddr;
use tracing::debug;

/// Recursive resolver backed by the host's configured name servers
/// (/etc/resolv.conf on Unix).
pub struct SystemResolver {
    inner: TokioAsyncResolver,
}

impl SystemResolver {
    pub fn from_system_conf() -> Result<Self, HickoryError> {
        Ok(Self {
            inner: TokioAsyncResolver::tokio_from_system_conf()?,
        })
    }
}

#[async_trait]
impl ExternalResolver for SystemResolver {
    async fn resolve(&self, name: &str, family: IpFamily) -> Result<Vec<IpAddr>, ResolveError> {
        let result: Result<Vec<IpAddr>, HickoryError> = match family {
            IpFamily::V4 => self
                .inner
                .ipv4_lookup(name)
                .await
                .map(|lookup| lookup.iter().map(|a| IpAddr::V4(a.0)).collect()),
            IpFamily::V6 => self
                .inner
                .ipv6_lookup(name)
                .await
                .map(|lookup| lookup.iter().map(|aaaa| IpAddr::V6(aaaa.0)).collect()),
        };

        match result {
            Ok(addresses) => {
                debug!(domain = %name, family = family.as_str(), results = addresses.len(), "system lookup done");
                Ok(addresses)
            }
            // A name with no records of this type is an answer, not a
            // failure of the upstream.
            Err(e) if matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) => Ok(Vec::new()),
            Err(e) if matches!(e.kind(), ResolveErrorKind::Timeout) => {
                Err(ResolveError::Timeout(name.to_string()))
            }
            Err(e) => Err(ResolveError::Upstream {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
