use super::filter::DnsFilter;
use edge_dns_application::ports::{ClusterRegistry, ExternalResolver, ResponseSink};
use edge_dns_application::use_cases::ResolveQueryUseCase;
use edge_dns_domain::{ClientSettings, ConfigError, FilterConfig, ServerSettings};
use std::sync::Arc;

/// Stable registration name, kept for existing deployments.
pub const DNS_FILTER_NAME: &str = "envoy.listener.udp.dns";

/// Builds one filter per listener worker over a shared validated
/// configuration, cluster registry and recursive resolver.
pub struct DnsFilterFactory {
    config: Arc<FilterConfig>,
    registry: Arc<dyn ClusterRegistry>,
    resolver: Arc<dyn ExternalResolver>,
}

impl DnsFilterFactory {
    pub fn new(
        config: Arc<FilterConfig>,
        registry: Arc<dyn ClusterRegistry>,
        resolver: Arc<dyn ExternalResolver>,
    ) -> Self {
        Self {
            config,
            registry,
            resolver,
        }
    }

    /// Validates the raw settings and builds the factory in one step.
    pub fn from_settings(
        client: &ClientSettings,
        server: &ServerSettings,
        registry: Arc<dyn ClusterRegistry>,
        resolver: Arc<dyn ExternalResolver>,
    ) -> Result<Self, ConfigError> {
        let config = Arc::new(FilterConfig::new(client, server)?);
        Ok(Self::new(config, registry, resolver))
    }

    pub fn create(&self, sink: Arc<dyn ResponseSink>) -> DnsFilter {
        DnsFilter::new(ResolveQueryUseCase::new(
            self.config.clone(),
            self.registry.clone(),
            self.resolver.clone(),
            sink,
        ))
    }
}
