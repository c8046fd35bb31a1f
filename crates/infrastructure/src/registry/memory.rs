use dashmap::DashMap;
use edge_dns_application::ports::ClusterRegistry;
use edge_dns_domain::ConfigError;
use std::collections::BTreeMap;
use std::net::SocketAddr;
use tracing::debug;

/// Concurrent cluster inventory. Lookups take a snapshot of the endpoint
/// list, so a cluster update never shears a resolution in progress.
#[derive(Default)]
pub struct InMemoryClusterRegistry {
    clusters: DashMap<String, Vec<SocketAddr>>,
}

impl InMemoryClusterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the registry from the static `clusters` config table.
    pub fn from_static(clusters: &BTreeMap<String, Vec<String>>) -> Result<Self, ConfigError> {
        let registry = Self::new();
        for (name, endpoints) in clusters {
            let endpoints = endpoints
                .iter()
                .map(|e| {
                    e.parse::<SocketAddr>().map_err(|_| {
                        ConfigError::Validation(format!(
                            "cluster '{}' endpoint '{}' is not an ip:port address",
                            name, e
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            registry.upsert(name.clone(), endpoints);
        }
        Ok(registry)
    }

    /// Inserts or replaces a cluster's endpoint set.
    pub fn upsert(&self, cluster: impl Into<String>, endpoints: Vec<SocketAddr>) {
        let cluster = cluster.into();
        debug!(cluster = %cluster, endpoints = endpoints.len(), "cluster updated");
        self.clusters.insert(cluster, endpoints);
    }

    /// Removes a cluster from the inventory entirely.
    pub fn remove(&self, cluster: &str) -> bool {
        self.clusters.remove(cluster).is_some()
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

impl ClusterRegistry for InMemoryClusterRegistry {
    fn endpoints(&self, cluster: &str) -> Option<Vec<SocketAddr>> {
        self.clusters.get(cluster).map(|entry| entry.value().clone())
    }
}
