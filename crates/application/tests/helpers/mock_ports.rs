#![allow(dead_code)]

use async_trait::async_trait;
use dashmap::DashMap;
use edge_dns_application::ports::{ClusterRegistry, ExternalResolver, IpFamily, ResponseSink};
use edge_dns_domain::ResolveError;
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock ExternalResolver
// ============================================================================

#[derive(Clone, Default)]
pub struct MockExternalResolver {
    responses: Arc<RwLock<HashMap<String, Result<Vec<IpAddr>, ResolveError>>>>,
    delay: Arc<RwLock<Option<Duration>>>,
}

impl MockExternalResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(&self, domain: &str, addresses: Vec<IpAddr>) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), Ok(addresses));
    }

    pub async fn set_error(&self, domain: &str, error: ResolveError) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), Err(error));
    }

    /// Delays every lookup, for driving the caller into its timeout.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }
}

#[async_trait]
impl ExternalResolver for MockExternalResolver {
    async fn resolve(&self, name: &str, _family: IpFamily) -> Result<Vec<IpAddr>, ResolveError> {
        if let Some(delay) = *self.delay.read().await {
            tokio::time::sleep(delay).await;
        }

        match self.responses.read().await.get(name) {
            Some(result) => result.clone(),
            None => Err(ResolveError::Upstream {
                name: name.to_string(),
                reason: "no mock response configured".to_string(),
            }),
        }
    }
}

// ============================================================================
// Mock ClusterRegistry
// ============================================================================

#[derive(Default)]
pub struct MockClusterRegistry {
    clusters: DashMap<String, Vec<SocketAddr>>,
}

impl MockClusterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, cluster: &str, endpoints: &[&str]) {
        let endpoints = endpoints
            .iter()
            .map(|e| e.parse().expect("endpoint should parse"))
            .collect();
        self.clusters.insert(cluster.to_string(), endpoints);
    }
}

impl ClusterRegistry for MockClusterRegistry {
    fn endpoints(&self, cluster: &str) -> Option<Vec<SocketAddr>> {
        self.clusters.get(cluster).map(|entry| entry.value().clone())
    }
}

// ============================================================================
// Capturing ResponseSink
// ============================================================================

#[derive(Clone, Default)]
pub struct CapturingSink {
    sent: Arc<RwLock<Vec<(SocketAddr, Vec<u8>)>>>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<(SocketAddr, Vec<u8>)> {
        self.sent.read().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.read().await.len()
    }
}

#[async_trait]
impl ResponseSink for CapturingSink {
    async fn send(&self, peer: SocketAddr, payload: &[u8]) -> std::io::Result<()> {
        self.sent.write().await.push((peer, payload.to_vec()));
        Ok(())
    }
}
