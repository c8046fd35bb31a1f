#![allow(dead_code)]

use async_trait::async_trait;
use edge_dns_application::ports::{ExternalResolver, IpFamily, ResponseSink};
use edge_dns_domain::ResolveError;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Sink that records every outbound datagram.
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
}

#[async_trait]
impl ResponseSink for CapturingSink {
    async fn send(&self, peer: SocketAddr, payload: &[u8]) -> std::io::Result<()> {
        self.sent.write().await.push((peer, payload.to_vec()));
        Ok(())
    }
}

/// Resolver that fails every lookup; fine for tests that never leave the
/// authoritative path.
pub struct FailingResolver;

#[async_trait]
impl ExternalResolver for FailingResolver {
    async fn resolve(&self, name: &str, _family: IpFamily) -> Result<Vec<IpAddr>, ResolveError> {
        Err(ResolveError::Upstream {
            name: name.to_string(),
            reason: "unreachable in this test".to_string(),
        })
    }
}
