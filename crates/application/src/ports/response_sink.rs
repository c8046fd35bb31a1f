use async_trait::async_trait;
use std::net::SocketAddr;

/// Where serialized responses go, normally the listener's UDP socket.
#[async_trait]
pub trait ResponseSink: Send + Sync {
    async fn send(&self, peer: SocketAddr, payload: &[u8]) -> std::io::Result<()>;
}
