use super::factory::DnsFilterFactory;
use super::filter::DnsFilter;
use async_trait::async_trait;
use edge_dns_application::ports::ResponseSink;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::task::JoinSet;
use tracing::{error, info};

const RECV_BUF_SIZE: usize = 4096;

/// Sends responses back out of the worker's own socket.
pub struct UdpResponseSink {
    socket: Arc<UdpSocket>,
}

impl UdpResponseSink {
    pub fn new(socket: Arc<UdpSocket>) -> Self {
        Self { socket }
    }
}

#[async_trait]
impl ResponseSink for UdpResponseSink {
    async fn send(&self, peer: SocketAddr, payload: &[u8]) -> std::io::Result<()> {
        self.socket.send_to(payload, peer).await.map(|_| ())
    }
}

/// Runs `workers` listener tasks, each with its own SO_REUSEPORT socket
/// and its own filter instance. `workers == 0` means one per core.
pub async fn run_udp_workers(
    bind_addr: SocketAddr,
    workers: usize,
    factory: Arc<DnsFilterFactory>,
) -> std::io::Result<()> {
    let workers = if workers == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    } else {
        workers
    };

    info!(bind_address = %bind_addr, workers, "starting dns listener");

    let mut join_set: JoinSet<()> = JoinSet::new();
    for worker_id in 0..workers {
        let socket = Arc::new(create_udp_socket(bind_addr)?);
        let sink = Arc::new(UdpResponseSink::new(socket.clone()));
        let filter = Arc::new(factory.create(sink));
        join_set.spawn(run_worker(socket, filter, worker_id));
    }

    while join_set.join_next().await.is_some() {}
    Ok(())
}

/// Per-worker receive loop. Each datagram is handled on its own task so a
/// request stuck waiting on the external resolver never blocks the loop,
/// and local answers overtake it freely.
async fn run_worker(socket: Arc<UdpSocket>, filter: Arc<DnsFilter>, worker_id: usize) {
    let mut recv_buf = [0u8; RECV_BUF_SIZE];

    loop {
        let (n, peer) = match socket.recv_from(&mut recv_buf).await {
            Ok(x) => x,
            Err(e) => {
                error!(worker = worker_id, error = %e, "udp recv error");
                continue;
            }
        };

        let datagram = recv_buf[..n].to_vec();
        let filter = filter.clone();
        tokio::spawn(async move {
            filter.on_data(&datagram, peer).await;
        });
    }
}

fn create_udp_socket(bind_addr: SocketAddr) -> std::io::Result<UdpSocket> {
    let domain = if bind_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&bind_addr.into())?;

    UdpSocket::from_std(socket.into())
}
