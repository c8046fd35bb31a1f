use edge_dns_application::use_cases::ResolveQueryUseCase;
use edge_dns_domain::Message;
use std::net::SocketAddr;
use tracing::{debug, info};

/// Glue between a UDP listener and the resolution logic: decode the
/// datagram, hand the request over, and make sure undecodable input never
/// produces output.
pub struct DnsFilter {
    use_case: ResolveQueryUseCase,
}

impl DnsFilter {
    pub fn new(use_case: ResolveQueryUseCase) -> Self {
        Self { use_case }
    }

    pub async fn on_data(&self, datagram: &[u8], peer: SocketAddr) {
        debug!(bytes = datagram.len(), peer = %peer, "datagram received");

        match Message::decode_request(datagram) {
            Ok((request, consumed)) => {
                if consumed < datagram.len() {
                    debug!(
                        peer = %peer,
                        trailing = datagram.len() - consumed,
                        "ignoring trailing bytes after question"
                    );
                }
                info!(
                    domain = %request.question.name,
                    qtype = request.question.qtype,
                    peer = %peer,
                    "dns query received"
                );
                self.use_case.resolve(request, peer).await;
            }
            Err(error) => {
                // The id and question of a malformed packet cannot be
                // trusted, so there is nothing safe to respond with.
                info!(peer = %peer, error = %error, "dropping undecodable datagram");
            }
        }
    }
}
