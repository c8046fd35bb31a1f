use crate::ports::{ClusterRegistry, ExternalResolver, IpFamily, ResponseSink};
use edge_dns_domain::{FilterConfig, Message, RecordType, ResourceRecord, ResponseCode};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Drives one decoded request to exactly one response on the sink.
///
/// Routing: questions under a known suffix are answered authoritatively
/// from the domain map and the cluster inventory; A/AAAA questions outside
/// it fall back to the external resolver, bounded by the configured
/// recursive-query timeout. Nothing here returns a value to the caller;
/// completion is always a datagram handed to the sink.
pub struct ResolveQueryUseCase {
    config: Arc<FilterConfig>,
    registry: Arc<dyn ClusterRegistry>,
    resolver: Arc<dyn ExternalResolver>,
    sink: Arc<dyn ResponseSink>,
}

impl ResolveQueryUseCase {
    pub fn new(
        config: Arc<FilterConfig>,
        registry: Arc<dyn ClusterRegistry>,
        resolver: Arc<dyn ExternalResolver>,
        sink: Arc<dyn ResponseSink>,
    ) -> Self {
        Self {
            config,
            registry,
            resolver,
            sink,
        }
    }

    pub async fn resolve(&self, request: Message, peer: SocketAddr) {
        if !request.question.is_class_in() {
            debug!(qclass = request.question.qclass, "unsupported question class");
            self.send_failure(&request, peer, ResponseCode::NotImp, false)
                .await;
            return;
        }

        match request.question.record_type() {
            Some(RecordType::A) => self.resolve_address(request, peer, IpFamily::V4).await,
            Some(RecordType::AAAA) => self.resolve_address(request, peer, IpFamily::V6).await,
            Some(RecordType::SRV) => self.resolve_srv(request, peer).await,
            None => {
                debug!(qtype = request.question.qtype, "unsupported question type");
                self.send_failure(&request, peer, ResponseCode::NotImp, false)
                    .await;
            }
        }
    }

    async fn resolve_address(&self, request: Message, peer: SocketAddr, family: IpFamily) {
        let name = request.question.name.clone();

        if !self.config.is_known_domain(&name) {
            self.resolve_recursively(request, peer, family).await;
            return;
        }

        let Some(cluster) = self.config.lookup_cluster(&name) else {
            debug!(domain = %name, "known domain has no mapping");
            self.send_failure(&request, peer, ResponseCode::NxDomain, true)
                .await;
            return;
        };

        let Some(endpoints) = self.registry.endpoints(cluster) else {
            debug!(domain = %name, cluster = %cluster, "cluster not in inventory, could be transient");
            self.send_failure(&request, peer, ResponseCode::ServFail, true)
                .await;
            return;
        };

        let mut response = Message::response_to(&request);
        response.header.set_rcode(ResponseCode::NoError);
        response.header.set_aa(true);

        let ttl = self.config.ttl_secs();
        for endpoint in &endpoints {
            if family.matches(&endpoint.ip()) {
                response.add_answer(ResourceRecord::from_ip(
                    &request.question.name,
                    ttl,
                    endpoint.ip(),
                ));
            }
        }

        debug!(
            domain = %name,
            cluster = %cluster,
            family = family.as_str(),
            answers = response.answers.len(),
            "authoritative answer"
        );
        self.send(response, peer).await;
    }

    async fn resolve_recursively(&self, request: Message, peer: SocketAddr, family: IpFamily) {
        let name = request.question.name.clone();
        debug!(domain = %name, family = family.as_str(), "domain not known, querying external resolver");

        // The timeout drops the in-flight lookup; a late completion has
        // nothing left to deliver into.
        let lookup = tokio::time::timeout(
            self.config.recursive_query_timeout(),
            self.resolver.resolve(&name, family),
        )
        .await;

        match lookup {
            Ok(Ok(addresses)) if !addresses.is_empty() => {
                let mut response = Message::response_to(&request);
                response.header.set_rcode(ResponseCode::NoError);
                // Never authoritative here, whatever the client put in its
                // request flags.
                response.header.set_aa(false);

                let ttl = self.config.ttl_secs();
                for addr in addresses.into_iter().filter(|a| family.matches(a)) {
                    response.add_answer(ResourceRecord::from_ip(&name, ttl, addr));
                }

                debug!(domain = %name, answers = response.answers.len(), "recursive answer");
                self.send(response, peer).await;
            }
            Ok(Ok(_)) => {
                debug!(domain = %name, "external resolver returned no addresses");
                self.send_failure(&request, peer, ResponseCode::ServFail, false)
                    .await;
            }
            Ok(Err(error)) => {
                debug!(domain = %name, error = %error, "external resolution failed");
                self.send_failure(&request, peer, ResponseCode::ServFail, false)
                    .await;
            }
            Err(_) => {
                debug!(
                    domain = %name,
                    timeout = ?self.config.recursive_query_timeout(),
                    "external resolution timed out"
                );
                self.send_failure(&request, peer, ResponseCode::ServFail, false)
                    .await;
            }
        }
    }

    async fn resolve_srv(&self, request: Message, peer: SocketAddr) {
        let name = request.question.name.clone();

        // SRV is never recursed: outside the zone of authority the name
        // simply does not exist here.
        if !self.config.is_known_domain(&name) {
            debug!(domain = %name, "srv question outside known suffixes");
            self.send_failure(&request, peer, ResponseCode::NxDomain, false)
                .await;
            return;
        }

        let Some(cluster) = self.config.lookup_cluster(&name) else {
            debug!(domain = %name, "known domain has no mapping");
            self.send_failure(&request, peer, ResponseCode::NxDomain, true)
                .await;
            return;
        };

        let Some(endpoints) = self.registry.endpoints(cluster) else {
            debug!(domain = %name, cluster = %cluster, "cluster not in inventory, could be transient");
            self.send_failure(&request, peer, ResponseCode::ServFail, true)
                .await;
            return;
        };

        let ttl = self.config.ttl_secs();
        let mut response = Message::response_to(&request);
        response.header.set_aa(true);

        if let Some(first) = endpoints.first() {
            let port = first.port();
            if endpoints.iter().any(|e| e.port() != port) {
                // One SRV record describes the whole service; a cluster
                // whose endpoints disagree on the port cannot be described
                // by it.
                warn!(
                    domain = %name,
                    cluster = %cluster,
                    "cluster endpoints listen on different ports, cannot answer srv"
                );
                self.send_failure(&request, peer, ResponseCode::ServFail, true)
                    .await;
                return;
            }

            response.header.set_rcode(ResponseCode::NoError);
            response.add_answer(ResourceRecord::srv(
                &request.question.name,
                ttl,
                port,
                &request.question.name,
            ));
            for endpoint in &endpoints {
                response.add_additional(ResourceRecord::from_ip(
                    &request.question.name,
                    ttl,
                    endpoint.ip(),
                ));
            }
        } else {
            response.header.set_rcode(ResponseCode::NoError);
        }

        debug!(
            domain = %name,
            cluster = %cluster,
            additionals = response.additionals.len(),
            "authoritative srv answer"
        );
        self.send(response, peer).await;
    }

    async fn send_failure(
        &self,
        request: &Message,
        peer: SocketAddr,
        rcode: ResponseCode,
        authoritative: bool,
    ) {
        debug!(peer = %peer, rcode = %rcode, "answering with failure rcode");
        let mut response = Message::response_to(request);
        response.header.set_rcode(rcode);
        response.header.set_aa(authoritative);
        self.send(response, peer).await;
    }

    async fn send(&self, response: Message, peer: SocketAddr) {
        match response.encode() {
            Ok(payload) => {
                if let Err(error) = self.sink.send(peer, &payload).await {
                    warn!(peer = %peer, error = %error, "failed to send response");
                }
            }
            Err(error) => {
                warn!(peer = %peer, error = %error, "failed to encode response, dropping it");
            }
        }
    }
}
