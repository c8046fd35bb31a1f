mod cluster_registry;
mod external_resolver;
mod response_sink;

pub use cluster_registry::ClusterRegistry;
pub use external_resolver::{ExternalResolver, IpFamily};
pub use response_sink::ResponseSink;
