use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Client-side settings: how the server behaves when it has to recurse.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientSettings {
    /// Seconds to wait for the external resolver before giving up.
    #[serde(default = "default_recursive_query_timeout")]
    pub recursive_query_timeout: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            recursive_query_timeout: default_recursive_query_timeout(),
        }
    }
}

/// Server-side settings: the zone of authority.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Seconds stamped as the TTL on every synthesized record.
    #[serde(default = "default_ttl")]
    pub ttl: u64,

    /// Domain-name suffixes this server answers authoritatively.
    #[serde(default)]
    pub known_domainname_suffixes: Vec<String>,

    /// Domain name to cluster name routing.
    #[serde(default)]
    pub dns_entries: BTreeMap<String, String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            ttl: default_ttl(),
            known_domainname_suffixes: Vec::new(),
            dns_entries: BTreeMap::new(),
        }
    }
}

fn default_recursive_query_timeout() -> u64 {
    5
}

fn default_ttl() -> u64 {
    5
}
