use super::errors::ConfigError;
use super::settings::{ClientSettings, ServerSettings};
use rustc_hash::FxHashMap;
use std::time::Duration;

/// Validated, immutable view of the filter settings. Built once at startup
/// and shared read-only by every filter instance.
#[derive(Debug)]
pub struct FilterConfig {
    recursive_query_timeout: Duration,
    ttl: Duration,
    known_suffixes: Vec<String>,
    dns_map: FxHashMap<String, String>,
}

impl FilterConfig {
    /// Validates and lowers the raw settings.
    ///
    /// The suffix set must be non-empty and every `dns_entries` key must
    /// match one of the suffixes. Duplicate suffixes are ignored; a
    /// duplicate entry key takes the latest value.
    pub fn new(client: &ClientSettings, server: &ServerSettings) -> Result<Self, ConfigError> {
        if server.known_domainname_suffixes.is_empty() {
            return Err(ConfigError::Validation(
                "known_domainname_suffixes must not be empty".to_string(),
            ));
        }

        let mut known_suffixes: Vec<String> = Vec::new();
        for suffix in &server.known_domainname_suffixes {
            let suffix = suffix.to_lowercase();
            if !known_suffixes.contains(&suffix) {
                known_suffixes.push(suffix);
            }
        }

        let mut dns_map =
            FxHashMap::with_capacity_and_hasher(server.dns_entries.len(), Default::default());
        for (name, cluster) in &server.dns_entries {
            let name = name.to_lowercase();
            if !known_suffixes.iter().any(|s| is_suffix(&name, s)) {
                return Err(ConfigError::Validation(format!(
                    "dns entry '{}' does not belong to any known domain name suffix",
                    name
                )));
            }
            dns_map.insert(name, cluster.clone());
        }

        Ok(Self {
            recursive_query_timeout: Duration::from_secs(client.recursive_query_timeout),
            ttl: Duration::from_secs(server.ttl),
            known_suffixes,
            dns_map,
        })
    }

    pub fn recursive_query_timeout(&self) -> Duration {
        self.recursive_query_timeout
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The configured TTL in whole seconds, as stamped on records.
    pub fn ttl_secs(&self) -> u32 {
        self.ttl.as_secs().min(u32::MAX as u64) as u32
    }

    /// True when some known suffix is a suffix of `name`.
    pub fn is_known_domain(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.known_suffixes.iter().any(|s| is_suffix(&name, s))
    }

    pub fn lookup_cluster(&self, name: &str) -> Option<&str> {
        self.dns_map.get(&name.to_lowercase()).map(String::as_str)
    }
}

fn is_suffix(input: &str, suffix: &str) -> bool {
    input.len() >= suffix.len() && input.ends_with(suffix)
}
