use edge_dns_domain::{ClientSettings, Config, ConfigError, FilterConfig, ServerSettings};
use std::time::Duration;

fn parse(toml_str: &str) -> Config {
    toml::from_str(toml_str).expect("config should parse")
}

#[test]
fn test_full_config_parses() {
    let config = parse(
        r#"
        [server]
        bind_address = "127.0.0.1"
        port = 5353
        workers = 2

        [logging]
        level = "debug"

        [client_settings]
        recursive_query_timeout = 10

        [server_settings]
        ttl = 10
        known_domainname_suffixes = ["microsoft.com", "github.com"]

        [server_settings.dns_entries]
        "a.b.c.microsoft.com" = "cluster_0"
        "x.y.z.github.com" = "cluster_0"
        "_svc._tcp.a.b.microsoft.com" = "cluster_1"

        [clusters]
        cluster_0 = ["127.0.0.100:200"]
        cluster_1 = ["10.0.0.1:8080", "10.0.0.2:8080"]
        "#,
    );

    assert_eq!(config.server.port, 5353);
    assert_eq!(config.server.workers, 2);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.client_settings.recursive_query_timeout, 10);
    assert_eq!(config.server_settings.dns_entries.len(), 3);
    assert_eq!(config.clusters["cluster_1"].len(), 2);
    config.validate().unwrap();
}

#[test]
fn test_minimal_config_gets_defaults() {
    let config = parse(
        r#"
        [server_settings]
        known_domainname_suffixes = ["cluster.local"]
        "#,
    );

    assert_eq!(config.server.port, 53);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.client_settings.recursive_query_timeout, 5);
    assert_eq!(config.server_settings.ttl, 5);
    assert!(config.server_settings.dns_entries.is_empty());
    config.validate().unwrap();
}

#[test]
fn test_validate_rejects_missing_suffixes() {
    let config = parse(
        r#"
        [server]
        port = 53
        "#,
    );
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_filter_config_lowering() {
    let config = parse(
        r#"
        [client_settings]
        recursive_query_timeout = 3

        [server_settings]
        ttl = 30
        known_domainname_suffixes = ["microsoft.com"]

        [server_settings.dns_entries]
        "a.b.c.microsoft.com" = "cluster_0"
        "#,
    );

    let filter = FilterConfig::new(&config.client_settings, &config.server_settings).unwrap();
    assert_eq!(filter.recursive_query_timeout(), Duration::from_secs(3));
    assert_eq!(filter.ttl_secs(), 30);
    assert!(filter.is_known_domain("deep.a.b.c.microsoft.com"));
    assert!(!filter.is_known_domain("example.org"));
    assert_eq!(filter.lookup_cluster("a.b.c.microsoft.com"), Some("cluster_0"));
}

#[test]
fn test_filter_config_rejects_stray_entry() {
    let server = ServerSettings {
        known_domainname_suffixes: vec!["github.com".to_string()],
        dns_entries: [("a.b.c.gitlab.com".to_string(), "cluster_0".to_string())]
            .into_iter()
            .collect(),
        ..ServerSettings::default()
    };

    let result = FilterConfig::new(&ClientSettings::default(), &server);
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn test_duplicate_suffixes_are_ignored() {
    let server = ServerSettings {
        known_domainname_suffixes: vec![
            "github.com".to_string(),
            "GitHub.com".to_string(),
            "github.com".to_string(),
        ],
        ..ServerSettings::default()
    };

    let filter = FilterConfig::new(&ClientSettings::default(), &server).unwrap();
    assert!(filter.is_known_domain("api.github.com"));
}
