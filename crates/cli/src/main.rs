use clap::Parser;
use edge_dns_domain::CliOverrides;
use edge_dns_infrastructure::dns::factory::DnsFilterFactory;
use edge_dns_infrastructure::dns::listener::run_udp_workers;
use edge_dns_infrastructure::dns::system_resolver::SystemResolver;
use edge_dns_infrastructure::registry::InMemoryClusterRegistry;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod bootstrap;

#[derive(Parser)]
#[command(name = "edge-dns")]
#[command(version)]
#[command(about = "Authoritative DNS for proxy cluster inventory, with recursive fallback")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Listener port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Number of listener workers (0 = one per core)
    #[arg(long)]
    workers: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        workers: cli.workers,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting edge-dns v{}", env!("CARGO_PKG_VERSION"));

    let registry = Arc::new(InMemoryClusterRegistry::from_static(&config.clusters)?);
    info!(clusters = registry.len(), "cluster inventory loaded");

    let resolver = Arc::new(SystemResolver::from_system_conf()?);

    let factory = Arc::new(DnsFilterFactory::from_settings(
        &config.client_settings,
        &config.server_settings,
        registry,
        resolver,
    )?);

    let bind_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.port).parse()?;

    run_udp_workers(bind_addr, config.server.workers, factory).await?;
    Ok(())
}
