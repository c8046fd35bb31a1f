mod errors;
mod filter;
mod logging;
mod root;
mod server;
mod settings;

pub use errors::ConfigError;
pub use filter::FilterConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use settings::{ClientSettings, ServerSettings};
