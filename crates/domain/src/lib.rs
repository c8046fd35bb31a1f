pub mod codec;
pub mod config;
pub mod errors;
pub mod rcode;
pub mod record_type;

pub use codec::{Header, Message, Question, ResourceRecord, CLASS_IN, HEADER_LEN};
pub use config::{
    CliOverrides, ClientSettings, Config, ConfigError, FilterConfig, LoggingConfig, ServerConfig,
    ServerSettings,
};
pub use errors::{ProtocolError, ResolveError};
pub use rcode::ResponseCode;
pub use record_type::RecordType;
