use thiserror::Error;

/// Wire-level failures raised while decoding a request or encoding a
/// response. Any of these on the decode path means the datagram is dropped
/// without an answer: the request identifier cannot be trusted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("packet of {0} bytes is shorter than the 12 byte DNS header")]
    UndersizedHeader(usize),

    #[error("message is a response; only queries are served")]
    NotAQuery,

    #[error("opcode {0} not supported; only standard queries are served")]
    UnsupportedOpCode(u8),

    #[error("question count {0} not supported; exactly one question is required")]
    InvalidQuestionCount(u16),

    #[error("{section} count {count} not supported in a request")]
    UnexpectedRecords { section: &'static str, count: u16 },

    #[error("packet truncated at offset {0}")]
    Truncated(usize),

    #[error("label at offset {0} uses a reserved label type")]
    ReservedLabelType(usize),

    #[error("label contains non-ASCII byte {0:#04x}")]
    NonAsciiLabel(u8),

    #[error("compression pointer at offset {offset} targets invalid offset {target}")]
    InvalidPointer { offset: usize, target: usize },

    #[error("compression pointer chain does not terminate")]
    UnterminatedPointerChain,

    #[error("domain name exceeds 255 bytes on the wire")]
    NameTooLong,

    #[error("label '{0}' exceeds 63 bytes")]
    LabelTooLong(String),

    #[error("empty label in domain name '{0}'")]
    EmptyLabel(String),
}

/// Failures from the recursive resolver port. The query routing layer maps
/// every variant to a SERVFAIL response.
#[derive(Error, Debug, Clone)]
pub enum ResolveError {
    #[error("upstream lookup for {name} failed: {reason}")]
    Upstream { name: String, reason: String },

    #[error("upstream lookup for {0} timed out")]
    Timeout(String),
}
