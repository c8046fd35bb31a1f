//! Strict RFC 1035 codec: a decoder that only accepts the request shape
//! this server serves, and an encoder that writes responses without name
//! compression.

mod header;
mod message;
mod question;
mod record;
mod wire;

pub use header::{Header, HEADER_LEN};
pub use message::Message;
pub use question::{Question, CLASS_IN};
pub use record::ResourceRecord;
pub use wire::{read_name, write_name, MAX_LABEL_LEN, MAX_NAME_WIRE_LEN};
