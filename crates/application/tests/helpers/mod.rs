mod mock_ports;
mod wire;

pub use mock_ports::{CapturingSink, MockClusterRegistry, MockExternalResolver};
pub use wire::{ParsedRecord, ParsedResponse, Rdata};
