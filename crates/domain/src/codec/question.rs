use super::wire::{read_name, read_u16, write_name, write_u16};
use crate::errors::ProtocolError;
use crate::record_type::RecordType;

/// Question class for the Internet (RFC 1035 §3.2.4).
pub const CLASS_IN: u16 = 1;

/// A single DNS question.
///
/// `qtype` and `qclass` are kept as raw wire values: a syntactically legal
/// question with an unsupported type or class still has to be answered
/// (with NOTIMP) rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    /// Decodes one question starting at `offset`. Returns the question and
    /// the number of bytes it occupies there.
    pub fn decode(packet: &[u8], offset: usize) -> Result<(Self, usize), ProtocolError> {
        let (name, name_len) = read_name(packet, offset)?;
        let qtype = read_u16(packet, offset + name_len)?;
        let qclass = read_u16(packet, offset + name_len + 2)?;

        Ok((Question { name, qtype, qclass }, name_len + 4))
    }

    pub fn encode(&self, out: &mut Vec<u8>) -> Result<(), ProtocolError> {
        write_name(&self.name, out)?;
        write_u16(out, self.qtype);
        write_u16(out, self.qclass);
        Ok(())
    }

    /// The question's record type, if it is one this server answers.
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }

    pub fn is_class_in(&self) -> bool {
        self.qclass == CLASS_IN
    }
}
