use super::wire::{read_u16, write_u16};
use crate::errors::ProtocolError;
use crate::rcode::ResponseCode;

/// Fixed size of the DNS header (RFC 1035 §4.1.1).
pub const HEADER_LEN: usize = 12;

const QR_BIT: u16 = 0x8000;
const OPCODE_MASK: u16 = 0x7800;
const AA_BIT: u16 = 0x0400;
const TC_BIT: u16 = 0x0200;
const RD_BIT: u16 = 0x0100;
const RA_BIT: u16 = 0x0080;
const Z_MASK: u16 = 0x0070;
const RCODE_MASK: u16 = 0x000F;

/// The fixed 12-byte DNS message header.
///
/// The id and the flags word are carried over from the request into the
/// response; mutation happens only through the setters below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    pub fn decode(packet: &[u8]) -> Result<Self, ProtocolError> {
        if packet.len() < HEADER_LEN {
            return Err(ProtocolError::UndersizedHeader(packet.len()));
        }

        Ok(Header {
            id: read_u16(packet, 0)?,
            flags: read_u16(packet, 2)?,
            qdcount: read_u16(packet, 4)?,
            ancount: read_u16(packet, 6)?,
            nscount: read_u16(packet, 8)?,
            arcount: read_u16(packet, 10)?,
        })
    }

    /// Enforces the shape this server accepts: a standard query carrying
    /// exactly one question and nothing else.
    pub fn validate_query(&self) -> Result<(), ProtocolError> {
        if self.is_response() {
            return Err(ProtocolError::NotAQuery);
        }
        if self.opcode() != 0 {
            return Err(ProtocolError::UnsupportedOpCode(self.opcode()));
        }
        if self.qdcount != 1 {
            return Err(ProtocolError::InvalidQuestionCount(self.qdcount));
        }
        for (section, count) in [
            ("answer", self.ancount),
            ("authority", self.nscount),
            ("additional", self.arcount),
        ] {
            if count != 0 {
                return Err(ProtocolError::UnexpectedRecords { section, count });
            }
        }
        Ok(())
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        write_u16(out, self.id);
        write_u16(out, self.flags);
        write_u16(out, self.qdcount);
        write_u16(out, self.ancount);
        write_u16(out, self.nscount);
        write_u16(out, self.arcount);
    }

    pub fn is_response(&self) -> bool {
        self.flags & QR_BIT != 0
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags & OPCODE_MASK) >> 11) as u8
    }

    pub fn aa(&self) -> bool {
        self.flags & AA_BIT != 0
    }

    pub fn tc(&self) -> bool {
        self.flags & TC_BIT != 0
    }

    pub fn rd(&self) -> bool {
        self.flags & RD_BIT != 0
    }

    pub fn ra(&self) -> bool {
        self.flags & RA_BIT != 0
    }

    pub fn z(&self) -> u8 {
        ((self.flags & Z_MASK) >> 4) as u8
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & RCODE_MASK) as u8
    }

    /// Stamps the response code. A message carrying an rcode is by
    /// definition a response, so the QR bit is set here as well.
    pub fn set_rcode(&mut self, rcode: ResponseCode) {
        self.flags = (self.flags & !RCODE_MASK) | rcode.to_u8() as u16 | QR_BIT;
    }

    pub fn set_aa(&mut self, value: bool) {
        self.set_flag(AA_BIT, value);
    }

    pub fn set_ra(&mut self, value: bool) {
        self.set_flag(RA_BIT, value);
    }

    /// Resets all three record counts; the question count is untouched.
    pub fn clear_record_counts(&mut self) {
        self.ancount = 0;
        self.nscount = 0;
        self.arcount = 0;
    }

    fn set_flag(&mut self, bit: u16, value: bool) {
        if value {
            self.flags |= bit;
        } else {
            self.flags &= !bit;
        }
    }
}
