use super::question::CLASS_IN;
use super::wire::{write_name, write_u16, write_u32};
use crate::errors::ProtocolError;
use crate::record_type::RecordType;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// A resource record this server synthesizes. Each variant owns its name
/// outright; nothing is shared with the request it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRecord {
    A {
        name: String,
        ttl: u32,
        addr: Ipv4Addr,
    },
    Aaaa {
        name: String,
        ttl: u32,
        addr: Ipv6Addr,
    },
    Srv {
        name: String,
        ttl: u32,
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
}

impl ResourceRecord {
    pub fn a(name: impl Into<String>, ttl: u32, addr: Ipv4Addr) -> Self {
        ResourceRecord::A {
            name: name.into(),
            ttl,
            addr,
        }
    }

    pub fn aaaa(name: impl Into<String>, ttl: u32, addr: Ipv6Addr) -> Self {
        ResourceRecord::Aaaa {
            name: name.into(),
            ttl,
            addr,
        }
    }

    /// Builds an address record matching the family of `addr`.
    pub fn from_ip(name: &str, ttl: u32, addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => ResourceRecord::a(name, ttl, v4),
            IpAddr::V6(v6) => ResourceRecord::aaaa(name, ttl, v6),
        }
    }

    /// An SRV record with the fixed zero priority and weight this server
    /// hands out: endpoint selection is the proxy's job, not the client's.
    pub fn srv(name: impl Into<String>, ttl: u32, port: u16, target: impl Into<String>) -> Self {
        ResourceRecord::Srv {
            name: name.into(),
            ttl,
            priority: 0,
            weight: 0,
            port,
            target: target.into(),
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            ResourceRecord::A { .. } => RecordType::A,
            ResourceRecord::Aaaa { .. } => RecordType::AAAA,
            ResourceRecord::Srv { .. } => RecordType::SRV,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ResourceRecord::A { name, .. }
            | ResourceRecord::Aaaa { name, .. }
            | ResourceRecord::Srv { name, .. } => name,
        }
    }

    pub fn ttl(&self) -> u32 {
        match self {
            ResourceRecord::A { ttl, .. }
            | ResourceRecord::Aaaa { ttl, .. }
            | ResourceRecord::Srv { ttl, .. } => *ttl,
        }
    }

    /// Encodes `name || type || class || ttl || rdlength || rdata` with the
    /// name written as plain labels.
    pub fn encode(&self, out: &mut Vec<u8>) -> Result<(), ProtocolError> {
        write_name(self.name(), out)?;
        write_u16(out, self.record_type().to_u16());
        write_u16(out, CLASS_IN);
        write_u32(out, self.ttl());

        match self {
            ResourceRecord::A { addr, .. } => {
                write_u16(out, 4);
                out.extend_from_slice(&addr.octets());
            }
            ResourceRecord::Aaaa { addr, .. } => {
                write_u16(out, 16);
                out.extend_from_slice(&addr.octets());
            }
            ResourceRecord::Srv {
                priority,
                weight,
                port,
                target,
                ..
            } => {
                let mut target_labels = Vec::new();
                write_name(target, &mut target_labels)?;

                write_u16(out, (6 + target_labels.len()) as u16);
                write_u16(out, *priority);
                write_u16(out, *weight);
                write_u16(out, *port);
                out.extend_from_slice(&target_labels);
            }
        }
        Ok(())
    }
}
