#![allow(dead_code)]

//! Minimal response parser for assertions. Production code never decodes
//! its own responses, so the tests do it here, far away from the strict
//! request decoder.

use edge_dns_domain::codec::read_name;
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rdata {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
    Other(Vec<u8>),
}

#[derive(Debug, Clone)]
pub struct ParsedRecord {
    pub name: String,
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub rdata: Rdata,
}

#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
    pub qname: String,
    pub qtype: u16,
    pub qclass: u16,
    pub answers: Vec<ParsedRecord>,
    pub additionals: Vec<ParsedRecord>,
}

impl ParsedResponse {
    pub fn parse(packet: &[u8]) -> Self {
        assert!(packet.len() >= 12, "response shorter than a header");

        let u16_at = |off: usize| u16::from_be_bytes([packet[off], packet[off + 1]]);

        let id = u16_at(0);
        let flags = u16_at(2);
        let qdcount = u16_at(4);
        let ancount = u16_at(6);
        let nscount = u16_at(8);
        let arcount = u16_at(10);
        assert_eq!(qdcount, 1, "response must echo one question");

        let (qname, qname_len) = read_name(packet, 12).expect("question name");
        let mut pos = 12 + qname_len;
        let qtype = u16_at(pos);
        let qclass = u16_at(pos + 2);
        pos += 4;

        let read_record = |pos: &mut usize| -> ParsedRecord {
            let (name, name_len) = read_name(packet, *pos).expect("record name");
            *pos += name_len;
            let rtype = u16_at(*pos);
            let class = u16_at(*pos + 2);
            let ttl = u32::from_be_bytes([
                packet[*pos + 4],
                packet[*pos + 5],
                packet[*pos + 6],
                packet[*pos + 7],
            ]);
            let rdlength = u16_at(*pos + 8) as usize;
            *pos += 10;
            let rdata_bytes = &packet[*pos..*pos + rdlength];

            let rdata = match rtype {
                1 => Rdata::A(Ipv4Addr::new(
                    rdata_bytes[0],
                    rdata_bytes[1],
                    rdata_bytes[2],
                    rdata_bytes[3],
                )),
                28 => {
                    let mut octets = [0u8; 16];
                    octets.copy_from_slice(rdata_bytes);
                    Rdata::Aaaa(Ipv6Addr::from(octets))
                }
                33 => {
                    let priority = u16::from_be_bytes([rdata_bytes[0], rdata_bytes[1]]);
                    let weight = u16::from_be_bytes([rdata_bytes[2], rdata_bytes[3]]);
                    let port = u16::from_be_bytes([rdata_bytes[4], rdata_bytes[5]]);
                    let (target, _) = read_name(packet, *pos + 6).expect("srv target");
                    Rdata::Srv {
                        priority,
                        weight,
                        port,
                        target,
                    }
                }
                _ => Rdata::Other(rdata_bytes.to_vec()),
            };
            *pos += rdlength;

            ParsedRecord {
                name,
                rtype,
                class,
                ttl,
                rdata,
            }
        };

        let answers: Vec<ParsedRecord> = (0..ancount).map(|_| read_record(&mut pos)).collect();
        assert_eq!(nscount, 0, "authority section is never populated");
        let additionals: Vec<ParsedRecord> = (0..arcount).map(|_| read_record(&mut pos)).collect();
        assert_eq!(pos, packet.len(), "trailing bytes after last record");

        ParsedResponse {
            id,
            flags,
            qdcount,
            ancount,
            nscount,
            arcount,
            qname,
            qtype,
            qclass,
            answers,
            additionals,
        }
    }

    pub fn qr(&self) -> bool {
        self.flags & 0x8000 != 0
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags & 0x7800) >> 11) as u8
    }

    pub fn aa(&self) -> bool {
        self.flags & 0x0400 != 0
    }

    pub fn ra(&self) -> bool {
        self.flags & 0x0080 != 0
    }

    pub fn rcode(&self) -> u8 {
        (self.flags & 0x000F) as u8
    }
}
