use super::header::{Header, HEADER_LEN};
use super::question::Question;
use super::record::ResourceRecord;
use crate::errors::ProtocolError;

/// A decoded request or an in-flight response: header, exactly one
/// question, and the answer/additional record lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub question: Question,
    pub answers: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    /// Decodes an inbound datagram as a request: the header at offset zero
    /// (validated against the query invariants), one question at offset
    /// twelve. Returns the message and the total bytes consumed so callers
    /// can sanity-check the datagram length.
    pub fn decode_request(packet: &[u8]) -> Result<(Self, usize), ProtocolError> {
        let header = Header::decode(packet)?;
        header.validate_query()?;

        let (question, question_len) = Question::decode(packet, HEADER_LEN)?;

        Ok((
            Message {
                header,
                question,
                answers: Vec::new(),
                additionals: Vec::new(),
            },
            HEADER_LEN + question_len,
        ))
    }

    /// Starts a response for `request`: same id and flags with the response
    /// and recursion-available bits set, record counts cleared, and the
    /// question copied verbatim. The caller stamps rcode and aa.
    pub fn response_to(request: &Message) -> Self {
        let mut header = request.header;
        header.set_ra(true);
        header.clear_record_counts();

        Message {
            header,
            question: request.question.clone(),
            answers: Vec::new(),
            additionals: Vec::new(),
        }
    }

    pub fn add_answer(&mut self, record: ResourceRecord) {
        self.answers.push(record);
        self.header.ancount = self.answers.len() as u16;
    }

    pub fn add_additional(&mut self, record: ResourceRecord) {
        self.additionals.push(record);
        self.header.arcount = self.additionals.len() as u16;
    }

    /// Serializes header, question, answers, then additionals.
    pub fn encode(&self) -> Result<Vec<u8>, ProtocolError> {
        debug_assert_eq!(self.header.ancount as usize, self.answers.len());
        debug_assert_eq!(self.header.arcount as usize, self.additionals.len());
        debug_assert_eq!(self.header.nscount, 0);

        let mut out = Vec::with_capacity(512);
        self.header.encode(&mut out);
        self.question.encode(&mut out)?;
        for record in self.answers.iter().chain(self.additionals.iter()) {
            record.encode(&mut out)?;
        }
        Ok(out)
    }
}
