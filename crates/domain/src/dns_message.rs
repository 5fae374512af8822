use crate::dns_header::DnsHeader;
use crate::dns_question::DnsQuestion;
use crate::dns_record::DnsRecord;

/// A decoded inbound query: header plus the single question this server reads.
///
/// Lives for exactly one request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQueryPacket {
    pub header: DnsHeader,
    pub question: DnsQuestion,
    /// Byte offset just past the question section.
    pub question_end: usize,
}

/// An outbound message under assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResponse {
    pub header: DnsHeader,
    pub question: DnsQuestion,
    pub answers: Vec<DnsRecord>,
}

impl DnsResponse {
    /// `header` is used as given; build it with [`DnsHeader::response_to`].
    pub fn new(header: DnsHeader, question: DnsQuestion) -> Self {
        Self {
            header,
            question,
            answers: Vec::new(),
        }
    }

    /// Appends an answer and keeps ANCOUNT in step with the answer section.
    pub fn add_answer(&mut self, record: DnsRecord) {
        self.answers.push(record);
        self.header.ancount = self.header.ancount.saturating_add(1);
    }

    pub fn first_answer(&self) -> Option<&DnsRecord> {
        self.answers.first()
    }
}
