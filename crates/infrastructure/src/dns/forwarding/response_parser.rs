use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{Name, RData, Record};
use nslookup_domain::{DnsAnswer, DnsQuery, DomainError, RecordData, ResourceRecord, SoaData};
use std::net::IpAddr;
use tracing::debug;

/// A parsed upstream response, before it is mapped onto the resolver port.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub answers: Vec<Record>,

    pub authority_records: Vec<Record>,
}

impl WireResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_success(&self) -> bool {
        self.rcode == ResponseCode::NoError
    }

    /// Whether the answer section holds at least one record of the queried type.
    pub fn answers_query(&self, query: &DnsQuery) -> bool {
        let wanted = RecordTypeMapper::to_hickory(&query.record_type);
        self.answers.iter().any(|r| r.record_type() == wanted)
    }

    /// Map a NOERROR response onto the resolver port contract.
    pub fn into_answer(self, query: &DnsQuery, query_name: &Name) -> Result<DnsAnswer, DomainError> {
        if !self.answers_query(query) && !query.allow_authority_only {
            return Err(DomainError::NoAnswer(format!(
                "The DNS response does not contain an answer to the question: {} IN {}",
                query_name, query.record_type
            )));
        }

        let canonical_name = ResponseParser::canonical_name(query_name, &self.answers);

        Ok(DnsAnswer {
            answers: self.answers.iter().map(ResponseParser::to_resource_record).collect(),
            authority: self
                .authority_records
                .iter()
                .map(ResponseParser::to_resource_record)
                .collect(),
            canonical_name,
        })
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<WireResponse, DomainError> {
        if response_bytes.len() < 2 {
            return Err(DomainError::Protocol(format!(
                "DNS response too short: {} bytes",
                response_bytes.len()
            )));
        }
        let id = u16::from_be_bytes([response_bytes[0], response_bytes[1]]);

        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::Protocol(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();
        let answers = message.answers().to_vec();
        let authority_records = message.name_servers().to_vec();

        debug!(
            rcode = ?rcode,
            answers = answers.len(),
            truncated = truncated,
            authority = authority_records.len(),
            "DNS response parsed"
        );

        Ok(WireResponse {
            id,
            rcode,
            truncated,
            answers,
            authority_records,
        })
    }

    pub fn to_resource_record(record: &Record) -> ResourceRecord {
        let data = match record.data() {
            RData::A(a) => RecordData::Address(IpAddr::V4(a.0)),
            RData::AAAA(aaaa) => RecordData::Address(IpAddr::V6(aaaa.0)),
            RData::CNAME(target) => RecordData::Alias(target.to_utf8()),
            RData::SOA(soa) => RecordData::Soa(SoaData {
                mname: soa.mname().to_utf8(),
                rname: soa.rname().to_utf8(),
                serial: soa.serial(),
                refresh: soa.refresh(),
                retry: soa.retry(),
                expire: soa.expire(),
                minimum: soa.minimum(),
            }),
            other => RecordData::Other(other.to_string()),
        };

        ResourceRecord::new(record.to_string(), data)
    }

    /// Follow CNAME records from `query_name` to the end of the alias chain.
    pub fn canonical_name(query_name: &Name, answers: &[Record]) -> String {
        let mut current = query_name.clone();

        // bounded by the number of records, so alias loops terminate
        for _ in 0..answers.len() {
            let next = answers.iter().find_map(|r| match r.data() {
                RData::CNAME(target) if r.name() == &current => Some(target.0.clone()),
                _ => None,
            });

            match next {
                Some(target) => current = target,
                None => break,
            }
        }

        current.to_utf8()
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
