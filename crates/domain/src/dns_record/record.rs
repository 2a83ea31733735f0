use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// Structured SOA rdata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoaData {
    /// Primary nameserver of the zone.
    pub mname: String,

    pub rname: String,

    pub serial: u32,

    pub refresh: i32,

    pub retry: i32,

    pub expire: i32,

    pub minimum: u32,
}

impl fmt::Display for SoaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname, self.rname, self.serial, self.refresh, self.retry, self.expire, self.minimum
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordData {
    Address(IpAddr),

    Soa(SoaData),

    /// CNAME target.
    Alias(String),

    /// Any other rdata, in presentation form.
    Other(String),
}

/// A single resource record as handed over by the resolver collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Presentation form, e.g. `example.com. 300 IN A 93.184.216.34`.
    pub text: String,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(text: impl Into<String>, data: RecordData) -> Self {
        Self {
            text: text.into(),
            data,
        }
    }

    pub fn address(&self) -> Option<IpAddr> {
        match self.data {
            RecordData::Address(ip) => Some(ip),
            _ => None,
        }
    }

    /// The first field of the rdata: the address, the SOA primary
    /// nameserver, the alias target, or the first token of anything else.
    pub fn leading_value(&self) -> String {
        match &self.data {
            RecordData::Address(ip) => ip.to_string(),
            RecordData::Soa(soa) => soa.mname.clone(),
            RecordData::Alias(target) => target.clone(),
            RecordData::Other(rdata) => rdata
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
