use super::ResourceRecord;
use std::net::IpAddr;

/// Raw view of a successful resolver response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsAnswer {
    /// Answer section, protocol order.
    pub answers: Vec<ResourceRecord>,

    /// Authority section, protocol order.
    pub authority: Vec<ResourceRecord>,

    /// Final target of the alias chain starting at the query name, fully qualified.
    pub canonical_name: String,
}

impl DnsAnswer {
    pub fn new(answers: Vec<ResourceRecord>, canonical_name: impl Into<String>) -> Self {
        Self {
            answers,
            authority: Vec::new(),
            canonical_name: canonical_name.into(),
        }
    }

    pub fn with_authority(mut self, authority: Vec<ResourceRecord>) -> Self {
        self.authority = authority;
        self
    }

    pub fn addresses(&self) -> impl Iterator<Item = IpAddr> + '_ {
        self.answers.iter().filter_map(ResourceRecord::address)
    }
}
