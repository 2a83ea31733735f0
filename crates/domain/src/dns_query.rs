use super::{RecordType, TransportMode};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub transport: TransportMode,
    /// Accept a NOERROR response with an empty answer section and hand back
    /// its authority section instead of failing with `NoAnswer`.
    pub allow_authority_only: bool,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            transport: TransportMode::default(),
            allow_authority_only: false,
        }
    }

    pub fn with_transport(mut self, transport: TransportMode) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_authority_only(mut self, allow: bool) -> Self {
        self.allow_authority_only = allow;
        self
    }
}
