//! nslookup Domain Layer
pub mod config;
pub mod dns_answer;
pub mod dns_protocol;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod errors;

pub use config::{ConfigError, LoggingConfig, LookupConfig};
pub use dns_answer::DnsAnswer;
pub use dns_protocol::TransportMode;
pub use dns_query::DnsQuery;
pub use dns_record::{RecordData, RecordType, ResourceRecord, SoaData};
pub use dns_response::DnsResponse;
pub use errors::DomainError;
