use async_trait::async_trait;
use nslookup_domain::{DnsAnswer, DnsQuery, DomainError};

/// Low-level resolution capability consumed by the resolver session.
///
/// Implementations signal absence and failure through `DomainError`:
/// - `NxDomain`: the name does not exist
/// - `NoAnswer`: the name exists but has no record of the requested type
///   (only when `query.allow_authority_only` is false)
/// - `NoNameservers`: no configured nameserver produced a usable answer
/// - `Protocol`: any other resolution failure
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsAnswer, DomainError>;
}
