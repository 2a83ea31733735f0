use crate::services::{QueryOptions, QueryOutcome, ResolverSession};
use nslookup_domain::{DnsAnswer, DnsResponse, DomainError, RecordType, ResourceRecord};
use std::sync::Arc;

/// Record-type specific lookups on top of a [`ResolverSession`].
///
/// Absence of data and resolver failures always yield an empty
/// [`DnsResponse`]; only a bad record type passed to [`lookup_host`]
/// surfaces as an error.
///
/// [`lookup_host`]: DnsLookupUseCase::lookup_host
pub struct DnsLookupUseCase {
    session: Arc<ResolverSession>,
}

impl DnsLookupUseCase {
    pub fn new(session: Arc<ResolverSession>) -> Self {
        Self { session }
    }

    pub async fn lookup_ipv4(&self, domain: &str, include_canonical_name: bool) -> DnsResponse {
        self.host_lookup(domain, RecordType::A, include_canonical_name)
            .await
    }

    pub async fn lookup_ipv6(&self, domain: &str, include_canonical_name: bool) -> DnsResponse {
        self.host_lookup(domain, RecordType::AAAA, include_canonical_name)
            .await
    }

    /// IPv4 results first, then IPv6.
    pub async fn lookup_all(&self, domain: &str, include_canonical_name: bool) -> DnsResponse {
        let mut response = self.lookup_ipv4(domain, include_canonical_name).await;
        response.extend(self.lookup_ipv6(domain, include_canonical_name).await);
        response
    }

    /// Host lookup by record type name. Only `A` and `AAAA` are accepted;
    /// anything else fails with `InvalidArgument` before any query is sent.
    pub async fn lookup_host(
        &self,
        domain: &str,
        record_type: &str,
        include_canonical_name: bool,
    ) -> Result<DnsResponse, DomainError> {
        let parsed = record_type
            .parse::<RecordType>()
            .ok()
            .filter(RecordType::is_address)
            .ok_or_else(|| {
                DomainError::InvalidArgument(format!(
                    "Expected record type 'A' or 'AAAA', got '{}'",
                    record_type
                ))
            })?;

        Ok(self
            .host_lookup(domain, parsed, include_canonical_name)
            .await)
    }

    pub async fn lookup_soa(&self, domain: &str) -> DnsResponse {
        match self
            .session
            .query(domain, RecordType::SOA, QueryOptions::authority_only())
            .await
        {
            QueryOutcome::Data(answer) => soa_response(answer),
            QueryOutcome::Empty | QueryOutcome::Failure(..) => DnsResponse::default(),
        }
    }

    async fn host_lookup(
        &self,
        domain: &str,
        record_type: RecordType,
        include_canonical_name: bool,
    ) -> DnsResponse {
        let outcome = self
            .session
            .query(domain, record_type, QueryOptions::default())
            .await;

        match outcome.into_answer() {
            Some(answer) => host_response(answer, record_type, include_canonical_name),
            None => DnsResponse::default(),
        }
    }
}

fn host_response(
    answer: DnsAnswer,
    record_type: RecordType,
    include_canonical_name: bool,
) -> DnsResponse {
    // alias records are skipped; records and values stay index-aligned
    let (full_records, mut values): (Vec<String>, Vec<String>) = answer
        .answers
        .iter()
        .filter_map(|record| {
            record
                .address()
                .filter(|ip| ip.is_ipv4() == (record_type == RecordType::A))
                .map(|ip| (record.text.clone(), ip.to_string()))
        })
        .unzip();

    if values.is_empty() {
        return DnsResponse::default();
    }

    if include_canonical_name {
        values.push(answer.canonical_name);
    }

    DnsResponse::new(full_records, values)
}

fn soa_response(answer: DnsAnswer) -> DnsResponse {
    if answer.answers.is_empty() && answer.authority.is_empty() {
        return DnsResponse::default();
    }

    let mut full_records = texts(&answer.answers);
    full_records.extend(texts(&answer.authority));

    let values = leading_values(&answer.answers);

    let authority_values =
        (!answer.authority.is_empty()).then(|| leading_values(&answer.authority));

    DnsResponse {
        full_records,
        values,
        authority_values,
    }
}

fn texts(records: &[ResourceRecord]) -> Vec<String> {
    records.iter().map(|r| r.text.clone()).collect()
}

fn leading_values(records: &[ResourceRecord]) -> Vec<String> {
    records.iter().map(ResourceRecord::leading_value).collect()
}
