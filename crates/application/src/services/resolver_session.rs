use super::{FailureKind, QueryOutcome};
use crate::ports::{DiagnosticSink, DnsResolver};
use nslookup_domain::{DnsQuery, DomainError, LookupConfig, RecordType, TransportMode};
use std::sync::Arc;
use tracing::debug;

pub const TCP_ADVISORY: &str = "Warning: using TCP mode with multiple requests will open a new \
session for each request. For large number of requests or iterative requests, it may be better \
to query the nameservers directly over a single connection.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub transport: TransportMode,
    pub verbose: bool,
}

impl From<&LookupConfig> for SessionConfig {
    fn from(config: &LookupConfig) -> Self {
        Self {
            transport: config.transport,
            verbose: config.verbose,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryOptions {
    pub allow_authority_only: bool,
}

impl QueryOptions {
    pub fn authority_only() -> Self {
        Self {
            allow_authority_only: true,
        }
    }
}

/// Issues single queries and absorbs every resolver failure into a
/// [`QueryOutcome`]; never returns an error to its caller.
pub struct ResolverSession {
    resolver: Arc<dyn DnsResolver>,
    diagnostics: Arc<dyn DiagnosticSink>,
    config: SessionConfig,
}

impl ResolverSession {
    pub fn new(
        resolver: Arc<dyn DnsResolver>,
        diagnostics: Arc<dyn DiagnosticSink>,
        config: SessionConfig,
    ) -> Self {
        if config.transport.is_connection_oriented() {
            diagnostics.warn(TCP_ADVISORY);
        }

        Self {
            resolver,
            diagnostics,
            config,
        }
    }

    pub async fn query(
        &self,
        domain: &str,
        record_type: RecordType,
        options: QueryOptions,
    ) -> QueryOutcome {
        let query = DnsQuery::new(domain, record_type)
            .with_transport(self.config.transport)
            .with_authority_only(options.allow_authority_only);

        debug!(
            domain = %domain,
            record_type = %record_type,
            transport = %self.config.transport,
            "Resolving"
        );

        match self.resolver.resolve(&query).await {
            Ok(answer) => QueryOutcome::Data(answer),

            Err(DomainError::NxDomain) => QueryOutcome::Empty,

            Err(DomainError::NoAnswer(detail)) => {
                // AAAA absence is common, keep it quiet
                if self.config.verbose && record_type != RecordType::AAAA {
                    self.diagnostics.warn(&format!("Warning: {}", detail));
                }
                QueryOutcome::Empty
            }

            Err(DomainError::NoNameservers(detail)) => {
                if self.config.verbose {
                    self.diagnostics.warn(&format!("Warning: {}", detail));
                }
                QueryOutcome::Failure(FailureKind::NoNameservers, detail)
            }

            Err(e) => {
                if self.config.verbose {
                    self.diagnostics.error(&format!(
                        "Error: DNS exception occurred looking up '{}': {}",
                        domain, e
                    ));
                }
                QueryOutcome::Failure(FailureKind::ProtocolError, e.to_string())
            }
        }
    }
}
