use crate::diagnostics::TracingDiagnostics;
use crate::dns::WireDnsResolver;
use nslookup_application::services::{ResolverSession, SessionConfig};
use nslookup_application::use_cases::DnsLookupUseCase;
use nslookup_domain::{ConfigError, LookupConfig};
use std::sync::Arc;
use tracing::debug;

/// Wire the lookup façade to the network resolver and tracing diagnostics.
pub fn build_lookup(config: &LookupConfig) -> Result<DnsLookupUseCase, ConfigError> {
    config.validate()?;

    let resolver = Arc::new(WireDnsResolver::from_config(config)?);
    debug!(
        nameservers = ?resolver.nameservers(),
        transport = %config.transport,
        "Lookup resolver ready"
    );

    let session = Arc::new(ResolverSession::new(
        resolver,
        Arc::new(TracingDiagnostics::new()),
        SessionConfig::from(config),
    ));

    Ok(DnsLookupUseCase::new(session))
}
