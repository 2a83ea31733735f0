use super::forwarding::{MessageBuilder, ResponseParser, WireResponse};
use super::system_config::system_nameservers;
use super::transport::create_transport;
use async_trait::async_trait;
use nslookup_application::ports::DnsResolver;
use nslookup_domain::{ConfigError, DnsAnswer, DnsQuery, DomainError, LookupConfig, TransportMode};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// Resolver collaborator speaking plain DNS to a fixed list of nameservers.
///
/// Servers are tried in order; the first NOERROR or NXDOMAIN response wins.
/// Any other response code, a transport error or a timeout moves on to the
/// next server. Truncated UDP responses are retried once over TCP.
pub struct WireDnsResolver {
    nameservers: Vec<SocketAddr>,
    timeout: Duration,
}

impl WireDnsResolver {
    /// An empty `nameservers` list falls back to the system configuration.
    pub fn new(nameservers: Vec<SocketAddr>, timeout: Duration) -> Self {
        let nameservers = if nameservers.is_empty() {
            system_nameservers()
        } else {
            nameservers
        };

        Self {
            nameservers,
            timeout,
        }
    }

    pub fn from_config(config: &LookupConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.nameserver_addrs()?,
            Duration::from_millis(config.timeout_ms),
        ))
    }

    pub fn nameservers(&self) -> &[SocketAddr] {
        &self.nameservers
    }

    async fn exchange(
        &self,
        server: SocketAddr,
        mode: TransportMode,
        id: u16,
        request: &[u8],
    ) -> Result<WireResponse, DomainError> {
        let response = self.send(server, mode, id, request).await?;

        if response.truncated && mode == TransportMode::Udp {
            debug!(server = %server, "Truncated UDP response, retrying over TCP");
            return self.send(server, TransportMode::Tcp, id, request).await;
        }

        Ok(response)
    }

    async fn send(
        &self,
        server: SocketAddr,
        mode: TransportMode,
        id: u16,
        request: &[u8],
    ) -> Result<WireResponse, DomainError> {
        let transport = create_transport(mode, server);
        let raw = transport.send(request, self.timeout).await?;
        let response = ResponseParser::parse(&raw)?;

        if response.id != id {
            return Err(DomainError::Protocol(format!(
                "Response ID {} does not match query ID {}",
                response.id, id
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl DnsResolver for WireDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsAnswer, DomainError> {
        let query_name = MessageBuilder::query_name(&query.domain)?;
        let (id, request) = MessageBuilder::build_query_with_id(&query.domain, &query.record_type)?;

        let mut failures = Vec::with_capacity(self.nameservers.len());

        for &server in &self.nameservers {
            match self.exchange(server, query.transport, id, &request).await {
                Ok(response) if response.is_nxdomain() => {
                    debug!(domain = %query.domain, server = %server, "NXDOMAIN");
                    return Err(DomainError::NxDomain);
                }
                Ok(response) if response.is_success() => {
                    return response.into_answer(query, &query_name);
                }
                Ok(response) => {
                    let status = ResponseParser::rcode_to_status(response.rcode);
                    warn!(server = %server, status = status, domain = %query.domain, "Nameserver refused query");
                    failures.push(format!("Server {} answered {}", server, status));
                }
                Err(e) => {
                    warn!(server = %server, error = %e, domain = %query.domain, "Nameserver failed");
                    failures.push(format!("Server {}: {}", server, e));
                }
            }
        }

        Err(DomainError::NoNameservers(format!(
            "{} IN {}: {}",
            query_name,
            query.record_type,
            failures.join("; ")
        )))
    }
}
