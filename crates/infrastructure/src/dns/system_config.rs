use hickory_resolver::config::ResolverConfig;
use hickory_resolver::system_conf::read_system_conf;
use nslookup_domain::config::nameserver::DEFAULT_DNS_PORT;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::{debug, warn};

const FALLBACK_NAMESERVER: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_DNS_PORT);

/// Nameservers from the operating system's resolver configuration.
///
/// Falls back to localhost only when the configuration cannot be read or
/// lists no servers.
pub fn system_nameservers() -> Vec<SocketAddr> {
    match read_system_conf() {
        Ok((config, _)) => {
            let servers = nameservers_from_config(&config);
            if servers.is_empty() {
                warn!("System resolver configuration lists no nameservers, using localhost");
                return vec![FALLBACK_NAMESERVER];
            }
            debug!(nameservers = ?servers, "Using system nameservers");
            servers
        }
        Err(e) => {
            warn!(error = %e, "Cannot read system resolver configuration, using localhost");
            vec![FALLBACK_NAMESERVER]
        }
    }
}

/// Distinct server addresses in configuration order.
///
/// hickory lists every server once per protocol; the transport here is
/// chosen per query, so only the address matters.
pub fn nameservers_from_config(config: &ResolverConfig) -> Vec<SocketAddr> {
    let mut servers: Vec<SocketAddr> = Vec::new();

    for ns in config.name_servers() {
        if !servers.contains(&ns.socket_addr) {
            servers.push(ns.socket_addr);
        }
    }

    servers
}
