use super::ConfigError;
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_DNS_PORT: u16 = 53;

/// Parses `IP`, `IP:port` or `[IPv6]:port`; the port defaults to 53.
pub fn parse_nameserver(server: &str) -> Result<SocketAddr, ConfigError> {
    let trimmed = server.trim();

    if let Ok(addr) = trimmed.parse::<SocketAddr>() {
        return Ok(addr);
    }

    let host = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    host.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| ConfigError::Validation(format!("Invalid nameserver address: {}", server)))
}
