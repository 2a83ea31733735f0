pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use nslookup_domain::{DomainError, TransportMode};
use std::net::SocketAddr;
use std::time::Duration;

/// One request/response exchange with a single nameserver.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(&self, message_bytes: &[u8], timeout: Duration) -> Result<Vec<u8>, DomainError>;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(&self, message_bytes: &[u8], timeout: Duration) -> Result<Vec<u8>, DomainError> {
        match self {
            Self::Udp(t) => t.send(message_bytes, timeout).await,
            Self::Tcp(t) => t.send(message_bytes, timeout).await,
        }
    }
}

pub fn create_transport(mode: TransportMode, server: SocketAddr) -> Transport {
    match mode {
        TransportMode::Udp => Transport::Udp(udp::UdpTransport::new(server)),
        TransportMode::Tcp => Transport::Tcp(tcp::TcpTransport::new(server)),
    }
}
