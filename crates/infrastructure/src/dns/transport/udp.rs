//! Plain DNS over UDP (RFC 1035 §4.2.1).
//!
//! Each exchange uses a fresh socket connected to the nameserver, so the
//! kernel discards datagrams arriving from any other address. Truncated
//! responses are returned as-is; the resolver decides whether to retry.

use super::DnsTransport;
use async_trait::async_trait;
use nslookup_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Largest datagram accepted from a nameserver.
const RECV_BUFFER_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn wildcard_addr(&self) -> SocketAddr {
        match self.server_addr {
            SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
            SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
        }
    }

    async fn open(&self) -> Result<UdpSocket, DomainError> {
        let socket = UdpSocket::bind(self.wildcard_addr())
            .await
            .map_err(|e| self.io_error("bind a local socket", e))?;

        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| self.io_error("connect", e))?;

        Ok(socket)
    }

    async fn exchange(&self, socket: &UdpSocket, request: &[u8]) -> Result<Vec<u8>, DomainError> {
        socket
            .send(request)
            .await
            .map_err(|e| self.io_error("send query", e))?;

        let mut datagram = vec![0u8; RECV_BUFFER_SIZE];
        let len = socket
            .recv(&mut datagram)
            .await
            .map_err(|e| self.io_error("receive response", e))?;
        datagram.truncate(len);

        Ok(datagram)
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> DomainError {
        DomainError::Protocol(format!(
            "UDP: failed to {} for {}: {}",
            action, self.server_addr, e
        ))
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(&self, message_bytes: &[u8], timeout: Duration) -> Result<Vec<u8>, DomainError> {
        let socket = self.open().await?;

        let response = tokio::time::timeout(timeout, self.exchange(&socket, message_bytes))
            .await
            .map_err(|_| {
                DomainError::Protocol(format!(
                    "Timeout after {}ms waiting for UDP response from {}",
                    timeout.as_millis(),
                    self.server_addr
                ))
            })??;

        debug!(
            server = %self.server_addr,
            request_len = message_bytes.len(),
            response_len = response.len(),
            "UDP exchange complete"
        );

        Ok(response)
    }
}
