#![allow(dead_code)]
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::sync::oneshot;

/// How the mock nameserver answers every query it receives.
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    Answer(Ipv4Addr),
    AnswerV6(Ipv6Addr),
    /// SOA record for the query name in the answer section.
    AnswerSoa,
    /// SOA answer with an NS record in the authority section.
    AnswerSoaWithNs,
    /// NOERROR with an SOA record in the authority section only.
    AuthoritySoa,
    NoData,
    NxDomain,
    ServFail,
    /// TC bit over UDP, full A answer over TCP.
    Truncated(Ipv4Addr),
    WrongId,
    Silent,
}

/// Nameserver on 127.0.0.1 serving UDP and TCP on the same port.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = build_response(behavior, &buf[..len], false) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((stream, _)) = result {
                            tokio::spawn(serve_tcp(stream, behavior));
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve_tcp(mut stream: TcpStream, behavior: MockBehavior) {
    let mut len_buf = [0u8; 2];
    if stream.read_exact(&mut len_buf).await.is_err() {
        return;
    }

    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    if stream.read_exact(&mut query).await.is_err() {
        return;
    }

    if let Some(response) = build_response(behavior, &query, true) {
        let _ = stream
            .write_all(&(response.len() as u16).to_be_bytes())
            .await;
        let _ = stream.write_all(&response).await;
        let _ = stream.flush().await;
    }
}

pub fn build_response(behavior: MockBehavior, query: &[u8], over_tcp: bool) -> Option<Vec<u8>> {
    if query.len() < 12 {
        return None;
    }

    let id = [query[0], query[1]];

    let (id, flags, answers, authority): ([u8; 2], [u8; 2], Vec<Vec<u8>>, Vec<Vec<u8>>) =
        match behavior {
            MockBehavior::Silent => return None,
            MockBehavior::Answer(ip) => (id, [0x81, 0x80], vec![a_record(ip)], vec![]),
            MockBehavior::AnswerV6(ip) => (id, [0x81, 0x80], vec![aaaa_record(ip)], vec![]),
            MockBehavior::AnswerSoa => (id, [0x81, 0x80], vec![soa_record()], vec![]),
            MockBehavior::AnswerSoaWithNs => {
                (id, [0x81, 0x80], vec![soa_record()], vec![ns_record()])
            }
            MockBehavior::AuthoritySoa => (id, [0x81, 0x80], vec![], vec![soa_record()]),
            MockBehavior::NoData => (id, [0x81, 0x80], vec![], vec![]),
            MockBehavior::NxDomain => (id, [0x81, 0x83], vec![], vec![]),
            MockBehavior::ServFail => (id, [0x81, 0x82], vec![], vec![]),
            MockBehavior::Truncated(_) if !over_tcp => (id, [0x83, 0x80], vec![], vec![]),
            MockBehavior::Truncated(ip) => (id, [0x81, 0x80], vec![a_record(ip)], vec![]),
            MockBehavior::WrongId => {
                let wrong = u16::from_be_bytes(id).wrapping_add(1).to_be_bytes();
                (wrong, [0x81, 0x80], vec![a_record(Ipv4Addr::LOCALHOST)], vec![])
            }
        };

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&id);
    response.extend_from_slice(&flags);
    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&(authority.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&query[12..]);

    for record in answers.iter().chain(authority.iter()) {
        response.extend_from_slice(record);
    }

    Some(response)
}

/// Owner is a pointer to the question name at offset 12.
fn record_header(rtype: u16, rdlen: u16) -> Vec<u8> {
    let mut header = vec![0xc0, 0x0c];
    header.extend_from_slice(&rtype.to_be_bytes());
    header.extend_from_slice(&[0x00, 0x01]);
    header.extend_from_slice(&60u32.to_be_bytes());
    header.extend_from_slice(&rdlen.to_be_bytes());
    header
}

fn a_record(ip: Ipv4Addr) -> Vec<u8> {
    let mut record = record_header(1, 4);
    record.extend_from_slice(&ip.octets());
    record
}

fn aaaa_record(ip: Ipv6Addr) -> Vec<u8> {
    let mut record = record_header(28, 16);
    record.extend_from_slice(&ip.octets());
    record
}

/// Target `ns2.<qname>`.
fn ns_record() -> Vec<u8> {
    let mut record = record_header(2, 6);
    record.extend_from_slice(&[3, b'n', b's', b'2', 0xc0, 0x0c]);
    record
}

/// mname `ns1.<qname>`, rname `hostmaster.<qname>`.
fn soa_record() -> Vec<u8> {
    let mut rdata = Vec::with_capacity(39);
    rdata.extend_from_slice(&[3, b'n', b's', b'1', 0xc0, 0x0c]);
    rdata.push(10);
    rdata.extend_from_slice(b"hostmaster");
    rdata.extend_from_slice(&[0xc0, 0x0c]);
    for value in [2024010101u32, 3600, 900, 604800, 300] {
        rdata.extend_from_slice(&value.to_be_bytes());
    }

    let mut record = record_header(6, rdata.len() as u16);
    record.extend_from_slice(&rdata);
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERY: [u8; 29] = [
        0xab, 0xcd, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 7, b'e', b'x',
        b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0, 0x00, 0x01, 0x00, 0x01,
    ];

    #[test]
    fn test_truncated_only_over_udp() {
        let behavior = MockBehavior::Truncated(Ipv4Addr::LOCALHOST);

        let udp = build_response(behavior, &QUERY, false).unwrap();
        let tcp = build_response(behavior, &QUERY, true).unwrap();

        assert_eq!(udp[2] & 0x02, 0x02);
        assert_eq!(tcp[2] & 0x02, 0x00);
        assert_eq!(tcp[0..2], QUERY[0..2]);
    }

    #[test]
    fn test_silent_never_answers() {
        assert!(build_response(MockBehavior::Silent, &QUERY, false).is_none());
    }
}
