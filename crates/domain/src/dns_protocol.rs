use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire transport used for every query of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Connectionless.
    #[default]
    Udp,

    /// Connection-oriented; a new connection is opened per query.
    Tcp,
}

impl TransportMode {
    pub fn protocol_name(&self) -> &'static str {
        match self {
            TransportMode::Udp => "UDP",
            TransportMode::Tcp => "TCP",
        }
    }

    pub fn is_connection_oriented(&self) -> bool {
        matches!(self, TransportMode::Tcp)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.protocol_name())
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "udp" => Ok(TransportMode::Udp),
            "tcp" => Ok(TransportMode::Tcp),
            _ => Err(format!("Unknown transport mode: {}", s)),
        }
    }
}
