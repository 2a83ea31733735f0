use nslookup_domain::DnsAnswer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NoNameservers,
    ProtocolError,
}

/// Classified result of a single resolver call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Data(DnsAnswer),
    Empty,
    Failure(FailureKind, String),
}

impl QueryOutcome {
    pub fn into_answer(self) -> Option<DnsAnswer> {
        match self {
            QueryOutcome::Data(answer) => Some(answer),
            QueryOutcome::Empty | QueryOutcome::Failure(..) => None,
        }
    }
}
