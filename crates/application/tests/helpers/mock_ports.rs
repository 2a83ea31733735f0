use async_trait::async_trait;
use nslookup_application::ports::{DiagnosticSink, DnsResolver};
use nslookup_domain::{DnsAnswer, DnsQuery, DomainError, RecordType, TransportMode};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

type ResponseKey = (String, RecordType);

#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<ResponseKey, Result<DnsAnswer, DomainError>>>>,
    calls: Arc<RwLock<Vec<DnsQuery>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(&self, domain: &str, record_type: RecordType, answer: DnsAnswer) {
        self.responses
            .write()
            .unwrap()
            .insert((domain.to_string(), record_type), Ok(answer));
    }

    pub fn set_error(&self, domain: &str, record_type: RecordType, error: DomainError) {
        self.responses
            .write()
            .unwrap()
            .insert((domain.to_string(), record_type), Err(error));
    }

    pub fn calls(&self) -> Vec<DnsQuery> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    pub fn last_transport(&self) -> Option<TransportMode> {
        self.calls.read().unwrap().last().map(|q| q.transport)
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsAnswer, DomainError> {
        self.calls.write().unwrap().push(query.clone());

        self.responses
            .read()
            .unwrap()
            .get(&(query.domain.to_string(), query.record_type))
            .cloned()
            .unwrap_or(Err(DomainError::NxDomain))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Level {
    Warn,
    Error,
}

#[derive(Clone, Default)]
pub struct MockDiagnostics {
    lines: Arc<RwLock<Vec<(Level, String)>>>,
}

impl MockDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .read()
            .unwrap()
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn warnings(&self) -> usize {
        self.count(Level::Warn)
    }

    pub fn errors(&self) -> usize {
        self.count(Level::Error)
    }

    fn count(&self, level: Level) -> usize {
        self.lines
            .read()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }
}

impl DiagnosticSink for MockDiagnostics {
    fn warn(&self, message: &str) {
        self.lines
            .write()
            .unwrap()
            .push((Level::Warn, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.lines
            .write()
            .unwrap()
            .push((Level::Error, message.to_string()));
    }
}
