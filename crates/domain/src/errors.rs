use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("No answer: {0}")]
    NoAnswer(String),

    #[error("All nameservers failed to answer the query: {0}")]
    NoNameservers(String),

    #[error("DNS protocol error: {0}")]
    Protocol(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

