mod query_outcome;
mod resolver_session;

pub use query_outcome::{FailureKind, QueryOutcome};
pub use resolver_session::{QueryOptions, ResolverSession, SessionConfig, TCP_ADVISORY};
