mod diagnostics;
mod dns_resolver;

pub use diagnostics::DiagnosticSink;
pub use dns_resolver::DnsResolver;

// Re-export for convenience
pub use nslookup_domain::{DnsAnswer, DnsQuery};
