//! nslookup Infrastructure Layer
pub mod bootstrap;
pub mod diagnostics;
pub mod dns;
pub mod logging;

pub use bootstrap::build_lookup;
pub use diagnostics::TracingDiagnostics;
pub use dns::WireDnsResolver;
pub use logging::init_logging;
