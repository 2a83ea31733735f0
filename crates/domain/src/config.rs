pub mod errors;
pub mod logging;
pub mod nameserver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use nameserver::parse_nameserver;
pub use root::LookupConfig;
