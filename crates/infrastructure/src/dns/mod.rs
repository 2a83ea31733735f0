pub mod forwarding;
pub mod resolver;
pub mod system_config;
pub mod transport;

pub use forwarding::{MessageBuilder, RecordTypeMapper, ResponseParser, WireResponse};
pub use resolver::WireDnsResolver;
pub use system_config::{nameservers_from_config, system_nameservers};
