use nslookup_domain::LoggingConfig;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global fmt subscriber on stderr for embedding binaries.
///
/// Unknown levels fall back to `info`. Calling this twice is harmless; the
/// second call leaves the existing subscriber in place.
pub fn init_logging(config: &LoggingConfig) {
    let level = if config.has_known_level() {
        config.level.to_lowercase()
    } else {
        "info".to_string()
    };

    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(io::stderr),
        )
        .try_init();

    match installed {
        Ok(()) => info!(level = %level, "Logging initialized"),
        Err(e) => debug!(error = %e, "Subscriber already installed"),
    }
}
