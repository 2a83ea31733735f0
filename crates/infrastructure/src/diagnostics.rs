use nslookup_application::ports::DiagnosticSink;
use tracing::{error, warn};

/// Routes session diagnostics into the `nslookup` tracing target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingDiagnostics {
    fn warn(&self, message: &str) {
        warn!(target: "nslookup", "{}", message);
    }

    fn error(&self, message: &str) {
        error!(target: "nslookup", "{}", message);
    }
}
