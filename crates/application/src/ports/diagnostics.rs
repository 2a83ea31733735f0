/// Operator-facing side channel for non-fatal resolver anomalies.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, message: &str);

    fn error(&self, message: &str);
}
