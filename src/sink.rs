use crate::traits::DiagnosticSink;

/// Forwards trace messages to the `log` facade at debug level.
///
/// This is the default sink. Nothing is printed unless the binary (or the
/// embedding application) installs a logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn trace(&self, message: &str) {
        log::debug!(target: "deepwalk", "{message}");
    }
}

/// Discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn trace(&self, _message: &str) {}
}
