//! Diagnostic sinks.
//!
//! The pass driver owns a sink and appends to it; resolution itself never
//! reads diagnostics back. `DiagnosticBuffer` is the standard collecting
//! sink with an error limit and a deterministically ordered flush.

use crate::Diagnostic;

/// Write-only destination for diagnostics.
pub trait DiagnosticSink {
    /// Report a single diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);

    /// Report multiple diagnostics.
    fn report_all(&mut self, diagnostics: Vec<Diagnostic>) {
        for diagnostic in diagnostics {
            self.report(diagnostic);
        }
    }
}

/// Configuration for diagnostic collection.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SinkConfig {
    /// Maximum number of errors before further reports are dropped
    /// (0 = unlimited).
    pub error_limit: usize,
}

impl Default for SinkConfig {
    fn default() -> Self {
        SinkConfig { error_limit: 100 }
    }
}

impl SinkConfig {
    /// Create a config with no limits (for testing).
    #[must_use]
    pub const fn unlimited() -> Self {
        SinkConfig { error_limit: 0 }
    }
}

/// Collecting sink with deterministic output ordering.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticBuffer {
    diagnostics: Vec<Diagnostic>,
    config: SinkConfig,
    dropped: usize,
}

impl DiagnosticBuffer {
    /// Create a buffer with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SinkConfig::default())
    }

    /// Create a buffer with the given config.
    #[must_use]
    pub fn with_config(config: SinkConfig) -> Self {
        DiagnosticBuffer {
            diagnostics: Vec::new(),
            config,
            dropped: 0,
        }
    }

    /// Number of collected errors.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Check if any error was collected.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Number of reports dropped by the error limit.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Collected diagnostics in report order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the buffer, returning diagnostics ordered by element span,
    /// with report order as the tie-breaker. Keeps output reproducible
    /// when a driver interleaves classes.
    #[must_use]
    pub fn into_sorted(mut self) -> Vec<Diagnostic> {
        self.diagnostics.sort_by_key(|d| d.element.span);
        self.diagnostics
    }
}

impl DiagnosticSink for DiagnosticBuffer {
    fn report(&mut self, diagnostic: Diagnostic) {
        let at_limit =
            self.config.error_limit > 0 && self.error_count() >= self.config.error_limit;
        if at_limit && diagnostic.is_error() {
            self.dropped += 1;
            return;
        }
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ElementRef, ErrorCode};
    use argon_ir::Span;
    use pretty_assertions::assert_eq;

    fn diag(member: &str, start: u32) -> Diagnostic {
        Diagnostic::error(
            ErrorCode::E2001,
            ElementRef::new("com.app.MainActivity", member, Span::new(start, start + 1)),
            format!("@Arg com.app.MainActivity unsupported ({member})"),
        )
    }

    #[test]
    fn test_collects_in_report_order() {
        let mut buffer = DiagnosticBuffer::new();
        buffer.report(diag("a", 10));
        buffer.report(diag("b", 20));

        assert_eq!(buffer.error_count(), 2);
        assert!(buffer.has_errors());
        assert_eq!(buffer.diagnostics()[0].element.member, "a");
    }

    #[test]
    fn test_into_sorted_orders_by_span() {
        let mut buffer = DiagnosticBuffer::new();
        buffer.report(diag("later", 50));
        buffer.report(diag("earlier", 10));

        let sorted = buffer.into_sorted();
        assert_eq!(sorted[0].element.member, "earlier");
        assert_eq!(sorted[1].element.member, "later");
    }

    #[test]
    fn test_error_limit_drops_excess() {
        let mut buffer = DiagnosticBuffer::with_config(SinkConfig { error_limit: 2 });
        buffer.report(diag("a", 1));
        buffer.report(diag("b", 2));
        buffer.report(diag("c", 3));

        assert_eq!(buffer.error_count(), 2);
        assert_eq!(buffer.dropped(), 1);
    }

    #[test]
    fn test_unlimited_config_keeps_everything() {
        let mut buffer = DiagnosticBuffer::with_config(SinkConfig::unlimited());
        for i in 0..200 {
            buffer.report(diag("m", i));
        }
        assert_eq!(buffer.error_count(), 200);
        assert_eq!(buffer.dropped(), 0);
    }
}
