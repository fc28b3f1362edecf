//! Diagnostic records.

use std::fmt;

use argon_ir::Span;

use crate::ErrorCode;

/// Severity level for diagnostics.
///
/// The resolver only emits `Error`; the other levels exist so surrounding
/// passes can reuse the same sink.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// The program element a diagnostic targets.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ElementRef {
    /// Qualified name of the enclosing class.
    pub class: String,
    /// Simple name of the member.
    pub member: String,
    /// Declaration position of the member.
    pub span: Span,
}

impl ElementRef {
    /// Create an element reference.
    pub fn new(class: impl Into<String>, member: impl Into<String>, span: Span) -> Self {
        ElementRef {
            class: class.into(),
            member: member.into(),
            span,
        }
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.class, self.member)
    }
}

/// A diagnostic produced while resolving one member.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Severity level.
    pub severity: Severity,
    /// The element the diagnostic targets.
    pub element: ElementRef,
    /// Fully rendered message.
    pub message: String,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode, element: ElementRef, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            element,
            message: message.into(),
        }
    }

    /// Check if this is an error (vs warning/note).
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)
    }
}
