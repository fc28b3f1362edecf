//! Diagnostic system for the Argon generator.
//!
//! Resolution failures are non-fatal: each one produces exactly one
//! diagnostic addressed at the offending element, and the member is
//! skipped. This crate provides:
//!
//! - Error codes for searchability ([`ErrorCode`])
//! - The diagnostic record itself ([`Diagnostic`], [`ElementRef`])
//! - The write-only [`DiagnosticSink`] owned by the pass driver, with
//!   [`DiagnosticBuffer`] as the standard collecting implementation

mod diagnostic;
mod error_code;
mod sink;

pub use diagnostic::{Diagnostic, ElementRef, Severity};
pub use error_code::ErrorCode;
pub use sink::{DiagnosticBuffer, DiagnosticSink, SinkConfig};
