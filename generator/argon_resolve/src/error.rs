//! Resolution errors and their diagnostic rendering.
//!
//! The taxonomy is closed: every way a member can fail resolution is one
//! of these variants, each reported exactly once, and none aborts the
//! processing of sibling members. The `Display` strings are the stable
//! detail texts that appear inside the rendered diagnostic message.

use argon_diagnostic::{Diagnostic, ElementRef, ErrorCode};
use argon_ir::{ClassMeta, Span};
use thiserror::Error;

/// Why a candidate member was rejected.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum ResolveError {
    /// Annotated function name lacks the `get` prefix.
    #[error("is placed on a function that is not a getter")]
    NotAGetter,

    /// Annotated symbol could not be typed as an invocable method.
    #[error("is placed on a symbol that is not an invocable method")]
    NotAMethod,

    /// Enclosing declaration is an interface, enum, or annotation.
    #[error("can only annotate members of a class")]
    NotAClass,

    /// Enclosing class is declared private.
    #[error("can not be used within a private class")]
    PrivateClass,

    /// Declared type has no storage kind and no converter rescued it.
    #[error("does not support type {type_name} for member {member}")]
    NotSupportedType { type_name: String, member: String },

    /// Private field without an accessible getter and setter pair.
    #[error("can not access a private field without an accessible getter and setter")]
    InaccessibleField,

    /// Supertype-serialized kind on a host with no persistent instance.
    #[error("can only use basic types inside a broadcast receiver")]
    NotBasicTypeInReceiver,
}

impl ResolveError {
    /// The stable error code for this failure.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            ResolveError::NotAGetter => ErrorCode::E1001,
            ResolveError::NotAMethod => ErrorCode::E1002,
            ResolveError::NotSupportedType { .. } => ErrorCode::E2001,
            ResolveError::NotAClass => ErrorCode::E3001,
            ResolveError::PrivateClass => ErrorCode::E3002,
            ResolveError::InaccessibleField => ErrorCode::E3003,
            ResolveError::NotBasicTypeInReceiver => ErrorCode::E3004,
        }
    }

    /// Render the full diagnostic for this failure.
    ///
    /// Message template: `@Arg {EnclosingQualifiedName} {DetailText}
    /// ({MemberSimpleName})`.
    #[must_use]
    pub fn into_diagnostic(self, host: &ClassMeta, member_name: &str, span: Span) -> Diagnostic {
        let message = format!("@Arg {} {} ({})", host.qualified_name, self, member_name);
        Diagnostic::error(
            self.code(),
            ElementRef::new(host.qualified_name.clone(), member_name, span),
            message,
        )
    }
}
