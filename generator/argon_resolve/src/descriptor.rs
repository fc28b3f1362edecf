//! Annotation options and the resolved argument descriptor.

use argon_ir::{ParamKind, TypeSig};

use crate::{Converter, FieldAccessor};

/// Per-member annotation options, as parsed by the front-end.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ArgOptions {
    /// Explicit bundle key override. Blank strings count as absent.
    pub key: Option<String>,
    /// Defer conversion entirely to the platform's object-serialization
    /// protocol, bypassing type-support checks.
    pub parceler: bool,
    /// The argument may be omitted when starting the component.
    pub optional: bool,
}

impl ArgOptions {
    /// Options with an explicit key override.
    pub fn with_key(key: impl Into<String>) -> Self {
        ArgOptions {
            key: Some(key.into()),
            ..ArgOptions::default()
        }
    }

    /// Options with the opaque-serialization flag set.
    #[must_use]
    pub fn parceler() -> Self {
        ArgOptions {
            parceler: true,
            ..ArgOptions::default()
        }
    }
}

/// The validated result for one eligible member.
///
/// Invariant: `storage_kind` is never [`ParamKind::ObjectSubtype`]; that
/// case is rejected during converter resolution.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ArgumentDescriptor {
    /// Logical argument name (field name, or getter name with the `get`
    /// prefix stripped and decapitalized).
    pub name: String,
    /// Bundle key the value is stored under.
    pub key: String,
    /// Wire kind of the declared type.
    pub declared_kind: ParamKind,
    /// The member's full declared type signature.
    pub declared_type: TypeSig,
    /// Wire kind actually used for persistence. Differs from
    /// `declared_kind` when a converter changes the representation.
    pub storage_kind: ParamKind,
    /// The argument may be omitted when starting the component.
    pub optional: bool,
    /// How generated code reads and writes the member.
    pub accessor: FieldAccessor,
    /// Conversion strategy, if one is registered for the declared type.
    pub converter: Option<Converter>,
    /// Value is stored through the opaque-serialization protocol.
    pub parceler: bool,
}

impl ArgumentDescriptor {
    /// Check if a converter rewrites the stored representation.
    #[must_use]
    pub fn is_converted(&self) -> bool {
        self.converter.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = ArgOptions::default();
        assert_eq!(options.key, None);
        assert!(!options.parceler);
        assert!(!options.optional);
    }

    #[test]
    fn test_options_helpers() {
        assert_eq!(ArgOptions::with_key("myKey").key.as_deref(), Some("myKey"));
        assert!(ArgOptions::parceler().parceler);
    }
}
