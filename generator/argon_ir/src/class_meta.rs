//! Enclosing class metadata.

use std::fmt;

use crate::Visibility;

/// Syntactic kind of the enclosing type declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeDeclKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

/// Metadata of the class enclosing a candidate member.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClassMeta {
    /// Fully qualified name, used verbatim in diagnostics.
    pub qualified_name: String,
    pub kind: TypeDeclKind,
    pub visibility: Visibility,
}

impl ClassMeta {
    /// Create class metadata.
    pub fn new(
        qualified_name: impl Into<String>,
        kind: TypeDeclKind,
        visibility: Visibility,
    ) -> Self {
        ClassMeta {
            qualified_name: qualified_name.into(),
            kind,
            visibility,
        }
    }

    /// Convenience constructor for a public class.
    pub fn public_class(qualified_name: impl Into<String>) -> Self {
        Self::new(qualified_name, TypeDeclKind::Class, Visibility::Public)
    }
}

/// Which recognized framework base class the host extends.
///
/// Resolved by the caller before resolution begins; drives the policy
/// branch that restricts supertype-serialized kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum HostClassKind {
    Activity,
    Fragment,
    Service,
    BroadcastReceiver,
}

impl HostClassKind {
    /// Check if hosts of this kind keep a persistent instance that stored
    /// values can be deserialized into later. Broadcast receivers do not:
    /// they are constructed per delivery, so only directly storable kinds
    /// are legal on them.
    #[must_use]
    pub const fn has_instance_state(self) -> bool {
        !matches!(self, HostClassKind::BroadcastReceiver)
    }

    /// Display name of the framework base class.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HostClassKind::Activity => "Activity",
            HostClassKind::Fragment => "Fragment",
            HostClassKind::Service => "Service",
            HostClassKind::BroadcastReceiver => "BroadcastReceiver",
        }
    }
}

impl fmt::Display for HostClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
