//! Candidate member metadata.
//!
//! The narrow interface a front-end implements to describe one annotated
//! member. All name, type, and visibility resolution happens in the
//! front-end; the resolver only consumes these finished records.

use crate::{Span, TypeSig};

/// Visibility of a declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Visibility {
    Public,
    Protected,
    /// Package-private (no modifier).
    Package,
    Private,
}

impl Visibility {
    /// Check if generated code can reach a declaration with this
    /// visibility. Generated classes live in the host's package, so only
    /// `Private` is out of reach.
    #[inline]
    #[must_use]
    pub const fn reachable_from_generated(self) -> bool {
        !matches!(self, Visibility::Private)
    }
}

/// An invocable signature.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FnSig {
    /// Declared return type. `TypeSig::Void` for void methods.
    pub return_type: TypeSig,
}

impl FnSig {
    /// Create a signature with the given return type.
    pub fn returning(return_type: TypeSig) -> Self {
        FnSig { return_type }
    }
}

/// The syntactic kind of a candidate member, with its typed payload.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum MemberDecl {
    /// A field with its declared type.
    Field { ty: TypeSig },
    /// A method. `sig` is `None` when the front-end could not type the
    /// symbol as invocable.
    Method { sig: Option<FnSig> },
    Constructor,
    Initializer,
}

/// A getter or setter the front-end found alongside a field.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Companion {
    pub name: String,
    pub visibility: Visibility,
}

impl Companion {
    /// Create a companion accessor record.
    pub fn new(name: impl Into<String>, visibility: Visibility) -> Self {
        Companion {
            name: name.into(),
            visibility,
        }
    }
}

/// One candidate member of the host class.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Member {
    /// Simple name as declared.
    pub name: String,
    pub visibility: Visibility,
    /// Declaration position in the host source file.
    pub span: Span,
    pub decl: MemberDecl,
    /// Getter found alongside a field, if any.
    pub companion_getter: Option<Companion>,
    /// Setter found alongside a field, if any.
    pub companion_setter: Option<Companion>,
}

impl Member {
    /// Create a field member.
    pub fn field(name: impl Into<String>, ty: TypeSig, visibility: Visibility, span: Span) -> Self {
        Member {
            name: name.into(),
            visibility,
            span,
            decl: MemberDecl::Field { ty },
            companion_getter: None,
            companion_setter: None,
        }
    }

    /// Create a method member with an invocable signature.
    pub fn method(
        name: impl Into<String>,
        sig: FnSig,
        visibility: Visibility,
        span: Span,
    ) -> Self {
        Member {
            name: name.into(),
            visibility,
            span,
            decl: MemberDecl::Method { sig: Some(sig) },
            companion_getter: None,
            companion_setter: None,
        }
    }

    /// Create a method member whose symbol could not be typed as
    /// invocable.
    pub fn untyped_method(name: impl Into<String>, visibility: Visibility, span: Span) -> Self {
        Member {
            name: name.into(),
            visibility,
            span,
            decl: MemberDecl::Method { sig: None },
            companion_getter: None,
            companion_setter: None,
        }
    }

    /// Attach companion accessors found alongside a field.
    #[must_use]
    pub fn with_companions(mut self, getter: Companion, setter: Companion) -> Self {
        self.companion_getter = Some(getter);
        self.companion_setter = Some(setter);
        self
    }

    /// Declared field type, if this member is a field.
    #[must_use]
    pub fn field_type(&self) -> Option<&TypeSig> {
        match &self.decl {
            MemberDecl::Field { ty } => Some(ty),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Primitive;

    #[test]
    fn test_reachability() {
        assert!(Visibility::Public.reachable_from_generated());
        assert!(Visibility::Protected.reachable_from_generated());
        assert!(Visibility::Package.reachable_from_generated());
        assert!(!Visibility::Private.reachable_from_generated());
    }

    #[test]
    fn test_field_member() {
        let member = Member::field(
            "count",
            TypeSig::Primitive(Primitive::Int),
            Visibility::Public,
            Span::new(10, 25),
        );
        assert_eq!(member.name, "count");
        assert_eq!(
            member.field_type(),
            Some(&TypeSig::Primitive(Primitive::Int))
        );
        assert!(member.companion_getter.is_none());
    }

    #[test]
    fn test_method_member_has_no_field_type() {
        let member = Member::method(
            "getCount",
            FnSig::returning(TypeSig::Primitive(Primitive::Int)),
            Visibility::Public,
            Span::DUMMY,
        );
        assert_eq!(member.field_type(), None);
    }

    #[test]
    fn test_with_companions() {
        let member = Member::field(
            "title",
            TypeSig::Str,
            Visibility::Private,
            Span::DUMMY,
        )
        .with_companions(
            Companion::new("getTitle", Visibility::Public),
            Companion::new("setTitle", Visibility::Public),
        );
        assert!(member.companion_getter.is_some());
        assert!(member.companion_setter.is_some());
    }
}
