//! Declared type signatures.
//!
//! `TypeSig` captures the shape of a member's declared type as supplied by
//! the front-end, before classification into a wire-level [`ParamKind`].
//! Unlike a full type system it is deliberately closed: the generator only
//! distinguishes the shapes that matter for bundle storage.
//!
//! # Design
//!
//! Front-ends (one per source dialect) resolve names, supertypes, and
//! protocol conformance themselves and hand the resolver a finished
//! `TypeSig`. The resolver never inspects source text or symbol tables.
//!
//! [`ParamKind`]: crate::ParamKind

use std::fmt;

use bitflags::bitflags;

/// The eight primitive value types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Primitive {
    Bool,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    /// All primitives, in declaration order.
    pub const ALL: [Primitive; 8] = [
        Primitive::Bool,
        Primitive::Byte,
        Primitive::Short,
        Primitive::Char,
        Primitive::Int,
        Primitive::Long,
        Primitive::Float,
        Primitive::Double,
    ];

    /// Platform-level name of the unboxed primitive.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Primitive::Bool => "boolean",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Char => "char",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    /// Qualified name of the wrapper type around this primitive.
    #[must_use]
    pub const fn boxed_name(self) -> &'static str {
        match self {
            Primitive::Bool => "java.lang.Boolean",
            Primitive::Byte => "java.lang.Byte",
            Primitive::Short => "java.lang.Short",
            Primitive::Char => "java.lang.Character",
            Primitive::Int => "java.lang.Integer",
            Primitive::Long => "java.lang.Long",
            Primitive::Float => "java.lang.Float",
            Primitive::Double => "java.lang.Double",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

bitflags! {
    /// Platform serialization protocols a declared object type implements.
    ///
    /// Recorded by the front-end from the type's supertype closure. The
    /// classifier only asks whether any protocol is present; an emitter
    /// later needs the exact one to pick the pack/unpack call.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Conformance: u8 {
        /// Implements the parcel protocol.
        const PARCELABLE = 1 << 0;
        /// Implements the generic object-serialization protocol.
        const SERIALIZABLE = 1 << 1;
    }
}

impl Conformance {
    /// Check if the type can be stored through any serialization supertype.
    #[inline]
    #[must_use]
    pub const fn any_serialization(self) -> bool {
        self.intersects(Conformance::PARCELABLE.union(Conformance::SERIALIZABLE))
    }
}

/// A declared type signature, preserving the shapes the generator cares
/// about.
///
/// Examples as a front-end would produce them:
/// - `int` → `Primitive(Primitive::Int)`
/// - `java.lang.Integer` → `Boxed(Primitive::Int)`
/// - `java.lang.String[]` → `Array(Str)`
/// - `com.app.User implements Serializable` →
///   `Object { name, conforms: SERIALIZABLE }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeSig {
    /// An unboxed primitive.
    Primitive(Primitive),
    /// A wrapper object around a primitive.
    Boxed(Primitive),
    /// The string type.
    Str,
    /// The character-sequence supertype of strings.
    CharSeq,
    /// An array of some element type.
    Array(Box<TypeSig>),
    /// Any other declared object type.
    Object {
        /// Fully qualified type name as it appears in generated code.
        name: String,
        /// Serialization protocols the type conforms to.
        conforms: Conformance,
    },
    /// The absent type of a void method.
    Void,
}

impl TypeSig {
    /// Create an array signature.
    #[inline]
    pub fn array(elem: TypeSig) -> Self {
        TypeSig::Array(Box::new(elem))
    }

    /// Create an object signature.
    #[inline]
    pub fn object(name: impl Into<String>, conforms: Conformance) -> Self {
        TypeSig::Object {
            name: name.into(),
            conforms,
        }
    }

    /// Create an object signature with no serialization conformance.
    #[inline]
    pub fn plain_object(name: impl Into<String>) -> Self {
        Self::object(name, Conformance::empty())
    }

    /// Render the platform-level signature.
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeSig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSig::Primitive(p) => write!(f, "{}", p.name()),
            TypeSig::Boxed(p) => write!(f, "{}", p.boxed_name()),
            TypeSig::Str => write!(f, "java.lang.String"),
            TypeSig::CharSeq => write!(f, "java.lang.CharSequence"),
            TypeSig::Array(elem) => write!(f, "{elem}[]"),
            TypeSig::Object { name, .. } => write!(f, "{name}"),
            TypeSig::Void => write!(f, "void"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primitive_names() {
        assert_eq!(Primitive::Bool.name(), "boolean");
        assert_eq!(Primitive::Char.boxed_name(), "java.lang.Character");
        assert_eq!(Primitive::Int.boxed_name(), "java.lang.Integer");
    }

    #[test]
    fn test_conformance_queries() {
        assert!(!Conformance::empty().any_serialization());
        assert!(Conformance::PARCELABLE.any_serialization());
        assert!(Conformance::SERIALIZABLE.any_serialization());
        assert!((Conformance::PARCELABLE | Conformance::SERIALIZABLE).any_serialization());
    }

    #[test]
    fn test_display() {
        assert_eq!(TypeSig::Primitive(Primitive::Int).display(), "int");
        assert_eq!(
            TypeSig::Boxed(Primitive::Long).display(),
            "java.lang.Long"
        );
        assert_eq!(TypeSig::Str.display(), "java.lang.String");
        assert_eq!(
            TypeSig::array(TypeSig::Primitive(Primitive::Byte)).display(),
            "byte[]"
        );
        assert_eq!(
            TypeSig::array(TypeSig::Str).display(),
            "java.lang.String[]"
        );
        assert_eq!(
            TypeSig::plain_object("com.app.User").display(),
            "com.app.User"
        );
        assert_eq!(TypeSig::Void.display(), "void");
    }
}
