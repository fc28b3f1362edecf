//! Wire-level parameter kinds.
//!
//! `ParamKind` is the closed set of representations an argument's value may
//! be stored as in the key-value bundle. The mapping from declared type
//! signatures ([`ParamKind::from_sig`]) is a total classification: it never
//! fails, it only declines with `None` for shapes the bundle cannot hold.

use std::fmt;

use crate::{Primitive, TypeSig};

/// Enum representing all wire kinds an argument can be stored as.
///
/// Two variants are sentinels rather than directly storable kinds:
/// - [`ParamKind::SerializableSubtype`]: the value is stored through a
///   platform serialization supertype protocol, not a dedicated slot.
/// - [`ParamKind::ObjectSubtype`]: an opaque object with no storage path;
///   only a registered converter or the opaque-serialization option makes
///   such a member legal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParamKind {
    // Primitives
    Bool,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,

    // Strings
    Str,
    CharSeq,

    // Arrays
    BoolArray,
    ByteArray,
    ShortArray,
    CharArray,
    IntArray,
    LongArray,
    FloatArray,
    DoubleArray,
    StrArray,
    CharSeqArray,

    // Sentinels
    /// Stored via a serialization supertype protocol.
    SerializableSubtype,
    /// Opaque object with no storage path of its own.
    ObjectSubtype,
}

impl ParamKind {
    /// Classify a declared type signature into a wire kind.
    ///
    /// Returns `None` for shapes the bundle has no slot for: void, and
    /// arrays whose element type has no array slot. Plain objects without
    /// serialization conformance classify as [`ParamKind::ObjectSubtype`]
    /// so that converter resolution can still rescue them.
    #[must_use]
    pub fn from_sig(sig: &TypeSig) -> Option<ParamKind> {
        match sig {
            TypeSig::Primitive(p) => Some(Self::from_primitive(*p)),
            // Wrappers have no dedicated slot; they ride the serialization
            // supertype protocol.
            TypeSig::Boxed(_) => Some(ParamKind::SerializableSubtype),
            TypeSig::Str => Some(ParamKind::Str),
            TypeSig::CharSeq => Some(ParamKind::CharSeq),
            TypeSig::Array(elem) => Self::array_from_elem(elem),
            TypeSig::Object { conforms, .. } => {
                if conforms.any_serialization() {
                    Some(ParamKind::SerializableSubtype)
                } else {
                    Some(ParamKind::ObjectSubtype)
                }
            }
            TypeSig::Void => None,
        }
    }

    /// Wire kind for an unboxed primitive.
    #[must_use]
    pub const fn from_primitive(p: Primitive) -> ParamKind {
        match p {
            Primitive::Bool => ParamKind::Bool,
            Primitive::Byte => ParamKind::Byte,
            Primitive::Short => ParamKind::Short,
            Primitive::Char => ParamKind::Char,
            Primitive::Int => ParamKind::Int,
            Primitive::Long => ParamKind::Long,
            Primitive::Float => ParamKind::Float,
            Primitive::Double => ParamKind::Double,
        }
    }

    fn array_from_elem(elem: &TypeSig) -> Option<ParamKind> {
        match elem {
            TypeSig::Primitive(p) => Some(match p {
                Primitive::Bool => ParamKind::BoolArray,
                Primitive::Byte => ParamKind::ByteArray,
                Primitive::Short => ParamKind::ShortArray,
                Primitive::Char => ParamKind::CharArray,
                Primitive::Int => ParamKind::IntArray,
                Primitive::Long => ParamKind::LongArray,
                Primitive::Float => ParamKind::FloatArray,
                Primitive::Double => ParamKind::DoubleArray,
            }),
            TypeSig::Str => Some(ParamKind::StrArray),
            TypeSig::CharSeq => Some(ParamKind::CharSeqArray),
            _ => None,
        }
    }

    /// Stable kind name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ParamKind::Bool => "boolean",
            ParamKind::Byte => "byte",
            ParamKind::Short => "short",
            ParamKind::Char => "char",
            ParamKind::Int => "int",
            ParamKind::Long => "long",
            ParamKind::Float => "float",
            ParamKind::Double => "double",
            ParamKind::Str => "String",
            ParamKind::CharSeq => "CharSequence",
            ParamKind::BoolArray => "boolean[]",
            ParamKind::ByteArray => "byte[]",
            ParamKind::ShortArray => "short[]",
            ParamKind::CharArray => "char[]",
            ParamKind::IntArray => "int[]",
            ParamKind::LongArray => "long[]",
            ParamKind::FloatArray => "float[]",
            ParamKind::DoubleArray => "double[]",
            ParamKind::StrArray => "String[]",
            ParamKind::CharSeqArray => "CharSequence[]",
            ParamKind::SerializableSubtype => "Serializable subtype",
            ParamKind::ObjectSubtype => "Object subtype",
        }
    }

    /// Check if values of this kind are stored through their serialization
    /// supertype protocol.
    ///
    /// These kinds require a persistent instance to deserialize into later
    /// and are rejected on host classes without one.
    #[must_use]
    pub const fn used_by_supertype(self) -> bool {
        matches!(self, ParamKind::SerializableSubtype)
    }

    /// Check if this is an array kind.
    #[must_use]
    pub const fn is_array(self) -> bool {
        matches!(
            self,
            ParamKind::BoolArray
                | ParamKind::ByteArray
                | ParamKind::ShortArray
                | ParamKind::CharArray
                | ParamKind::IntArray
                | ParamKind::LongArray
                | ParamKind::FloatArray
                | ParamKind::DoubleArray
                | ParamKind::StrArray
                | ParamKind::CharSeqArray
        )
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Conformance;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primitives_always_map() {
        for p in Primitive::ALL {
            assert_eq!(
                ParamKind::from_sig(&TypeSig::Primitive(p)),
                Some(ParamKind::from_primitive(p))
            );
        }
    }

    #[test]
    fn test_boxed_maps_to_serializable_subtype() {
        for p in Primitive::ALL {
            assert_eq!(
                ParamKind::from_sig(&TypeSig::Boxed(p)),
                Some(ParamKind::SerializableSubtype)
            );
        }
    }

    #[test]
    fn test_strings_map() {
        assert_eq!(ParamKind::from_sig(&TypeSig::Str), Some(ParamKind::Str));
        assert_eq!(
            ParamKind::from_sig(&TypeSig::CharSeq),
            Some(ParamKind::CharSeq)
        );
    }

    #[test]
    fn test_arrays_map() {
        assert_eq!(
            ParamKind::from_sig(&TypeSig::array(TypeSig::Primitive(Primitive::Int))),
            Some(ParamKind::IntArray)
        );
        assert_eq!(
            ParamKind::from_sig(&TypeSig::array(TypeSig::Str)),
            Some(ParamKind::StrArray)
        );
        assert_eq!(
            ParamKind::from_sig(&TypeSig::array(TypeSig::CharSeq)),
            Some(ParamKind::CharSeqArray)
        );
    }

    #[test]
    fn test_unsupported_arrays_decline() {
        // No slot for arrays of arrays or arrays of objects.
        let nested = TypeSig::array(TypeSig::array(TypeSig::Primitive(Primitive::Int)));
        assert_eq!(ParamKind::from_sig(&nested), None);

        let objects = TypeSig::array(TypeSig::plain_object("com.app.User"));
        assert_eq!(ParamKind::from_sig(&objects), None);
    }

    #[test]
    fn test_objects_classify_by_conformance() {
        let parcelable = TypeSig::object("com.app.Photo", Conformance::PARCELABLE);
        assert_eq!(
            ParamKind::from_sig(&parcelable),
            Some(ParamKind::SerializableSubtype)
        );

        let serializable = TypeSig::object("com.app.User", Conformance::SERIALIZABLE);
        assert_eq!(
            ParamKind::from_sig(&serializable),
            Some(ParamKind::SerializableSubtype)
        );

        let plain = TypeSig::plain_object("com.app.Session");
        assert_eq!(ParamKind::from_sig(&plain), Some(ParamKind::ObjectSubtype));
    }

    #[test]
    fn test_void_declines() {
        assert_eq!(ParamKind::from_sig(&TypeSig::Void), None);
    }

    #[test]
    fn test_used_by_supertype() {
        assert!(ParamKind::SerializableSubtype.used_by_supertype());
        assert!(!ParamKind::ObjectSubtype.used_by_supertype());
        assert!(!ParamKind::Int.used_by_supertype());
        assert!(!ParamKind::StrArray.used_by_supertype());
    }

    #[test]
    fn test_is_array() {
        assert!(ParamKind::IntArray.is_array());
        assert!(ParamKind::CharSeqArray.is_array());
        assert!(!ParamKind::Int.is_array());
        assert!(!ParamKind::SerializableSubtype.is_array());
    }

    #[test]
    fn test_names() {
        assert_eq!(ParamKind::Bool.name(), "boolean");
        assert_eq!(ParamKind::Str.name(), "String");
        assert_eq!(ParamKind::IntArray.name(), "int[]");
        assert_eq!(ParamKind::SerializableSubtype.name(), "Serializable subtype");
    }
}
