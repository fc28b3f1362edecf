//! Field access strategies.
//!
//! Generated code reads an argument when packing and writes it back when
//! injecting. `FieldAccessor` records which route is available: the field
//! itself, or a getter/setter pair around it.

use argon_ir::{Member, Visibility};

/// How generated code reads and writes one argument.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum FieldAccessor {
    /// Direct field access.
    Field { name: String, visibility: Visibility },
    /// Access through a getter/setter pair.
    Property {
        /// Logical field name.
        field: String,
        getter: String,
        setter: String,
        getter_visibility: Visibility,
        setter_visibility: Visibility,
    },
}

impl FieldAccessor {
    /// Build the accessor for a field member.
    ///
    /// A private field with both companion accessors is reached through
    /// them; everything else is direct access (accessibility is judged
    /// separately).
    #[must_use]
    pub fn from_member(member: &Member) -> Self {
        if member.visibility == Visibility::Private {
            if let (Some(getter), Some(setter)) =
                (&member.companion_getter, &member.companion_setter)
            {
                return FieldAccessor::Property {
                    field: member.name.clone(),
                    getter: getter.name.clone(),
                    setter: setter.name.clone(),
                    getter_visibility: getter.visibility,
                    setter_visibility: setter.visibility,
                };
            }
        }
        FieldAccessor::Field {
            name: member.name.clone(),
            visibility: member.visibility,
        }
    }

    /// Build the accessor for a getter-path member.
    ///
    /// The getter is the annotated method itself; the setter name is
    /// derived from the logical name by convention.
    #[must_use]
    pub fn from_getter(member: &Member, logical_name: &str) -> Self {
        FieldAccessor::Property {
            field: logical_name.to_owned(),
            getter: member.name.clone(),
            setter: format!("set{}", capitalize(logical_name)),
            getter_visibility: member.visibility,
            setter_visibility: member.visibility,
        }
    }

    /// Check if generated code can reach this accessor.
    #[must_use]
    pub fn is_accessible(&self) -> bool {
        match self {
            FieldAccessor::Field { visibility, .. } => visibility.reachable_from_generated(),
            FieldAccessor::Property {
                getter_visibility,
                setter_visibility,
                ..
            } => {
                getter_visibility.reachable_from_generated()
                    && setter_visibility.reachable_from_generated()
            }
        }
    }

    /// Logical field name this accessor targets.
    #[must_use]
    pub fn field_name(&self) -> &str {
        match self {
            FieldAccessor::Field { name, .. } => name,
            FieldAccessor::Property { field, .. } => field,
        }
    }
}

/// Uppercase only the first character.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon_ir::{Companion, Span, TypeSig};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_public_field_is_direct() {
        let member = Member::field("count", TypeSig::Str, Visibility::Public, Span::DUMMY);
        let accessor = FieldAccessor::from_member(&member);
        assert_eq!(
            accessor,
            FieldAccessor::Field {
                name: "count".into(),
                visibility: Visibility::Public,
            }
        );
        assert!(accessor.is_accessible());
    }

    #[test]
    fn test_private_field_with_companions_uses_them() {
        let member = Member::field("title", TypeSig::Str, Visibility::Private, Span::DUMMY)
            .with_companions(
                Companion::new("getTitle", Visibility::Public),
                Companion::new("setTitle", Visibility::Public),
            );
        let accessor = FieldAccessor::from_member(&member);
        assert!(matches!(accessor, FieldAccessor::Property { .. }));
        assert!(accessor.is_accessible());
        assert_eq!(accessor.field_name(), "title");
    }

    #[test]
    fn test_private_field_without_companions_is_inaccessible() {
        let member = Member::field("title", TypeSig::Str, Visibility::Private, Span::DUMMY);
        let accessor = FieldAccessor::from_member(&member);
        assert!(matches!(accessor, FieldAccessor::Field { .. }));
        assert!(!accessor.is_accessible());
    }

    #[test]
    fn test_private_companion_blocks_access() {
        let member = Member::field("title", TypeSig::Str, Visibility::Private, Span::DUMMY)
            .with_companions(
                Companion::new("getTitle", Visibility::Public),
                Companion::new("setTitle", Visibility::Private),
            );
        assert!(!FieldAccessor::from_member(&member).is_accessible());
    }

    #[test]
    fn test_from_getter_derives_setter_name() {
        let member = Member::field("unused", TypeSig::Str, Visibility::Public, Span::DUMMY);
        let accessor = FieldAccessor::from_getter(
            &Member {
                name: "getUserName".into(),
                ..member
            },
            "userName",
        );
        assert_eq!(
            accessor,
            FieldAccessor::Property {
                field: "userName".into(),
                getter: "getUserName".into(),
                setter: "setUserName".into(),
                getter_visibility: Visibility::Public,
                setter_visibility: Visibility::Public,
            }
        );
    }
}
