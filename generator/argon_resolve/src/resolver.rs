//! The argument resolution pipeline.
//!
//! One resolver is built per host class and invoked once per annotated
//! member. The pipeline runs classification, wire-kind mapping, ordered
//! validation, converter resolution, and descriptor assembly; the first
//! failing check wins, so diagnostics are deterministic.

use argon_ir::{
    ClassMeta, FnSig, HostClassKind, Member, MemberDecl, ParamKind, TypeDeclKind, TypeSig,
    Visibility,
};

use crate::{ArgOptions, ArgumentDescriptor, Converter, FieldAccessor, ProjectConfig, ResolveError};

/// Resolves annotated members of one host class into argument
/// descriptors.
pub struct ArgumentResolver<'a> {
    host: &'a ClassMeta,
    config: &'a ProjectConfig,
}

impl<'a> ArgumentResolver<'a> {
    /// Create a resolver for one host class.
    pub fn new(host: &'a ClassMeta, config: &'a ProjectConfig) -> Self {
        ArgumentResolver { host, config }
    }

    /// Resolve one candidate member.
    ///
    /// Returns `None` for member kinds the annotation does not apply to
    /// (constructors, initializers); those are skipped without a
    /// diagnostic. Fields and methods route into their respective paths.
    pub fn resolve(
        &self,
        member: &Member,
        package: &str,
        host_kind: HostClassKind,
        options: &ArgOptions,
    ) -> Option<Result<ArgumentDescriptor, ResolveError>> {
        match &member.decl {
            MemberDecl::Field { ty } => {
                Some(self.resolve_field(member, ty, package, host_kind, options))
            }
            MemberDecl::Method { sig } => {
                Some(self.resolve_getter(member, sig.as_ref(), package, host_kind, options))
            }
            MemberDecl::Constructor | MemberDecl::Initializer => None,
        }
    }

    fn resolve_field(
        &self,
        member: &Member,
        ty: &TypeSig,
        package: &str,
        host_kind: HostClassKind,
        options: &ArgOptions,
    ) -> Result<ArgumentDescriptor, ResolveError> {
        let declared = ParamKind::from_sig(ty);
        let accessor = FieldAccessor::from_member(member);
        let kind = self.check_field(host_kind, declared, &accessor, member, ty)?;
        self.assemble(
            member.name.clone(),
            ty.clone(),
            kind,
            accessor,
            package,
            options,
            &member.name,
        )
    }

    fn resolve_getter(
        &self,
        member: &Member,
        sig: Option<&FnSig>,
        package: &str,
        host_kind: HostClassKind,
        options: &ArgOptions,
    ) -> Result<ArgumentDescriptor, ResolveError> {
        let Some(rest) = member.name.strip_prefix("get") else {
            return Err(ResolveError::NotAGetter);
        };
        let name = decapitalize(rest);

        let Some(sig) = sig else {
            return Err(ResolveError::NotAMethod);
        };

        let declared = ParamKind::from_sig(&sig.return_type);
        let accessor = FieldAccessor::from_getter(member, &name);
        let kind = self.check_getter(host_kind, declared, member, &sig.return_type)?;
        self.assemble(
            name,
            sig.return_type.clone(),
            kind,
            accessor,
            package,
            options,
            &member.name,
        )
    }

    /// Ordered validation for the field path. The first failing check
    /// wins; on success the mapped kind is returned.
    fn check_field(
        &self,
        host_kind: HostClassKind,
        declared: Option<ParamKind>,
        accessor: &FieldAccessor,
        member: &Member,
        ty: &TypeSig,
    ) -> Result<ParamKind, ResolveError> {
        let kind = self.check_host_and_type(declared, member, ty)?;
        if !accessor.is_accessible() {
            return Err(ResolveError::InaccessibleField);
        }
        Self::check_host_policy(kind, host_kind)?;
        Ok(kind)
    }

    /// Ordered validation for the getter path. Same as the field path
    /// minus the accessibility check: the annotated getter is the access
    /// route.
    fn check_getter(
        &self,
        host_kind: HostClassKind,
        declared: Option<ParamKind>,
        member: &Member,
        ty: &TypeSig,
    ) -> Result<ParamKind, ResolveError> {
        let kind = self.check_host_and_type(declared, member, ty)?;
        Self::check_host_policy(kind, host_kind)?;
        Ok(kind)
    }

    fn check_host_and_type(
        &self,
        declared: Option<ParamKind>,
        member: &Member,
        ty: &TypeSig,
    ) -> Result<ParamKind, ResolveError> {
        if self.host.kind != TypeDeclKind::Class {
            return Err(ResolveError::NotAClass);
        }
        // Only the enclosing declaration's own visibility is examined;
        // outer nesting levels are not traversed.
        if self.host.visibility == Visibility::Private {
            return Err(ResolveError::PrivateClass);
        }
        declared.ok_or_else(|| ResolveError::NotSupportedType {
            type_name: ty.display(),
            member: member.name.clone(),
        })
    }

    fn check_host_policy(kind: ParamKind, host_kind: HostClassKind) -> Result<(), ResolveError> {
        // Receivers get no persistent instance to deserialize into later,
        // so supertype-serialized kinds are rejected there.
        if kind.used_by_supertype() && !host_kind.has_instance_state() {
            return Err(ResolveError::NotBasicTypeInReceiver);
        }
        Ok(())
    }

    /// Converter resolution.
    ///
    /// Opaque serialization short-circuits without further raw-type
    /// validation. Otherwise a registered converter rewrites the storage
    /// kind; a storage kind that is still the opaque-object sentinel
    /// means nothing can store the value, and the member is rejected.
    fn converter_and_storage(
        &self,
        parceler: bool,
        ty: &TypeSig,
        declared: ParamKind,
        member_name: &str,
    ) -> Result<(Option<Converter>, ParamKind), ResolveError> {
        if parceler {
            return Ok((None, ParamKind::SerializableSubtype));
        }
        let converter = self.config.converter_for(ty).cloned();
        let storage = converter.as_ref().map_or(declared, |c| c.to);
        if storage == ParamKind::ObjectSubtype {
            return Err(ResolveError::NotSupportedType {
                type_name: ty.display(),
                member: member_name.to_owned(),
            });
        }
        Ok((converter, storage))
    }

    fn assemble(
        &self,
        name: String,
        declared_type: TypeSig,
        declared_kind: ParamKind,
        accessor: FieldAccessor,
        package: &str,
        options: &ArgOptions,
        member_name: &str,
    ) -> Result<ArgumentDescriptor, ResolveError> {
        let (converter, storage_kind) =
            self.converter_and_storage(options.parceler, &declared_type, declared_kind, member_name)?;
        let key = argument_key(options.key.as_deref(), package, &name);

        let descriptor = ArgumentDescriptor {
            name,
            key,
            declared_kind,
            declared_type,
            storage_kind,
            optional: options.optional,
            accessor,
            converter,
            parceler: options.parceler,
        };
        debug_assert!(
            descriptor.storage_kind != ParamKind::ObjectSubtype,
            "opaque storage kind must be rejected before assembly"
        );
        Ok(descriptor)
    }
}

/// The explicit non-blank key override, or the default key pattern
/// `{package}.{name}StarterKey`.
fn argument_key(explicit: Option<&str>, package: &str, name: &str) -> String {
    match explicit {
        Some(key) if !key.trim().is_empty() => key.to_owned(),
        _ => format!("{package}.{name}StarterKey"),
    }
}

/// Lowercase only the first character.
fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decapitalize_lowers_first_char_only() {
        assert_eq!(decapitalize("Foo"), "foo");
        assert_eq!(decapitalize("URL"), "uRL");
        assert_eq!(decapitalize("x"), "x");
        assert_eq!(decapitalize(""), "");
    }

    #[test]
    fn test_argument_key_default_pattern() {
        assert_eq!(argument_key(None, "com.app", "foo"), "com.app.fooStarterKey");
    }

    #[test]
    fn test_argument_key_explicit_override() {
        assert_eq!(argument_key(Some("myKey"), "com.app", "foo"), "myKey");
    }

    #[test]
    fn test_argument_key_blank_override_falls_back() {
        assert_eq!(argument_key(Some(""), "com.app", "foo"), "com.app.fooStarterKey");
        assert_eq!(argument_key(Some("   "), "com.app", "foo"), "com.app.fooStarterKey");
    }
}
