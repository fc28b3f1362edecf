//! Project configuration: the user-supplied converter registry.
//!
//! Populated once by the surrounding driver before resolution begins and
//! read-only afterwards.

use argon_ir::{ParamKind, TypeSig};
use rustc_hash::FxHashMap;

/// A user-supplied conversion strategy.
///
/// Converts values of `from` to the wire kind `to` when packing, and back
/// when unpacking. The generator only needs the type-level facts; the
/// strategy's code is referenced by qualified name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Converter {
    /// Qualified name of the converter class in user code.
    pub qualified_name: String,
    /// The declared type this strategy converts.
    pub from: TypeSig,
    /// The wire kind it converts to.
    pub to: ParamKind,
}

impl Converter {
    /// Create a converter strategy record.
    pub fn new(qualified_name: impl Into<String>, from: TypeSig, to: ParamKind) -> Self {
        Converter {
            qualified_name: qualified_name.into(),
            from,
            to,
        }
    }
}

/// Registry of converter strategies, keyed by the declared type they
/// convert.
#[derive(Clone, Debug, Default)]
pub struct ProjectConfig {
    converters: FxHashMap<TypeSig, Converter>,
}

impl ProjectConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a converter. A later registration for the same declared
    /// type replaces the earlier one.
    pub fn register(&mut self, converter: Converter) {
        self.converters.insert(converter.from.clone(), converter);
    }

    /// Look up the converter for a declared type signature.
    #[must_use]
    pub fn converter_for(&self, ty: &TypeSig) -> Option<&Converter> {
        self.converters.get(ty)
    }

    /// Number of registered converters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Check if no converters are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup() {
        let mut config = ProjectConfig::new();
        assert!(config.is_empty());

        let ty = TypeSig::plain_object("org.joda.time.DateTime");
        config.register(Converter::new(
            "com.app.DateTimeConverter",
            ty.clone(),
            ParamKind::Long,
        ));

        assert_eq!(config.len(), 1);
        let found = config.converter_for(&ty);
        assert_eq!(found.map(|c| c.to), Some(ParamKind::Long));
        assert_eq!(config.converter_for(&TypeSig::Str), None);
    }

    #[test]
    fn test_last_registration_wins() {
        let mut config = ProjectConfig::new();
        let ty = TypeSig::plain_object("com.app.Money");
        config.register(Converter::new("com.app.MoneyAsString", ty.clone(), ParamKind::Str));
        config.register(Converter::new("com.app.MoneyAsLong", ty.clone(), ParamKind::Long));

        assert_eq!(config.len(), 1);
        assert_eq!(
            config.converter_for(&ty).map(|c| c.qualified_name.as_str()),
            Some("com.app.MoneyAsLong")
        );
    }
}
