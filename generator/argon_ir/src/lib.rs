//! Typed symbol-table abstraction for the Argon generator.
//!
//! Argon inspects compile-time class metadata and generates boilerplate
//! that packs and unpacks annotated members into a key-value bundle. This
//! crate defines the data the resolver consumes:
//!
//! - [`TypeSig`]: declared type signatures, as finished records produced
//!   by a front-end (one per source dialect).
//! - [`ParamKind`]: the closed set of wire-level storage kinds, with the
//!   total classification [`ParamKind::from_sig`].
//! - [`Member`] / [`ClassMeta`] / [`HostClassKind`]: candidate member and
//!   enclosing class metadata.
//!
//! Everything here is plain data created fresh per compilation pass; no
//! state persists across members.

mod class_meta;
mod member;
mod param_kind;
mod span;
mod type_sig;

pub use class_meta::{ClassMeta, HostClassKind, TypeDeclKind};
pub use member::{Companion, FnSig, Member, MemberDecl, Visibility};
pub use param_kind::ParamKind;
pub use span::Span;
pub use type_sig::{Conformance, Primitive, TypeSig};
