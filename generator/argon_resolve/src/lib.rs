//! Argument extraction and validation pipeline for the Argon generator.
//!
//! Given typed metadata for an annotated class member, the resolver
//! decides whether the member is a legal injectable argument, which
//! wire-level kind it is stored as, and which user-registered conversion
//! strategy applies. Eligible members produce an [`ArgumentDescriptor`];
//! rejected members produce exactly one diagnostic and are skipped.
//!
//! Control flow per member:
//!
//! ```text
//! classify (field / getter / not applicable)
//!   -> map declared type to a wire kind
//!   -> ordered validation (host shape, visibility, type support,
//!      reachability, host policy)
//!   -> converter resolution (parceler shortcut / registry lookup)
//!   -> descriptor assembly (name, key, optionality)
//! ```
//!
//! Resolution is pure and deterministic: re-running on unchanged input
//! reproduces the identical outcome, and no failure aborts the pass.

mod accessor;
mod config;
mod descriptor;
mod error;
mod pass;
mod resolver;

pub use accessor::FieldAccessor;
pub use config::{Converter, ProjectConfig};
pub use descriptor::{ArgOptions, ArgumentDescriptor};
pub use error::ResolveError;
pub use pass::{resolve_class, AnnotatedMember};
pub use resolver::ArgumentResolver;
