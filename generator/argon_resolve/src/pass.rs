//! Per-class driving pass.
//!
//! The surrounding compilation driver hands over one host class at a time
//! together with its annotated members in declaration order. Members are
//! processed independently: a rejection reports one diagnostic and skips
//! that member, siblings are unaffected.

use argon_diagnostic::DiagnosticSink;
use argon_ir::{ClassMeta, HostClassKind, Member};

use crate::{ArgOptions, ArgumentDescriptor, ArgumentResolver, ProjectConfig};

/// One annotated member together with its parsed annotation options.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AnnotatedMember {
    pub member: Member,
    pub options: ArgOptions,
}

impl AnnotatedMember {
    /// Annotated member with default options.
    pub fn new(member: Member) -> Self {
        AnnotatedMember {
            member,
            options: ArgOptions::default(),
        }
    }

    /// Annotated member with explicit options.
    pub fn with_options(member: Member, options: ArgOptions) -> Self {
        AnnotatedMember { member, options }
    }
}

/// Resolve all annotated members of one host class.
///
/// Descriptors come back in declaration order; every rejected member has
/// produced exactly one diagnostic on `sink` by the time this returns.
#[tracing::instrument(level = "debug", skip_all, fields(
    class = %host.qualified_name,
    members = annotated.len(),
))]
pub fn resolve_class(
    host: &ClassMeta,
    host_kind: HostClassKind,
    package: &str,
    annotated: &[AnnotatedMember],
    config: &ProjectConfig,
    sink: &mut dyn DiagnosticSink,
) -> Vec<ArgumentDescriptor> {
    let resolver = ArgumentResolver::new(host, config);
    let mut descriptors = Vec::new();

    for AnnotatedMember { member, options } in annotated {
        match resolver.resolve(member, package, host_kind, options) {
            None => {
                tracing::trace!(member = %member.name, "member kind not applicable, skipping");
            }
            Some(Ok(descriptor)) => {
                tracing::debug!(
                    member = %member.name,
                    storage = %descriptor.storage_kind,
                    "resolved argument"
                );
                descriptors.push(descriptor);
            }
            Some(Err(error)) => {
                tracing::debug!(member = %member.name, code = %error.code(), "rejected argument");
                sink.report(error.into_diagnostic(host, &member.name, member.span));
            }
        }
    }

    descriptors
}
