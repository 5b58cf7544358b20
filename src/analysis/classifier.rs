// src/analysis/classifier.rs
//! Per-call-site verdict. Each step is an unconditional early return to
//! compliant on match; only a call that survives every step is a violation.

use crate::config::Config;
use crate::error::Result;
use crate::tree::{NodeId, NodeKind, SyntaxTree, TypeRef};
use crate::types::Issue;

use super::exemptions;
use super::navigator::{self, Enclosing};
use super::permitted::PermittedTypes;
use super::resolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No enclosing method scope; the call site is not classified at all.
    Skipped,
    Compliant,
    Violation,
}

/// Classifies one call site.
///
/// # Errors
/// Returns `UnexpectedShape` when the invocation's callee breaks the tree
/// contract; the engine aborts the current unit on that error.
pub fn classify(tree: &SyntaxTree, call: NodeId, config: &Config) -> Result<Verdict> {
    let Some(method) = navigator::find_enclosing(tree, call, Enclosing::Method) else {
        return Ok(Verdict::Skipped);
    };

    // Never report what the symbol model cannot prove.
    let Some(declaration) = resolver::resolve_target(tree, call)? else {
        return Ok(Verdict::Compliant);
    };

    let selector = resolver::selector(tree, call)?;
    if exemptions::is_exempt(config, &selector) {
        return Ok(Verdict::Compliant);
    }

    if is_own_class(tree, method, &declaration.owner) {
        return Ok(Verdict::Compliant);
    }

    let permitted = PermittedTypes::collect(tree, method);
    if permitted.params.contains(&declaration.owner)
        || permitted.fields.contains(&declaration.owner)
        || permitted.locals.contains(&declaration.owner)
    {
        return Ok(Verdict::Compliant);
    }

    Ok(Verdict::Violation)
}

/// Classifies one call site and materializes a violation as an [`Issue`] at
/// the selector identifier.
///
/// # Errors
/// Same contract as [`classify`].
pub fn check_call(tree: &SyntaxTree, call: NodeId, config: &Config) -> Result<Option<Issue>> {
    match classify(tree, call, config)? {
        Verdict::Violation => {
            let selector = resolver::selector(tree, call)?;
            Ok(Some(Issue::at(selector.identifier.span)))
        }
        Verdict::Skipped | Verdict::Compliant => Ok(None),
    }
}

/// True when the invoked member is owned by the calling method's own class,
/// i.e. a self or sibling-method call. A method with no enclosing class is
/// outside what this rule models, so its calls pass.
fn is_own_class(tree: &SyntaxTree, method: NodeId, owner: &TypeRef) -> bool {
    let Some(class) = navigator::find_enclosing(tree, method, Enclosing::Class) else {
        return true;
    };
    match &tree.node(class).kind {
        NodeKind::Class { type_ref, .. } => type_ref == owner,
        _ => false,
    }
}
