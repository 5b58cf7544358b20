// src/analysis/resolver.rs
//! Resolution of a call site to the declaration it invokes and the type
//! that owns that declaration.

use crate::error::{DemeterError, Result};
use crate::tree::{Identifier, NodeId, NodeKind, SymbolRef, SyntaxTree, TypeRef};

use super::navigator::{self, Enclosing};

/// The invoked member's declaring node together with the type that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub node: NodeId,
    pub owner: TypeRef,
}

/// Symbol facts carried on the selector identifier of a call site.
#[derive(Debug, Clone)]
pub struct Selector<'a> {
    pub identifier: &'a Identifier,
    pub is_static: bool,
    pub declaration: SymbolRef,
}

/// Reads the member-select callee of an invocation.
///
/// # Errors
/// Returns `UnexpectedShape` when `call` is not an invocation or its callee
/// is not a member-select. Both indicate a contract mismatch with the
/// upstream tree model and abort the current unit.
pub fn selector<'a>(tree: &'a SyntaxTree, call: NodeId) -> Result<Selector<'a>> {
    let NodeKind::Invocation { callee } = tree.node(call).kind else {
        return Err(DemeterError::UnexpectedShape {
            node: call,
            found: tree.node(call).kind.label(),
        });
    };
    match &tree.node(callee).kind {
        NodeKind::MemberSelect {
            identifier,
            is_static,
            declaration,
        } => Ok(Selector {
            identifier,
            is_static: *is_static,
            declaration: *declaration,
        }),
        other => Err(DemeterError::UnexpectedShape {
            node: callee,
            found: other.label(),
        }),
    }
}

/// Resolves the target declaration of a call site and the type owning it.
///
/// Returns `Ok(None)` when the symbol model has no declaration for the
/// selector, or when the declaring node has no enclosing class the owner
/// type could be read from. The classifier treats both as compliant: the
/// rule never reports a violation it cannot prove.
///
/// # Errors
/// Propagates `UnexpectedShape` from [`selector`].
pub fn resolve_target(tree: &SyntaxTree, call: NodeId) -> Result<Option<Declaration>> {
    let selector = selector(tree, call)?;
    let SymbolRef::Resolved(declared) = selector.declaration else {
        return Ok(None);
    };
    let Some(owner_class) = navigator::find_enclosing(tree, declared, Enclosing::Class) else {
        return Ok(None);
    };
    match &tree.node(owner_class).kind {
        NodeKind::Class { type_ref, .. } => Ok(Some(Declaration {
            node: declared,
            owner: type_ref.clone(),
        })),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{InitializerKind, Span, TreeBuilder};

    #[test]
    fn resolves_owner_from_declaring_class() {
        let mut b = TreeBuilder::new("t");
        let supplier = b.class("Supplier", TypeRef::named("Supplier"));
        let deliver = b.method(supplier, "deliver", vec![]);
        let order = b.class("Order", TypeRef::named("Order"));
        let process = b.method(order, "process", vec![]);
        let inv = b.call(
            process,
            "deliver",
            Span::new(3, 9),
            false,
            SymbolRef::Resolved(deliver),
        );
        let tree = b.build();

        let declaration = resolve_target(&tree, inv).unwrap().unwrap();
        assert_eq!(declaration.node, deliver);
        assert_eq!(declaration.owner, TypeRef::named("Supplier"));
    }

    #[test]
    fn unresolved_symbol_is_none() {
        let mut b = TreeBuilder::new("t");
        let order = b.class("Order", TypeRef::named("Order"));
        let process = b.method(order, "process", vec![]);
        let inv = b.call(
            process,
            "deliver",
            Span::new(3, 9),
            false,
            SymbolRef::Unresolved,
        );
        let tree = b.build();

        assert!(resolve_target(&tree, inv).unwrap().is_none());
    }

    #[test]
    fn declaration_without_class_is_none() {
        let mut b = TreeBuilder::new("t");
        let root = b.root();
        // A method declared at top level, outside any class.
        let stray = b.method(root, "stray", vec![]);
        let order = b.class("Order", TypeRef::named("Order"));
        let process = b.method(order, "process", vec![]);
        let inv = b.call(
            process,
            "stray",
            Span::new(3, 9),
            false,
            SymbolRef::Resolved(stray),
        );
        let tree = b.build();

        assert!(resolve_target(&tree, inv).unwrap().is_none());
    }

    #[test]
    fn non_invocation_node_is_a_shape_error() {
        let mut b = TreeBuilder::new("t");
        let order = b.class("Order", TypeRef::named("Order"));
        let process = b.method(order, "process", vec![]);
        let var = b.variable(
            process,
            "x",
            TypeRef::named("X"),
            Some(InitializerKind::Other),
        );
        let tree = b.build();

        let err = resolve_target(&tree, var).unwrap_err();
        assert!(err.to_string().contains("member-select"));
    }
}
